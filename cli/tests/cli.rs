use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn reader() -> Command {
    let mut cmd = Command::cargo_bin("directory-reader").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn missing_target_exits_with_one() {
    reader().assert().code(1);
}

#[test]
fn non_directory_target_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    reader()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn unknown_flag_exits_with_one() {
    let dir = tempdir().unwrap();
    reader().arg("--frobnicate").arg(dir.path()).assert().code(1);
}

#[test]
fn writes_document_and_reports_it() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.go"), "package main\n").unwrap();
    fs::write(dir.path().join("README.md"), "# hello\n").unwrap();

    reader()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("directory_content.md"))
        .stdout(predicate::str::contains("has been created in"));

    let doc = fs::read_to_string(dir.path().join("directory_content.md")).unwrap();
    let go = doc.find("## main.go").unwrap();
    let readme = doc.find("## README.md").unwrap();
    assert!(go < readme);
}

#[test]
fn program_binary_name_is_excluded() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("directory-reader"), "#!/bin/sh\n").unwrap();
    fs::write(dir.path().join("other.sh"), "echo\n").unwrap();

    reader().arg(dir.path()).assert().success();

    let doc = fs::read_to_string(dir.path().join("directory_content.md")).unwrap();
    assert!(!doc.contains("directory-reader"));
    assert!(doc.contains("## other.sh"));
}

#[test]
fn counts_tokens_with_heuristic() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "a".repeat(5000)).unwrap();

    let assert = reader()
        .arg("--count-tokens")
        .arg(dir.path())
        .assert()
        .success();

    let size = fs::metadata(dir.path().join("directory_content.md"))
        .unwrap()
        .len() as usize;
    let expected = size.div_ceil(4);
    assert!(expected >= 1000);
    let formatted = format!("{},{:03}", expected / 1000, expected % 1000);
    assert.stdout(predicate::str::contains(formatted));
}

#[test]
fn remote_disabled_in_config_skips_languages() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".readerconfig.toml"),
        "[remote]\nenabled = false\n",
    )
    .unwrap();
    fs::write(dir.path().join("main.go"), "package main\n").unwrap();

    reader()
        .arg("--ignore=go")
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn unreachable_pattern_service_is_fatal() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("reader.toml");
    fs::write(
        &config,
        "[remote]\nbase_url = \"http://127.0.0.1:1\"\ntimeout = \"2s\"\n",
    )
    .unwrap();

    reader()
        .arg("--ignore=go")
        .arg("--config")
        .arg(&config)
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch ignore patterns for 'go'"));

    assert!(!dir.path().join("directory_content.md").exists());
}

#[test]
fn invalid_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".readerconfig.toml"), "[bogus]\nx = 1\n").unwrap();

    reader()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn relative_target_applies_nested_ignore_rules() {
    let dir = tempdir().unwrap();
    let web = dir.path().join("web");
    fs::create_dir_all(web.join("web-build/cache")).unwrap();
    fs::write(web.join(".gitignore"), "web-build/cache/\n").unwrap();
    fs::write(web.join("web-build/cache/blob.txt"), "cached\n").unwrap();
    fs::write(web.join("web-build/app.js"), "run();\n").unwrap();

    reader()
        .current_dir(dir.path())
        .arg("web")
        .assert()
        .success();

    let doc = fs::read_to_string(web.join("directory_content.md")).unwrap();
    assert!(doc.contains("## web-build/app.js"));
    assert!(!doc.contains("blob.txt"));
    assert!(!doc.contains("cached"));
}
