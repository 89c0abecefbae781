// Static extension and file-name tables used for language detection and
// for tagging fenced code blocks in the output document.

/// Languages whose remote ignore sets apply when a file with this extension
/// (lowercase, without the dot) is present.
pub fn map_extension_to_ignore_languages(extension: &str) -> &'static [&'static str] {
    match extension {
        "py" => &["python"],
        "js" => &["javascript", "node"],
        "ts" => &["typescript", "node"],
        "java" => &["java"],
        "go" => &["go"],
        "rb" => &["ruby"],
        "php" => &["php"],
        "cs" => &["csharp"],
        "cpp" => &["c++"],
        "c" => &["c"],
        "rs" => &["rust"],
        "swift" => &["swift"],
        "kt" => &["kotlin"],
        "scala" => &["scala"],
        "sh" => &["bash"],
        _ => &[],
    }
}

/// Info string for the code fence around a file's contents.
pub fn map_file_to_fence_tag(file_name: &str, extension: Option<&str>) -> Option<&'static str> {
    match file_name {
        "Dockerfile" => return Some("dockerfile"),
        "Makefile" => return Some("makefile"),
        ".gitignore" | ".readerignore" => return Some("gitignore"),
        "package.json" | "composer.json" => return Some("json"),
        _ => {}
    }

    match extension? {
        "go" => Some("go"),
        "py" => Some("python"),
        "js" => Some("javascript"),
        "ts" => Some("typescript"),
        "jsx" => Some("jsx"),
        "tsx" => Some("tsx"),
        "html" => Some("html"),
        "css" => Some("css"),
        "scss" => Some("scss"),
        "xml" => Some("xml"),
        "sh" => Some("bash"),
        "md" => Some("markdown"),
        "java" => Some("java"),
        "c" => Some("c"),
        "cpp" => Some("cpp"),
        "cs" => Some("csharp"),
        "rb" => Some("ruby"),
        "php" => Some("php"),
        "json" => Some("json"),
        "yaml" | "yml" => Some("yaml"),
        "toml" => Some("toml"),
        "sql" => Some("sql"),
        "rs" => Some("rust"),
        _ => None,
    }
}
