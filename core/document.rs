use crate::error::{ReaderError, Result};
use crate::languages::mapping::map_file_to_fence_tag;
use crate::patterns::{IgnoreMatcher, OUTPUT_FILE_NAME};
use crate::ranking::{Rank, rank_file};
use crate::tree::render_tree;
use crate::walk::{self, WalkFilter};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A file that survived filtering and will be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub name: String,
    pub rank: Rank,
}

impl CandidateFile {
    pub fn fence_tag(&self) -> Option<&'static str> {
        let extension = Path::new(&self.name).extension().and_then(|e| e.to_str());
        map_file_to_fence_tag(&self.name, extension)
    }
}

/// Collects every non-ignored, non-binary file under `root`, ordered by rank
/// and then by relative path.
pub fn collect_candidates(root: &Path, filter: &WalkFilter) -> Result<Vec<CandidateFile>> {
    let mut files = Vec::new();
    for entry in walk::walk(root, filter) {
        let entry = entry?;
        if entry.is_dir {
            continue;
        }
        let rank = rank_file(&entry.relative_path);
        log::trace!("Candidate {} ranked {:?}", entry.relative_display(), rank);
        files.push(CandidateFile {
            relative_path: entry.relative_display(),
            name: entry.file_name(),
            path: entry.path,
            rank,
        });
    }
    files.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.relative_path.cmp(&b.relative_path))
    });
    Ok(files)
}

/// Writes `directory_content.md` into `target_dir` and returns its path.
///
/// `script_name` is the invoking program's file name; like the output file it
/// never appears in the document. A file that cannot be read gets an inline
/// error line instead of its contents.
pub fn assemble(script_name: &str, target_dir: &Path, matcher: &IgnoreMatcher) -> Result<PathBuf> {
    let output_path = target_dir.join(OUTPUT_FILE_NAME);
    log::info!("Assembling document: {}", output_path.display());

    let filter = WalkFilter::new(matcher).reserve_name(script_name);
    let tree = render_tree(target_dir, &filter)?;
    let files = collect_candidates(target_dir, &filter)?;
    log::info!("Writing contents of {} files.", files.len());

    // A failed walk leaves any previous document in place.
    let file = File::create(&output_path).map_err(|e| ReaderError::file_write(&output_path, e))?;
    let mut writer = BufWriter::new(file);

    write_document(&mut writer, &tree, &files)
        .and_then(|_| writer.flush())
        .map_err(|e| ReaderError::file_write(&output_path, e))?;

    Ok(output_path)
}

fn write_document<W: Write>(out: &mut W, tree: &str, files: &[CandidateFile]) -> io::Result<()> {
    out.write_all(b"# Directory Structure\n\n```\n")?;
    out.write_all(tree.as_bytes())?;
    out.write_all(b"```\n\n# File Contents\n\n")?;

    for file in files {
        writeln!(out, "## {}\n", file.relative_path)?;
        writeln!(out, "```{}", file.fence_tag().unwrap_or(""))?;
        match fs::read(&file.path) {
            Ok(content) => {
                out.write_all(&content)?;
                if !content.ends_with(b"\n") {
                    out.write_all(b"\n")?;
                }
            }
            Err(e) => {
                log::warn!("Error reading file {}: {}", file.path.display(), e);
                writeln!(out, "Error reading file: {}", e)?;
            }
        }
        out.write_all(b"```\n\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn candidate(relative_path: &str) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(relative_path),
            relative_path: relative_path.to_string(),
            name: relative_path.rsplit('/').next().unwrap().to_string(),
            rank: rank_file(Path::new(relative_path)),
        }
    }

    #[test]
    fn fence_tags_follow_name_then_extension() {
        assert_eq!(candidate("docker/Dockerfile").fence_tag(), Some("dockerfile"));
        assert_eq!(candidate("src/app.py").fence_tag(), Some("python"));
        assert_eq!(candidate("LICENSE").fence_tag(), None);
    }

    #[test]
    fn content_blocks_end_with_a_newline() {
        let dir = tempdir().unwrap();
        let with_newline = dir.path().join("a.go");
        let without_newline = dir.path().join("b.txt");
        fs::write(&with_newline, "package a\n").unwrap();
        fs::write(&without_newline, "no newline").unwrap();

        let mut files = vec![candidate("a.go"), candidate("b.txt")];
        files[0].path = with_newline;
        files[1].path = without_newline;

        let mut out = Vec::new();
        write_document(&mut out, "- root/\n", &files).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "# Directory Structure\n\n```\n- root/\n```\n\n# File Contents\n\n\
             ## a.go\n\n```go\npackage a\n```\n\n\
             ## b.txt\n\n```\nno newline\n```\n\n"
        );
    }

    #[test]
    fn unreadable_file_is_reported_inline() {
        let dir = tempdir().unwrap();
        let mut missing = candidate("gone.rs");
        missing.path = dir.path().join("gone.rs");

        let mut out = Vec::new();
        write_document(&mut out, "", &[missing]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("## gone.rs\n\n```rust\nError reading file: "));
        assert!(text.ends_with("```\n\n"));
    }

    #[test]
    fn file_vanishing_after_collection_is_reported_inline() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.py"), "print(1)\n").unwrap();
        fs::write(dir.path().join("gone.py"), "print(2)\n").unwrap();
        fs::write(dir.path().join("last.md"), "# last\n").unwrap();

        let matcher = IgnoreMatcher::compile(dir.path(), &[]).unwrap();
        let files = collect_candidates(dir.path(), &WalkFilter::new(&matcher)).unwrap();
        assert_eq!(files.len(), 3);
        fs::remove_file(dir.path().join("gone.py")).unwrap();

        let mut out = Vec::new();
        write_document(&mut out, "", &files).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("## gone.py\n\n```python\nError reading file: "));
        assert!(text.contains("## keep.py\n\n```python\nprint(1)\n```"));
        assert!(text.ends_with("## last.md\n\n```markdown\n# last\n```\n\n"));
    }

    #[test]
    fn candidates_are_ranked() {
        let dir = tempdir().unwrap();
        for name in ["a_test.go", "b.go", "README.md", "config.json"] {
            fs::write(dir.path().join(name), "x\n").unwrap();
        }
        let matcher = IgnoreMatcher::compile(dir.path(), &[]).unwrap();
        let names: Vec<String> = collect_candidates(dir.path(), &WalkFilter::new(&matcher))
            .unwrap()
            .into_iter()
            .map(|c| c.relative_path)
            .collect();
        assert_eq!(names, vec!["a_test.go", "b.go", "config.json", "README.md"]);
    }
}
