use crate::binary;
use crate::error::{ReaderError, Result};
use crate::patterns::{IgnoreMatcher, OUTPUT_FILE_NAME};
use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub depth: usize,
    pub is_dir: bool,
}

impl WalkEntry {
    /// Relative path joined with `/` regardless of platform.
    pub fn relative_display(&self) -> String {
        slash_path(&self.relative_path)
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

pub fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Decides which entries a traversal yields.
///
/// Files named like the output document or any extra reserved name are
/// always dropped, whatever the matcher says. Symlinks are never followed
/// nor yielded, and neither are sockets, FIFOs or device nodes.
pub struct WalkFilter<'a> {
    matcher: &'a IgnoreMatcher,
    reserved_names: Vec<String>,
    detect_binary: bool,
}

impl<'a> WalkFilter<'a> {
    pub fn new(matcher: &'a IgnoreMatcher) -> Self {
        Self {
            matcher,
            reserved_names: vec![OUTPUT_FILE_NAME.to_string()],
            detect_binary: true,
        }
    }

    pub fn reserve_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() && !self.reserved_names.contains(&name) {
            self.reserved_names.push(name);
        }
        self
    }

    pub fn detect_binary(mut self, yes: bool) -> Self {
        self.detect_binary = yes;
        self
    }

    fn admits(&self, root: &Path, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            log::debug!("Skipping symlink: {}", entry.path().display());
            return false;
        }
        let is_dir = file_type.is_dir();
        if !is_dir && !file_type.is_file() {
            log::debug!("Skipping special file: {}", entry.path().display());
            return false;
        }
        if !is_dir {
            let name = entry.file_name().to_string_lossy();
            if self.reserved_names.iter().any(|r| *r == *name) {
                log::trace!("Skipping reserved file: {}", entry.path().display());
                return false;
            }
        }
        let Some(relative) = pathdiff::diff_paths(entry.path(), root) else {
            log::warn!("Could not get relative path for: {}", entry.path().display());
            return false;
        };
        if self.matcher.is_ignored(&relative, is_dir) {
            log::trace!("Ignored by pattern: {}", relative.display());
            return false;
        }
        true
    }

    fn classify(&self, root: &Path, entry: DirEntry) -> Option<WalkEntry> {
        let is_dir = entry.file_type().is_dir();
        if !is_dir && self.detect_binary {
            match binary::is_binary(entry.path()) {
                Ok(true) => return None,
                Ok(false) => {}
                Err(e) => {
                    // Kept so the read failure surfaces inline in the document.
                    log::warn!("Could not classify {}: {}", entry.path().display(), e);
                }
            }
        }
        let relative_path = pathdiff::diff_paths(entry.path(), root).unwrap_or_default();
        Some(WalkEntry {
            depth: entry.depth(),
            path: entry.into_path(),
            relative_path,
            is_dir,
        })
    }
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Depth-first traversal of `root`: at each level files come before
/// subdirectories, both alphabetical. Ignored directories are pruned, not
/// descended. The root itself is the first item, at depth 0.
pub fn walk<'a>(
    root: &'a Path,
    filter: &'a WalkFilter<'a>,
) -> impl Iterator<Item = Result<WalkEntry>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first_by_name)
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || filter.admits(root, entry))
        .filter_map(move |result| match result {
            Ok(entry) => filter.classify(root, entry).map(Ok),
            Err(e) => Some(Err(ReaderError::from(e))),
        })
}
