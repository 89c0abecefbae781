use crate::error::Result;
use crate::walk::{self, WalkFilter};
use std::path::Path;

const INDENT: &str = "  ";

/// Renders the filtered hierarchy under `root` as an indented list.
///
/// ```text
/// - project/
///   - Cargo.toml
///   - src/
///     - main.rs
/// ```
pub fn render_tree(root: &Path, filter: &WalkFilter) -> Result<String> {
    log::debug!("Rendering directory tree for: {}", root.display());
    let mut out = String::new();
    let mut lines = 0usize;

    for entry in walk::walk(root, filter) {
        let entry = entry?;
        let name = if entry.depth == 0 {
            root_name(root)
        } else {
            entry.file_name()
        };
        let suffix = if entry.is_dir { "/" } else { "" };
        out.push_str(&format!("{}- {}{}\n", INDENT.repeat(entry.depth), name, suffix));
        lines += 1;
    }

    log::debug!("Tree rendered with {} entries.", lines);
    Ok(out)
}

fn root_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}
