use std::path::Path;

/// Output precedence of a file. Lower ranks are emitted first, so the files
/// most useful as final context end up closest to the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Test,
    Implementation,
    Default,
    Config,
    Markdown,
    Readme,
}

const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml", "xml", "ini"];
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "txt"];
const IMPLEMENTATION_EXTENSIONS: &[&str] = &[
    "go", "py", "js", "ts", "java", "c", "cpp", "cs", "rb", "php", "rs", "jsx", "tsx", "kt",
    "swift", "scala", "h", "hpp", "sh",
];

pub fn rank_file(relative_path: &Path) -> Rank {
    let name = relative_path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if name.contains("readme") {
        return Rank::Readme;
    }
    if name.contains("test") {
        return Rank::Test;
    }

    let extension = relative_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let extension = extension.as_str();

    if CONFIG_EXTENSIONS.contains(&extension) {
        Rank::Config
    } else if MARKDOWN_EXTENSIONS.contains(&extension) {
        Rank::Markdown
    } else if IMPLEMENTATION_EXTENSIONS.contains(&extension) {
        Rank::Implementation
    } else {
        Rank::Default
    }
}
