//! Binary-vs-text classification for candidate files.
//!
//! Classification runs cheapest first: a known binary extension short-circuits
//! without touching the disk. Otherwise only the first [`SAMPLE_SIZE`] bytes
//! are inspected.

use crate::error::{ReaderError, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const SAMPLE_SIZE: usize = 8000;

static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // executables and object code
        "exe", "dll", "so", "dylib", "bin", "o", "a", "lib", "obj", "class", "pyc", "pyo", "wasm",
        // archives
        "jar", "war", "zip", "gz", "tgz", "bz2", "xz", "7z", "rar", "tar", "zst",
        // images
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tif", "tiff", "psd",
        // documents
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt",
        // fonts and media
        "ttf", "otf", "woff", "woff2", "eot", "mp3", "mp4", "wav", "ogg", "flac", "avi", "mov",
        "mkv", "webm",
        // databases
        "db", "sqlite", "sqlite3",
    ]
    .into_iter()
    .collect()
});

const MAGIC_SIGNATURES: &[&[u8]] = &[
    b"\x7FELF",
    b"MZ",
    b"PK\x03\x04",
    b"\x89PNG\r\n\x1A\n",
    b"\xFF\xD8\xFF",
    b"GIF8",
    b"%PDF",
];

pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()))
}

pub fn is_binary(path: &Path) -> Result<bool> {
    if has_binary_extension(path) {
        log::trace!("Binary by extension: {}", path.display());
        return Ok(true);
    }

    let file = File::open(path).map_err(|e| ReaderError::file_read(path, e))?;
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    file.take(SAMPLE_SIZE as u64)
        .read_to_end(&mut sample)
        .map_err(|e| ReaderError::file_read(path, e))?;

    let binary = is_binary_sample(&sample);
    if binary {
        log::trace!("Binary by content: {}", path.display());
    }
    Ok(binary)
}

/// Applies the content heuristics to an already-read sample.
pub fn is_binary_sample(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return false;
    }

    if MAGIC_SIGNATURES.iter().any(|sig| sample.starts_with(sig)) {
        return true;
    }

    if content_inspector::inspect(sample).is_binary() {
        return true;
    }

    // A multi-byte character cut at the sample boundary is not an encoding error.
    if let Err(e) = std::str::from_utf8(sample) {
        if e.error_len().is_some() {
            return true;
        }
    }

    let mut control = 0usize;
    for &b in sample {
        if b == 0 {
            return true;
        }
        if b < 0x08 || (0x0E..0x20).contains(&b) {
            control += 1;
        }
    }
    control * 10 > sample.len()
}
