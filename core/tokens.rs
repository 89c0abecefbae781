use crate::error::{ReaderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// How tokens are counted. Both are estimates for a language-model context;
/// neither claims to match any particular model exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenizer {
    /// One token per four bytes, rounded up.
    #[default]
    Heuristic,
    /// The cl100k_base BPE encoding via tiktoken.
    Cl100k,
}

impl FromStr for Tokenizer {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "heuristic" => Ok(Tokenizer::Heuristic),
            "cl100k" | "cl100k_base" => Ok(Tokenizer::Cl100k),
            other => Err(ReaderError::InvalidArgument(format!(
                "unknown tokenizer '{}', expected 'heuristic' or 'cl100k'",
                other
            ))),
        }
    }
}

pub fn estimate_tokens(path: &Path, tokenizer: Tokenizer) -> Result<usize> {
    let content = fs::read(path).map_err(|e| ReaderError::file_read(path, e))?;
    let count = count_tokens(&content, tokenizer)?;
    log::debug!(
        "Estimated {} tokens ({:?}) for {} bytes in {}",
        count,
        tokenizer,
        content.len(),
        path.display()
    );
    Ok(count)
}

pub fn count_tokens(content: &[u8], tokenizer: Tokenizer) -> Result<usize> {
    match tokenizer {
        Tokenizer::Heuristic => Ok(content.len().div_ceil(4)),
        Tokenizer::Cl100k => {
            let bpe =
                tiktoken_rs::cl100k_base().map_err(|e| ReaderError::TikToken(e.to_string()))?;
            let text = String::from_utf8_lossy(content);
            Ok(bpe.encode_ordinary(&text).len())
        }
    }
}
