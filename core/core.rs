pub mod binary;
pub mod config;
pub mod document;
pub mod error;
pub mod languages;
pub mod patterns;
pub mod ranking;
pub mod remote;
pub mod tokens;
pub mod tree;
pub mod walk;

pub use binary::is_binary;
pub use config::Config;
pub use document::{CandidateFile, assemble, collect_candidates};
pub use error::{ReaderError, Result};
pub use languages::detect_languages;
pub use patterns::{
    DEFAULT_IGNORE_PATTERNS, IgnoreMatcher, IgnoreResolver, LanguageRequest, OUTPUT_FILE_NAME,
    parse_language_list,
};
pub use ranking::{Rank, rank_file};
#[cfg(feature = "remote")]
pub use remote::GitignoreService;
pub use remote::{PatternSource, normalize_language_name};
pub use tokens::{Tokenizer, estimate_tokens};
pub use tree::render_tree;
pub use walk::{WalkEntry, WalkFilter};
