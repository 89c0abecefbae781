//! Per-language ignore-pattern sets fetched from an external service.

use crate::error::Result;
#[cfg(feature = "remote")]
use crate::error::ReaderError;
#[cfg(feature = "remote")]
use crate::patterns::parse_pattern_lines;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can supply the canonical ignore patterns for a language.
///
/// `Ok(None)` means the source has no set for that language; callers treat it
/// as a warning. Every `Err` is fatal for the run.
pub trait PatternSource {
    fn fetch(&self, language: &str) -> Result<Option<Vec<String>>>;
}

/// Maps a user-supplied language name onto the file stem the github/gitignore
/// collection uses.
pub fn normalize_language_name(language: &str) -> String {
    let lower = language.trim().to_lowercase();
    match lower.as_str() {
        "c++" => "C++".to_string(),
        "c" => "C".to_string(),
        "c#" => "C%23".to_string(),
        "f#" => "F%23".to_string(),
        "go" | "golang" => "Go".to_string(),
        "objective-c" => "Objective-C".to_string(),
        "vim" => "Vim".to_string(),
        _ => title_case(&lower),
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

pub fn pattern_url(base_url: &str, language: &str) -> String {
    format!(
        "{}/{}.gitignore",
        base_url.trim_end_matches('/'),
        normalize_language_name(language)
    )
}

#[cfg(feature = "remote")]
pub struct GitignoreService {
    agent: ureq::Agent,
    base_url: String,
}

#[cfg(feature = "remote")]
impl GitignoreService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

#[cfg(feature = "remote")]
impl Default for GitignoreService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

#[cfg(feature = "remote")]
impl PatternSource for GitignoreService {
    fn fetch(&self, language: &str) -> Result<Option<Vec<String>>> {
        let url = pattern_url(&self.base_url, language);
        log::debug!("Fetching ignore patterns for '{}' from {}", language, url);

        let fetch_error = |reason: String| ReaderError::PatternFetch {
            language: language.to_string(),
            reason,
        };

        match self.agent.get(&url).call() {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| fetch_error(format!("failed to read response body: {}", e)))?;
                let patterns = parse_pattern_lines(&body);
                log::debug!("Fetched {} patterns for '{}'", patterns.len(), language);
                Ok(Some(patterns))
            }
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(code, _)) => {
                Err(fetch_error(format!("received status code {}", code)))
            }
            Err(ureq::Error::Transport(t)) => {
                Err(fetch_error(format!("HTTP request failed: {}", t)))
            }
        }
    }
}
