use crate::error::Result;
use crate::languages;
use crate::remote::PatternSource;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE_NAME: &str = "directory_content.md";

pub const LOCAL_IGNORE_FILES: [&str; 2] = [".gitignore", ".readerignore"];

pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "*.lock",
    "*.pyc",
    "__pycache__/",
    "node_modules/",
    ".DS_Store",
    ".git/",
    OUTPUT_FILE_NAME,
];

/// Which per-language pattern sets to merge on top of the local ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LanguageRequest {
    #[default]
    None,
    Explicit(Vec<String>),
    Detect,
}

/// Compiled gitignore-style matcher rooted at the target directory.
///
/// Paths handed to [`IgnoreMatcher::is_ignored`] are relative to that
/// directory, so the underlying gitignore is anchored at `.` and never strips
/// a prefix off them.
#[derive(Debug)]
pub struct IgnoreMatcher {
    gitignore: Gitignore,
    patterns: Vec<String>,
}

impl IgnoreMatcher {
    pub fn compile(root: &Path, patterns: &[String]) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(".");
        let mut accepted = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            match builder.add_line(None, pattern) {
                Ok(_) => accepted.push(pattern.clone()),
                Err(e) => log::warn!("Skipping invalid ignore pattern \"{}\": {}", pattern, e),
            }
        }
        let gitignore = builder.build()?;
        log::debug!(
            "Compiled {} ignore patterns for {} ({} ignore, {} whitelist)",
            accepted.len(),
            root.display(),
            gitignore.num_ignores(),
            gitignore.num_whitelists()
        );
        Ok(Self {
            gitignore,
            patterns: accepted,
        })
    }

    /// `relative` is relative to the root the matcher was compiled for.
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(relative, is_dir).is_ignore()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

pub fn parse_pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Reads an ignore file; a missing or unreadable file contributes nothing.
pub fn load_ignore_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let patterns = parse_pattern_lines(&content);
            log::debug!("Loaded {} patterns from {}", patterns.len(), path.display());
            patterns
        }
        Err(e) => {
            log::trace!("No patterns from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Removes repeated patterns, keeping the last occurrence of each so that
/// last-match-wins evaluation is unchanged.
pub fn dedup_patterns(patterns: Vec<String>) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::with_capacity(patterns.len());
    for pattern in patterns.into_iter().rev() {
        seen.insert(pattern);
    }
    let mut unique: Vec<String> = seen.into_iter().collect();
    unique.reverse();
    unique
}

pub fn parse_language_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(String::from)
        .collect()
}

/// Assembles the effective pattern list for a target directory.
pub struct IgnoreResolver<'a> {
    root: PathBuf,
    extra_patterns: Vec<String>,
    languages: LanguageRequest,
    source: Option<&'a dyn PatternSource>,
}

impl<'a> IgnoreResolver<'a> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extra_patterns: Vec::new(),
            languages: LanguageRequest::None,
            source: None,
        }
    }

    pub fn extra_patterns(mut self, patterns: Vec<String>) -> Self {
        self.extra_patterns = patterns;
        self
    }

    pub fn languages(mut self, request: LanguageRequest) -> Self {
        self.languages = request;
        self
    }

    pub fn pattern_source(mut self, source: &'a dyn PatternSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Defaults, then root `.gitignore`, then `.readerignore`, then extras.
    pub fn local_patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .collect();
        for name in LOCAL_IGNORE_FILES {
            patterns.extend(load_ignore_file(&self.root.join(name)));
        }
        patterns.extend(self.extra_patterns.iter().cloned());
        patterns
    }

    pub fn resolve(&self) -> Result<IgnoreMatcher> {
        let mut patterns = self.local_patterns();

        let requested = match &self.languages {
            LanguageRequest::None => Vec::new(),
            LanguageRequest::Explicit(langs) => langs.clone(),
            LanguageRequest::Detect => {
                let local = IgnoreMatcher::compile(&self.root, &dedup_patterns(patterns.clone()))?;
                let detected = languages::detect_languages(&self.root, &local);
                log::info!("Detected languages: {}", detected.join(","));
                detected
            }
        };

        if !requested.is_empty() {
            match self.source {
                Some(source) => patterns.extend(fetch_language_patterns(source, &requested)?),
                None => log::warn!(
                    "Remote ignore patterns are disabled; skipping languages: {}",
                    requested.join(",")
                ),
            }
        }

        IgnoreMatcher::compile(&self.root, &dedup_patterns(patterns))
    }
}

fn fetch_language_patterns(source: &dyn PatternSource, languages: &[String]) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    for language in languages {
        match source.fetch(language)? {
            Some(found) => patterns.extend(found),
            None => log::warn!(
                "No ignore patterns found for language '{}', skipping",
                language
            ),
        }
    }
    Ok(patterns)
}
