use crate::patterns::IgnoreMatcher;
use crate::walk::{self, WalkFilter};
use std::collections::BTreeSet;
use std::path::Path;

pub mod mapping;

/// Scans the non-ignored files under `root` and returns the languages whose
/// ignore sets apply, sorted and de-duplicated.
pub fn detect_languages(root: &Path, matcher: &IgnoreMatcher) -> Vec<String> {
    log::debug!("Detecting languages in: {}", root.display());
    let filter = WalkFilter::new(matcher).detect_binary(false);
    let mut detected = BTreeSet::new();

    for entry in walk::walk(root, &filter) {
        match entry {
            Ok(entry) if !entry.is_dir => {
                let Some(extension) = entry.path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                for language in mapping::map_extension_to_ignore_languages(extension) {
                    if detected.insert(*language) {
                        log::trace!(
                            "Detected language '{}' from {}",
                            language,
                            entry.relative_display()
                        );
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                // Detection is best-effort; an unreadable subtree just contributes nothing.
                log::warn!("Error accessing path during language detection: {}", e);
            }
        }
    }

    detected.into_iter().map(String::from).collect()
}
