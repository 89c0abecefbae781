use anyhow::{Context, Result};
use byte_unit::{Byte, UnitType};
use colored::*;
use dirreader_core::Tokenizer;
use std::fs;
use std::path::Path;

pub fn print_document_created(output_path: &Path, target_dir: &Path, quiet: bool) -> Result<()> {
    let size = fs::metadata(output_path)
        .with_context(|| format!("Failed to stat {}", output_path.display()))?
        .len();
    if quiet {
        return Ok(());
    }
    let readable = Byte::from_u64(size).get_appropriate_unit(UnitType::Binary);
    println!(
        "{} Markdown file '{}' has been created in '{}'. ({})",
        "✅".green(),
        output_path.display().to_string().blue(),
        target_dir.display(),
        readable
    );
    Ok(())
}

pub fn print_token_count(output_path: &Path, count: usize, tokenizer: Tokenizer, quiet: bool) {
    if quiet {
        return;
    }
    let method = match tokenizer {
        Tokenizer::Heuristic => "estimated, bytes / 4",
        Tokenizer::Cl100k => "estimated, cl100k_base",
    };
    println!(
        "Number of tokens in '{}': {} ({})",
        output_path.display(),
        format_thousands(count).cyan(),
        method.dimmed()
    );
}

pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
    }
}
