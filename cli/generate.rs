use crate::cli_args::Cli;
use crate::output;
use anyhow::{Context, Result};
#[cfg(feature = "remote")]
use dirreader_core::GitignoreService;
use dirreader_core::{
    self as core, Config, IgnoreResolver, LanguageRequest, PatternSource, ReaderError, Tokenizer,
};
use std::path::Path;

pub fn handle_generate(cli: &Cli, quiet: bool) -> Result<()> {
    let target_dir = &cli.target_directory;
    if !target_dir.is_dir() {
        anyhow::bail!(ReaderError::InvalidArgument(format!(
            "'{}' is not a valid directory.",
            target_dir.display()
        )));
    }
    log::info!("Target directory: {}", target_dir.display());

    let config = load_config(cli).context("Failed to load configuration")?;

    let service = pattern_service(&config)?;

    let mut resolver = IgnoreResolver::new(target_dir)
        .extra_patterns(config.ignore.patterns.clone())
        .languages(language_request(&config));
    if let Some(service) = service.as_deref() {
        resolver = resolver.pattern_source(service);
    }
    let matcher = resolver
        .resolve()
        .context("Error fetching ignore patterns")?;
    log::debug!("Effective ignore patterns: {:?}", matcher.patterns());

    let script_name = script_name();
    log::debug!("Excluding program file name: {}", script_name);

    let output_path = core::assemble(&script_name, target_dir, &matcher)
        .context("Failed to create the markdown file")?;
    output::print_document_created(&output_path, target_dir, quiet)?;

    if config.tokens.count {
        let count = core::estimate_tokens(&output_path, config.tokens.tokenizer)
            .context("Error counting tokens")?;
        output::print_token_count(&output_path, count, config.tokens.tokenizer, quiet);
    }

    Ok(())
}

#[cfg(feature = "remote")]
fn pattern_service(config: &Config) -> Result<Option<Box<dyn PatternSource>>> {
    if !config.remote.enabled {
        log::debug!("Remote ignore patterns disabled by configuration.");
        return Ok(None);
    }
    let timeout = config
        .remote
        .timeout_duration()
        .context("Invalid remote.timeout in configuration")?;
    Ok(Some(Box::new(GitignoreService::new(
        config.remote.base_url.clone(),
        timeout,
    ))))
}

#[cfg(not(feature = "remote"))]
fn pattern_service(config: &Config) -> Result<Option<Box<dyn PatternSource>>> {
    if config.remote.enabled {
        log::debug!("Built without the remote feature; language ignore sets are unavailable.");
    }
    Ok(None)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load(&cli.target_directory, cli.config.as_ref(), cli.no_config)?;
    merge_config_with_cli_overrides(config, cli)
}

fn merge_config_with_cli_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    log::trace!("Applying CLI overrides to config...");

    if let Some(list) = &cli.ignore {
        config.ignore.languages = core::parse_language_list(list);
    }
    if cli.detect_languages {
        config.ignore.detect_languages = true;
    }
    if cli.count_tokens {
        config.tokens.count = true;
    }
    if let Some(name) = &cli.tokenizer {
        config.tokens.tokenizer = name.parse::<Tokenizer>()?;
    }

    log::trace!("Config after CLI overrides: {:?}", config);
    Ok(config)
}

fn language_request(config: &Config) -> LanguageRequest {
    if !config.ignore.languages.is_empty() {
        LanguageRequest::Explicit(config.ignore.languages.clone())
    } else if config.ignore.detect_languages {
        LanguageRequest::Detect
    } else {
        LanguageRequest::None
    }
}

fn script_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("directory-reader").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = Config::default();
        config.ignore.languages = vec!["rust".to_string()];
        let cli = parse(&["--ignore=go, python", "--tokenizer", "cl100k", "."]);

        let merged = merge_config_with_cli_overrides(config, &cli).unwrap();
        assert_eq!(merged.ignore.languages, vec!["go", "python"]);
        assert!(!merged.tokens.count);
        assert_eq!(merged.tokens.tokenizer, Tokenizer::Cl100k);
    }

    #[test]
    fn explicit_languages_win_over_detection() {
        let cli = parse(&["--detect-languages", "--ignore=go", "."]);
        let merged = merge_config_with_cli_overrides(Config::default(), &cli).unwrap();
        assert_eq!(
            language_request(&merged),
            LanguageRequest::Explicit(vec!["go".to_string()])
        );

        let cli = parse(&["--detect-languages", "."]);
        let merged = merge_config_with_cli_overrides(Config::default(), &cli).unwrap();
        assert_eq!(language_request(&merged), LanguageRequest::Detect);

        assert_eq!(language_request(&Config::default()), LanguageRequest::None);
    }

    #[test]
    fn disabled_remote_yields_no_pattern_service() {
        let mut config = Config::default();
        config.remote.enabled = false;
        assert!(pattern_service(&config).unwrap().is_none());
    }

    #[cfg(feature = "remote")]
    #[test]
    fn enabled_remote_builds_pattern_service() {
        assert!(pattern_service(&Config::default()).unwrap().is_some());

        let mut config = Config::default();
        config.remote.timeout = "0s".to_string();
        assert!(pattern_service(&config).is_err());
    }
}
