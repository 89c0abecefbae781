use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Snapshot a directory tree and its text files into a single Markdown document.",
    long_about = "directory-reader walks <TARGET_DIRECTORY>, filters entries through ignore rules \n(built-in defaults, .gitignore, .readerignore and optional per-language sets) and writes \ndirectory_content.md containing the tree structure and every non-binary file.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  directory-reader ./my-project\n  directory-reader --ignore=go,python --count-tokens ./service\n  directory-reader --detect-languages -v .",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(
        value_name = "TARGET_DIRECTORY",
        help = "Directory to snapshot; directory_content.md is written inside it."
    )]
    pub target_directory: PathBuf,

    #[arg(
        long,
        value_name = "LANGS",
        help = "Comma-separated languages whose ignore sets are fetched and merged (e.g. 'go,python').",
        help_heading = "Ignore Rules"
    )]
    pub ignore: Option<String>,

    #[arg(
        long,
        help = "Detect languages from file extensions and fetch their ignore sets.",
        help_heading = "Ignore Rules"
    )]
    pub detect_languages: bool,

    #[arg(
        long,
        help = "Estimate the number of tokens in the generated file.",
        help_heading = "Tokens"
    )]
    pub count_tokens: bool,

    #[arg(
        long,
        value_name = "KIND",
        value_parser = ["heuristic", "cl100k"],
        help = "Token estimator: 'heuristic' (bytes / 4, default) or 'cl100k' (BPE).",
        help_heading = "Tokens"
    )]
    pub tokenizer: Option<String>,

    #[arg(
        long,
        value_name = "CONFIG_FILE",
        conflicts_with = "no_config",
        help = "Path of the TOML config file (default: <TARGET_DIRECTORY>/.readerconfig.toml).",
        help_heading = "Configuration"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "config",
        help = "Disable loading any TOML config file.",
        help_heading = "Configuration"
    )]
    pub no_config: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv, -vvv).")]
    pub verbose: u8,

    #[arg(short, long, help = "Silence informational messages and warnings.")]
    pub quiet: bool,
}
