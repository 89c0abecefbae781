mod cli_args;
mod generate;
mod output;

use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use std::process;

use cli_args::Cli;

fn main() {
    let cli_args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit 1; help and version exit 0.
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            eprint!("{}", e.render().ansi());
            process::exit(1);
        }
    };

    setup_logging(cli_args.quiet, cli_args.verbose);
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match generate::handle_generate(&cli_args, cli_args.quiet) {
        Ok(()) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}
