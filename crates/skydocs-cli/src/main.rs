//! skydocs CLI - documentation builder plugin for SKY UX libraries.
//!
//! Parses arguments, initializes logging and dispatches to the command
//! implementations.

use clap::Parser;
use miette::Result;
use skydocs_cli::{cli, commands, error, logger};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => {
            commands::generate_execute(&args.project, generate_args).await
        }
        cli::Command::Preload(preload_args) => {
            commands::preload_execute(&args.project, preload_args).await
        }
        cli::Command::Run(run_args) => commands::run_execute(&args.project, run_args).await,
    };

    match result {
        Err(error::CliError::Interrupted) => std::process::exit(error::INTERRUPTED_EXIT_CODE),
        other => other.map_err(error::cli_error_to_miette),
    }
}
