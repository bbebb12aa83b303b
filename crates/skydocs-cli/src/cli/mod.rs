//! Command-line interface definition.
//!
//! - `skydocs generate` - Extract documentation into the temporary output directory
//! - `skydocs preload` - Run the per-file hook on one source file
//! - `skydocs run` - Run the lifecycle hook around a host command

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser};

pub use commands::{Command, GenerateArgs, PreloadArgs, RunArgs};

/// skydocs - documentation builder plugin for SKY UX libraries
#[derive(Parser, Debug)]
#[command(
    name = "skydocs",
    version,
    about = "Documentation builder plugin for SKY UX libraries",
    long_about = "Generates TypeDoc-based documentation for a SKY UX library and injects it,\n\
                  together with the library's code examples, into the documentation providers\n\
                  consumed by @skyux/docs-tools."
)]
pub struct Cli {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the project lives and how it is configured.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to use instead of `<root>/skydocs.toml`
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
