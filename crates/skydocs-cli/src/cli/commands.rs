use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available skydocs subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the documentation artifact
    ///
    /// Runs TypeDoc over the public API, removes members inherited from
    /// `node_modules`, assigns anchor IDs and writes
    /// `.skypagestmp/docs/documentation.json`. The artifact is removed on exit
    /// unless `--keep` is given.
    Generate(GenerateArgs),

    /// Run the per-file preload hook
    ///
    /// Reads one source file and prints it as the host build would see it:
    /// provider placeholders are populated and the shared module receives
    /// provider registrations. Other files are printed unchanged.
    Preload(PreloadArgs),

    /// Run the lifecycle hook for a host command
    ///
    /// On `serve` and `build`, generates documentation first. A host program
    /// given after `--` is run to completion before the output is removed.
    ///
    /// Examples:
    ///   skydocs run build -- skyux build-public-library
    ///   skydocs run serve
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Leave the generated output on disk
    #[arg(long)]
    pub keep: bool,
}

#[derive(Args, Debug)]
pub struct PreloadArgs {
    /// Source file to transform
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Host command the file is being processed for
    #[arg(long, default_value = "build")]
    pub command: String,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Host command name (`serve`, `build`, ...)
    pub command: String,

    /// Leave the generated output on disk after the host program exits
    #[arg(long)]
    pub keep: bool,

    /// Host program and its arguments
    #[arg(last = true, value_name = "HOST")]
    pub host: Vec<String>,
}
