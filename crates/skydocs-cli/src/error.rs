//! Error handling for the skydocs CLI.
//!
//! Library errors convert into [`CliError`] through `From`; at the process
//! boundary [`cli_error_to_miette`] renders them as diagnostics with a hint
//! where one helps.

use std::path::PathBuf;

use miette::Report;
use skydocs::DocsError;
use skydocs_config::ConfigError;
use thiserror::Error;

/// Exit code used after an interrupt, matching shell convention for SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Docs(#[from] DocsError),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The wrapped host command exited unsuccessfully.
    #[error("Host command '{program}' failed with {status}")]
    HostFailed { program: String, status: String },

    /// Ctrl+C was received; generated output has already been removed.
    #[error("Interrupted")]
    Interrupted,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Converts a [`CliError`] into a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(DocsError::ExtractionFailed) => {
            miette::miette!("{}", DocsError::ExtractionFailed)
        }
        CliError::Docs(DocsError::Extractor { program, message }) => miette::miette!(
            "Failed to run documentation extractor '{}': {}\n\nHint: Install TypeDoc in the project or set `extractor.program` in skydocs.toml",
            program,
            message
        ),
        CliError::Docs(err @ DocsError::Transform { .. }) => miette::miette!(
            "{}\n\nHint: The shared module must contain exactly one `@NgModule({{ ... }})` decorator",
            err
        ),
        CliError::Config(ConfigError::RootNotFound(path)) => miette::miette!(
            "Project root not found: {}\n\nHint: Pass an existing directory with --root",
            path.display()
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}
