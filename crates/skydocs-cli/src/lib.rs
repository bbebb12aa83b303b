//! Command-line host for the skydocs documentation plugin.
//!
//! The binary stands in for a SKY UX build host: it loads the project
//! configuration, resolves whether the companion `@skyux/docs-tools` package
//! is installed, and drives [`skydocs::DocsToolsPlugin`] through its
//! lifecycle and per-file hooks.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `generate`, `preload` and `run`
//! - [`error`] - CLI error type and diagnostic rendering
//! - [`logger`] - `tracing` subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
