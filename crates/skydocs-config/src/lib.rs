//! Configuration for the SKY UX documentation builder plugin.
//!
//! Library users construct [`DocsToolsConfig`] directly; the CLI goes through
//! [`ConfigDiscovery`], which layers defaults, `skydocs.toml`, `package.json`
//! and environment variables.

pub mod config;
pub mod discovery;
pub mod error;

pub use config::{DocsToolsConfig, ExtractorConfig, PackageConfig, ToolingConfig};
pub use discovery::{ConfigDiscovery, discover};
pub use error::{ConfigError, Result};
