#![deny(clippy::all)]

//! Documentation extraction and provider injection for SKY UX library builds.
//!
//! This crate provides:
//! - A generator that runs the TypeDoc extractor, drops third-party members
//!   and assigns same-page anchor IDs before persisting the result.
//! - A collector that embeds code-example sources, percent-encoded.
//! - Transforms that turn provider placeholder files into populated classes
//!   and register the providers in the shared module.
//! - [`DocsToolsPlugin`], the host-facing facade tying these to build commands.

pub mod anchor;
pub mod artifact;
pub mod error;
pub mod examples;
pub mod extractor;
pub mod generator;
pub mod model;
pub mod output;
pub mod plugin;
pub mod providers;
pub mod resources;
pub mod sanitize;

mod scan;

pub use anchor::{assign_anchor_ids, derive_anchor_id};
pub use artifact::{read_artifact, write_artifact};
pub use error::{DocsError, Result};
pub use examples::{CodeExample, collect_code_examples, encode_uri_component};
pub use extractor::{ExtractionRequest, SymbolExtractor, TypedocCli};
pub use generator::{DocumentationGenerator, GeneratedDocs};
pub use model::{AnchorIds, DocEntry, DocTree, DocumentationArtifact, SourceRef};
pub use output::ScopedOutputDir;
pub use plugin::{DocsToolsPlugin, HostCommand, MISSING_TOOLING_WARNING, ToolingAvailability};
pub use providers::{
    ProjectSources, ProviderKind, ProviderSources, StaticSources, inject_module_providers,
    render_provider_file,
};
pub use resources::{ResourceClassifier, parse_class_name};
pub use sanitize::sanitize;

pub use skydocs_config::DocsToolsConfig;
