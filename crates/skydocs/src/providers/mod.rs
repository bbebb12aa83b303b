//! Generated documentation providers.
//!
//! Two provider kinds exist. Each one is either written into a placeholder
//! file of its own ([`render_provider_file`]) or registered in the shared
//! module together with an inline implementation class
//! ([`inject_module_providers`]).

mod module;
mod standalone;

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Serialize;
use skydocs_config::DocsToolsConfig;

use crate::artifact::read_artifact;
use crate::error::{DocsError, Result};
use crate::examples::{CodeExample, collect_code_examples, render_code_examples};
use crate::model::DocumentationArtifact;

pub use module::inject_module_providers;
pub use standalone::render_provider_file;

static SOURCE_CODE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-source-code-provider\.ts$").expect("valid pattern"));
static TYPE_DEFINITIONS_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-type-definitions-provider\.ts$").expect("valid pattern"));

/// Data a generated provider exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    SourceCode,
    TypeDefinitions,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::SourceCode, ProviderKind::TypeDefinitions];

    /// Interface token exported by the companion package.
    pub fn token(self) -> &'static str {
        match self {
            ProviderKind::SourceCode => "SkyDocsSourceCodeProvider",
            ProviderKind::TypeDefinitions => "SkyDocsTypeDefinitionsProvider",
        }
    }

    /// Class name used when the implementation is generated inline.
    pub fn impl_class(self) -> &'static str {
        match self {
            ProviderKind::SourceCode => "SkyDocsSourceCodeImplService",
            ProviderKind::TypeDefinitions => "SkyDocsTypeDefinitionsImplService",
        }
    }

    /// File-name pattern of the placeholder this kind rewrites.
    pub fn file_pattern(self) -> &'static Regex {
        match self {
            ProviderKind::SourceCode => &SOURCE_CODE_FILE,
            ProviderKind::TypeDefinitions => &TYPE_DEFINITIONS_FILE,
        }
    }

    /// Class body: the public fields, each on its own line.
    pub(crate) fn render_fields(self, sources: &dyn ProviderSources) -> Result<String> {
        match self {
            ProviderKind::SourceCode => {
                let source_code = render_code_examples(&sources.code_examples()?)?;
                Ok(format!(
                    "  public readonly sourceCode: any[] = {source_code};\n"
                ))
            }
            ProviderKind::TypeDefinitions => {
                let documentation = sources.documentation()?;
                let anchor_ids = compact_json(&documentation.anchor_ids)?;
                let type_definitions = compact_json(&documentation.children)?;
                Ok(format!(
                    "  public readonly anchorIds: {{[_: string]: string}} = {anchor_ids};\n  public readonly typeDefinitions: any[] = {type_definitions};\n"
                ))
            }
        }
    }
}

fn compact_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|error| DocsError::Json {
        path: "documentation".into(),
        error,
    })
}

/// Supplies the data embedded into generated providers.
pub trait ProviderSources: Send + Sync {
    fn code_examples(&self) -> Result<Vec<CodeExample>>;
    fn documentation(&self) -> Result<DocumentationArtifact>;
}

/// Reads provider data from the project on disk, fresh on every call.
#[derive(Debug, Clone)]
pub struct ProjectSources {
    config: Arc<DocsToolsConfig>,
}

impl ProjectSources {
    pub fn new(config: Arc<DocsToolsConfig>) -> Self {
        Self { config }
    }
}

impl ProviderSources for ProjectSources {
    fn code_examples(&self) -> Result<Vec<CodeExample>> {
        collect_code_examples(&self.config)
    }

    fn documentation(&self) -> Result<DocumentationArtifact> {
        read_artifact(&self.config.artifact_path())
    }
}

/// Fixed provider data, for hosts that already hold it in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSources {
    pub code_examples: Vec<CodeExample>,
    pub documentation: DocumentationArtifact,
}

impl ProviderSources for StaticSources {
    fn code_examples(&self) -> Result<Vec<CodeExample>> {
        Ok(self.code_examples.clone())
    }

    fn documentation(&self) -> Result<DocumentationArtifact> {
        Ok(self.documentation.clone())
    }
}
