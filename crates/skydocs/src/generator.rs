//! Documentation generation for `serve` and `build` commands.

use skydocs_config::DocsToolsConfig;

use crate::anchor::assign_anchor_ids;
use crate::artifact::write_artifact;
use crate::error::{DocsError, Result};
use crate::extractor::{ExtractionRequest, SymbolExtractor};
use crate::model::DocumentationArtifact;
use crate::output::ScopedOutputDir;
use crate::sanitize::sanitize;

/// Result of a successful generation run.
///
/// Dropping `output` deletes the persisted artifact.
#[derive(Debug)]
pub struct GeneratedDocs {
    pub artifact: DocumentationArtifact,
    pub output: ScopedOutputDir,
}

/// Extracts, sanitizes, annotates and persists the project's documentation.
pub struct DocumentationGenerator<'a> {
    config: &'a DocsToolsConfig,
    extractor: &'a dyn SymbolExtractor,
}

impl<'a> DocumentationGenerator<'a> {
    pub fn new(config: &'a DocsToolsConfig, extractor: &'a dyn SymbolExtractor) -> Self {
        Self { config, extractor }
    }

    pub fn generate(&self) -> Result<GeneratedDocs> {
        tracing::info!("Generating documentation...");

        let output = ScopedOutputDir::new(self.config.output_path());
        let request = ExtractionRequest::from_config(self.config);
        let tree = self
            .extractor
            .extract(&request)?
            .ok_or(DocsError::ExtractionFailed)?;

        output.reset()?;

        let mut tree = sanitize(tree, &self.config.dependency_dir_marker);
        let anchor_ids = assign_anchor_ids(&mut tree.children);
        let artifact = DocumentationArtifact::from_tree(tree, anchor_ids);

        write_artifact(&self.config.artifact_path(), &artifact)?;
        tracing::info!("Done.");

        Ok(GeneratedDocs { artifact, output })
    }
}
