//! Host-facing plugin: the per-file preload hook and the lifecycle hook.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use skydocs_config::DocsToolsConfig;

use crate::error::Result;
use crate::extractor::{SymbolExtractor, TypedocCli};
use crate::generator::DocumentationGenerator;
use crate::output::ScopedOutputDir;
use crate::providers::{
    ProjectSources, ProviderKind, ProviderSources, inject_module_providers, render_provider_file,
};
use crate::resources::ResourceClassifier;

/// Warning logged when a build runs without the companion package installed.
pub const MISSING_TOOLING_WARNING: &str = "This library will not generate documentation because it does not include the optional `@skyux/docs-tools` NPM package. To generate documentation, please install the package as a development dependency: `npm i --save-exact --save-dev @skyux/docs-tools@latest`.";

/// Host command the plugin is running under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Serve,
    Build,
    Other(String),
}

impl HostCommand {
    pub fn parse(value: &str) -> Self {
        match value {
            "serve" => HostCommand::Serve,
            "build" => HostCommand::Build,
            other => HostCommand::Other(other.to_string()),
        }
    }

    /// True for commands that produce documentation.
    pub fn generates_docs(&self) -> bool {
        matches!(self, HostCommand::Serve | HostCommand::Build)
    }

    pub fn as_str(&self) -> &str {
        match self {
            HostCommand::Serve => "serve",
            HostCommand::Build => "build",
            HostCommand::Other(other) => other,
        }
    }
}

impl FromStr for HostCommand {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the companion package is installed, resolved once by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolingAvailability {
    Available,
    Missing,
}

impl From<bool> for ToolingAvailability {
    fn from(available: bool) -> Self {
        if available {
            ToolingAvailability::Available
        } else {
            ToolingAvailability::Missing
        }
    }
}

/// The documentation plugin a host build drives.
///
/// Generation output is retained until [`DocsToolsPlugin::cleanup_output`]
/// is called or the plugin is dropped.
pub struct DocsToolsPlugin {
    config: Arc<DocsToolsConfig>,
    tooling: ToolingAvailability,
    classifier: ResourceClassifier,
    extractor: Box<dyn SymbolExtractor>,
    sources: Box<dyn ProviderSources>,
    output: Mutex<Option<ScopedOutputDir>>,
}

impl DocsToolsPlugin {
    /// Creates a plugin backed by the `typedoc` CLI and the project on disk.
    pub fn new(config: DocsToolsConfig, tooling: ToolingAvailability) -> Self {
        let config = Arc::new(config);
        Self {
            classifier: ResourceClassifier::from_config(&config),
            extractor: Box::new(TypedocCli::from_config(&config)),
            sources: Box::new(ProjectSources::new(Arc::clone(&config))),
            output: Mutex::new(None),
            tooling,
            config,
        }
    }

    pub fn with_extractor(mut self, extractor: impl SymbolExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn with_sources(mut self, sources: impl ProviderSources + 'static) -> Self {
        self.sources = Box::new(sources);
        self
    }

    pub fn config(&self) -> &DocsToolsConfig {
        &self.config
    }

    pub fn tooling(&self) -> ToolingAvailability {
        self.tooling
    }

    /// Per-file hook. Returns `content` unchanged unless the file is a
    /// recognized placeholder or the shared module and docs are being built.
    pub fn preload(
        &self,
        content: &str,
        resource_path: &Path,
        command: &HostCommand,
    ) -> Result<String> {
        if !command.generates_docs() || self.tooling == ToolingAvailability::Missing {
            return Ok(content.to_string());
        }

        let mut modified = content.to_string();
        for kind in ProviderKind::ALL {
            if self.classifier.is_plugin_resource(resource_path, kind.file_pattern()) {
                tracing::debug!("Rendering {} into {}", kind.token(), resource_path.display());
                modified = render_provider_file(
                    kind,
                    &modified,
                    resource_path,
                    self.classifier.import_path(resource_path),
                    self.sources.as_ref(),
                )?;
            }
        }

        if self.classifier.is_shared_module(resource_path) {
            if let Some(injected) = inject_module_providers(
                &modified,
                resource_path,
                self.classifier.import_path(resource_path),
                self.sources.as_ref(),
            )? {
                modified = injected;
            }
        }

        Ok(modified)
    }

    /// Lifecycle hook, called once per host command before any file is
    /// preloaded.
    pub fn run_command(&self, command: &HostCommand) -> Result<()> {
        if !command.generates_docs() {
            return Ok(());
        }

        if self.tooling == ToolingAvailability::Missing {
            tracing::warn!("{MISSING_TOOLING_WARNING}");
            return Ok(());
        }

        let mut output = self.output.lock();
        // Same directory as the new guard; release it without deleting.
        if let Some(previous) = output.take() {
            previous.keep();
        }

        let generated =
            DocumentationGenerator::new(&self.config, self.extractor.as_ref()).generate()?;
        tracing::debug!(
            "Documented {} top-level declaration(s)",
            generated.artifact.children.len()
        );

        *output = Some(generated.output);
        Ok(())
    }

    /// Removes the generated output now. Safe to call more than once.
    pub fn cleanup_output(&self) -> Result<()> {
        self.output
            .lock()
            .take()
            .map_or(Ok(()), |output| output.cleanup())
    }

    /// Leaves the generated output on disk after the plugin is dropped.
    pub fn keep_output(&self) -> Option<PathBuf> {
        self.output.lock().take().map(ScopedOutputDir::keep)
    }
}

impl fmt::Debug for DocsToolsPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsToolsPlugin")
            .field("root", &self.config.root)
            .field("tooling", &self.tooling)
            .finish_non_exhaustive()
    }
}
