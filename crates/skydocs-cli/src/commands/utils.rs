//! Shared helpers for command implementations.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use skydocs::{DocsToolsPlugin, ScopedOutputDir, ToolingAvailability};
use skydocs_config::{ConfigDiscovery, DocsToolsConfig};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Resolves `path` against `cwd` unless it is already absolute.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Loads the layered configuration for the selected project root.
pub fn load_config(project: &ProjectArgs) -> Result<DocsToolsConfig> {
    let cwd = std::env::current_dir()?;
    let root = project
        .root
        .as_deref()
        .map_or_else(|| cwd.clone(), |root| resolve_path(root, &cwd));

    let mut discovery = ConfigDiscovery::new(&root);
    if let Some(config) = &project.config {
        let config = resolve_path(config, &cwd);
        if !config.is_file() {
            return Err(CliError::FileNotFound(config));
        }
        discovery = discovery.with_config_file(config);
    }

    Ok(discovery.load()?)
}

/// Decides whether the companion package is installed.
///
/// `tooling.force_available` wins when set. Otherwise the package counts as
/// installed when its manifest sits under `node_modules`, or when the project
/// is the package's own repository.
pub fn detect_tooling(config: &DocsToolsConfig) -> ToolingAvailability {
    if let Some(forced) = config.tooling.force_available {
        return forced.into();
    }

    let manifest = config
        .root
        .join(&config.dependency_dir_marker)
        .join(&config.package.name)
        .join("package.json");

    let in_own_repository = config.root.components().any(|component| {
        matches!(component, Component::Normal(name) if name == config.package.repository_dir.as_str())
    });

    (manifest.is_file() || in_own_repository).into()
}

/// Loads configuration and builds the plugin the commands drive.
pub fn load_plugin(project: &ProjectArgs) -> Result<DocsToolsPlugin> {
    let config = load_config(project)?;
    let tooling = detect_tooling(&config);
    tracing::debug!(
        "Project root {} (companion package {:?})",
        config.root.display(),
        tooling
    );
    Ok(DocsToolsPlugin::new(config, tooling))
}

/// How long an interrupted generation may keep running before the CLI exits.
const INTERRUPT_GRACE: Duration = Duration::from_millis(500);

/// Runs `work` on the blocking pool until it finishes or Ctrl+C arrives.
///
/// On Ctrl+C the output directory is removed, and removed once more after
/// `work` settles or [`INTERRUPT_GRACE`] passes, so nothing it writes late
/// survives the exit.
pub async fn run_interruptible<T, F>(output_path: PathBuf, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let mut task = tokio::task::spawn_blocking(work);

    tokio::select! {
        joined = &mut task => Ok(joined.context("Documentation generation panicked")?),
        interrupt = tokio::signal::ctrl_c() => {
            interrupt?;
            tracing::info!("Interrupted, removing {}", output_path.display());
            let output = ScopedOutputDir::new(output_path);
            output.cleanup()?;
            if tokio::time::timeout(INTERRUPT_GRACE, task).await.is_err() {
                tracing::debug!("Generation still running at exit");
            }
            output.cleanup()?;
            Err(CliError::Interrupted)
        }
    }
}
