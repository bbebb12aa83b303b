//! Recognizes plugin-resource placeholder files.

use std::path::{Component, Path, PathBuf};

use regex::Regex;
use skydocs_config::DocsToolsConfig;

use crate::error::{DocsError, Result};

const CLASS_MARKER: &str = "export class ";

/// Decides which transform applies to a resource path and which import path
/// generated code should use.
#[derive(Debug, Clone)]
pub struct ResourceClassifier {
    root: PathBuf,
    resource_dirs: Vec<String>,
    module_file_name: String,
    repository_dir: String,
    package_name: String,
    local_import_path: String,
}

impl ResourceClassifier {
    pub fn from_config(config: &DocsToolsConfig) -> Self {
        Self {
            root: config.root.clone(),
            resource_dirs: [&config.plugin_resources_dir, &config.temp_plugin_resources_dir]
                .into_iter()
                .map(|dir| format!("/{}/", to_slash(dir).trim_matches('/')))
                .collect(),
            module_file_name: config.module_file_name.clone(),
            repository_dir: config.package.repository_dir.clone(),
            package_name: config.package.name.clone(),
            local_import_path: config.package.local_import_path.clone(),
        }
    }

    /// Absolute, lexically normalized form of `path`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = self.root.join(path);
        let absolute = std::path::absolute(&joined).unwrap_or(joined);
        path_clean::clean(absolute)
    }

    /// True when `path` lies in a plugin-resource directory and its resolved
    /// form matches `file_name`.
    pub fn is_plugin_resource(&self, path: &Path, file_name: &Regex) -> bool {
        let resolved = to_slash(&self.resolve(path));
        let in_resource_dir = self
            .resource_dirs
            .iter()
            .any(|dir| resolved.contains(dir.as_str()));

        in_resource_dir && file_name.is_match(&resolved)
    }

    /// True when `path` is inside the companion package's own repository.
    pub fn is_local_context(&self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        resolved
            .parent()
            .is_some_and(|dir| {
                dir.components().any(|component| {
                    matches!(component, Component::Normal(name) if name == self.repository_dir.as_str())
                })
            })
    }

    /// True for the shared module that receives provider registrations.
    pub fn is_shared_module(&self, path: &Path) -> bool {
        to_slash(path).contains(&self.module_file_name)
    }

    /// Import path for the companion package's public surface.
    pub fn import_path(&self, path: &Path) -> &str {
        if self.is_local_context(path) {
            &self.local_import_path
        } else {
            &self.package_name
        }
    }
}

/// Extracts the identifier of the first exported class declaration.
pub fn parse_class_name(path: &Path, content: &str) -> Result<String> {
    let parse_error = || DocsError::Parse {
        path: path.to_path_buf(),
        message: format!("no `{}` declaration found", CLASS_MARKER.trim_end()),
    };

    let (_, rest) = content.split_once(CLASS_MARKER).ok_or_else(parse_error)?;
    let name: String = rest
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '{')
        .collect();

    if name.is_empty() {
        return Err(parse_error());
    }
    Ok(name)
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
