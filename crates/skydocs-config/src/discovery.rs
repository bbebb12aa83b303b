//! File-based config discovery for CLI use
//!
//! Layers, lowest priority first: built-in defaults, `skydocs.toml`, the
//! `skydocs` field of `package.json`, then `SKYDOCS_`-prefixed environment
//! variables (nested keys separated by `__`).

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde_json::Value;

use crate::config::DocsToolsConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = "skydocs.toml";
pub const PACKAGE_JSON_FIELD: &str = "skydocs";
pub const ENV_PREFIX: &str = "SKYDOCS_";

/// Finds and loads configuration for a project root.
///
/// # Example
///
/// ```no_run
/// use skydocs_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// assert_eq!(config.module_file_name, "app-extras.module.ts");
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    explicit: Option<PathBuf>,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            explicit: None,
        }
    }

    /// Uses `path` instead of `<root>/skydocs.toml`.
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.explicit = Some(path.as_ref().to_path_buf());
        self
    }

    /// Returns the TOML config file that will be read, if any.
    pub fn find(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit {
            return Some(path.clone());
        }

        let toml_path = self.root.join(CONFIG_FILE_NAME);
        toml_path.exists().then_some(toml_path)
    }

    /// Loads the layered configuration. A project without any config file
    /// gets the defaults.
    pub fn load(&self) -> Result<DocsToolsConfig> {
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotFound(self.root.clone()));
        }

        let mut figment = Figment::new().merge(Serialized::defaults(DocsToolsConfig::default()));

        if let Some(path) = self.find() {
            tracing::debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file_exact(path));
        }

        if let Some(value) = self.package_json_section()? {
            tracing::debug!("Merging `{PACKAGE_JSON_FIELD}` field from package.json");
            figment = figment.merge(Serialized::defaults(value));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut config: DocsToolsConfig = figment.extract()?;
        config.root = self.root.clone();
        Ok(config)
    }

    fn package_json_section(&self) -> Result<Option<Value>> {
        let path = self.root.join("package.json");
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let parsed: Value = serde_json::from_str(&content)
            .map_err(|error| ConfigError::InvalidPackageJson { path, error })?;

        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(Value::Null) | None => Ok(None),
            Some(value @ Value::Object(_)) => Ok(Some(value.clone())),
            Some(_) => Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'skydocs' field in package.json must be an object".to_string()),
            }),
        }
    }
}

/// Discover and load config for the current directory (convenience function)
pub fn discover() -> Result<DocsToolsConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
