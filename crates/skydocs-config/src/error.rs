//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("project root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    #[error("invalid package.json at {path}: {error}")]
    InvalidPackageJson {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        let field = error
            .path
            .last()
            .cloned()
            .unwrap_or_else(|| "configuration".to_string());
        ConfigError::InvalidValue {
            field,
            hint: Some(error.to_string()),
        }
    }
}
