use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for documentation extraction and provider injection.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read, write or remove a file or directory.
    #[error("I/O failure at '{path}': {error}")]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// A JSON document could not be read or written.
    #[error("invalid JSON in '{path}': {error}")]
    Json {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    /// The extraction collaborator produced no project.
    #[error(
        "TypeDoc project generation failed. This usually occurs when the underlying TypeScript project does not compile or is invalid. Try running `skyux build` to list any compiler issues."
    )]
    ExtractionFailed,

    /// The extraction collaborator could not be launched.
    #[error("failed to run documentation extractor '{program}': {message}")]
    Extractor {
        program: String,
        message: String,
    },

    /// Source text did not contain the expected declaration.
    #[error("failed to parse '{path}': {message}")]
    Parse {
        path: PathBuf,
        message: String,
    },

    /// The provider-injection transform could not locate its injection point.
    #[error("cannot inject providers into '{path}': {details}")]
    Transform {
        path: PathBuf,
        details: String,
    },
}

impl DocsError {
    pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }

    pub(crate) fn transform(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Transform {
            path: path.into(),
            details: details.into(),
        }
    }
}
