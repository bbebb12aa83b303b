//! Reading and writing the persisted documentation artifact.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{DocsError, Result};
use crate::model::DocumentationArtifact;

/// Reads the artifact at `path`. A missing file is the empty artifact.
pub fn read_artifact(path: &Path) -> Result<DocumentationArtifact> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!("No documentation artifact at {}", path.display());
            return Ok(DocumentationArtifact::default());
        }
        Err(error) => return Err(DocsError::io(path, error)),
    };

    serde_json::from_str(&content).map_err(|error| DocsError::Json {
        path: path.to_path_buf(),
        error,
    })
}

/// Writes the artifact to `path`, creating parent directories.
pub fn write_artifact(path: &Path, artifact: &DocumentationArtifact) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| DocsError::io(parent, error))?;
    }

    let json = serde_json::to_string(artifact).map_err(|error| DocsError::Json {
        path: path.to_path_buf(),
        error,
    })?;
    fs::write(path, json).map_err(|error| DocsError::io(path, error))
}
