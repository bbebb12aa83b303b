//! Lifetime of the temporary output directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DocsError, Result};

/// Owns the temporary output directory and removes it when dropped.
///
/// Cleanup is idempotent so the same directory can also be released from a
/// signal handler before the value goes out of scope.
#[derive(Debug)]
pub struct ScopedOutputDir {
    path: PathBuf,
    armed: bool,
}

impl ScopedOutputDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes any previous contents and recreates the directory empty.
    pub fn reset(&self) -> Result<()> {
        self.cleanup()?;
        fs::create_dir_all(&self.path).map_err(|error| DocsError::io(&self.path, error))
    }

    /// Deletes the directory. Missing directories are not an error.
    pub fn cleanup(&self) -> Result<()> {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed {}", self.path.display());
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(DocsError::io(&self.path, error)),
        }
    }

    /// Disarms the guard and leaves the directory on disk.
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for ScopedOutputDir {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(error) = self.cleanup() {
            tracing::warn!("Failed to remove temporary documentation files: {error}");
        }
    }
}
