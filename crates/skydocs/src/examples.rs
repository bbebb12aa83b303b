//! Collects code-example sources for the source-code provider.
//!
//! File contents are percent-encoded so later loaders in the host pipeline
//! cannot rewrite them (template loaders otherwise add `require` calls to
//! `templateUrl`/`styleUrls` found inside the examples).

use std::fs;
use std::path::Path;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use skydocs_config::DocsToolsConfig;
use walkdir::WalkDir;

use crate::error::{DocsError, Result};

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One embedded example file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub file_name: String,
    /// Root-relative path with `/` separators.
    pub file_path: String,
    /// Percent-encoded file contents.
    pub raw_contents: String,
}

/// Percent-encodes `value` with the URI-component escaping table.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Reads every example file under the configured directory, in path order.
pub fn collect_code_examples(config: &DocsToolsConfig) -> Result<Vec<CodeExample>> {
    let dir = config.code_examples_path();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut examples = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.map_err(|error| {
            let path = error.path().unwrap_or(&dir).to_path_buf();
            DocsError::io(path, error.into())
        })?;

        if !entry.file_type().is_file() || !has_example_extension(entry.path(), config) {
            continue;
        }

        examples.push(read_example(entry.path(), &config.root)?);
    }

    tracing::debug!("Collected {} code example(s)", examples.len());
    Ok(examples)
}

/// Serializes examples as a pretty-printed JSON array.
pub fn render_code_examples(examples: &[CodeExample]) -> Result<String> {
    serde_json::to_string_pretty(examples).map_err(|error| DocsError::Json {
        path: "code-examples".into(),
        error,
    })
}

fn has_example_extension(path: &Path, config: &DocsToolsConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.code_example_extensions.iter().any(|e| e == ext))
}

fn read_example(path: &Path, root: &Path) -> Result<CodeExample> {
    let bytes = fs::read(path).map_err(|error| DocsError::io(path, error))?;
    let contents = String::from_utf8(bytes).map_err(|error| {
        DocsError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, error),
        )
    })?;

    let relative = path.strip_prefix(root).unwrap_or(path);
    let file_path = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(CodeExample {
        file_name,
        file_path,
        raw_contents: encode_uri_component(&contents),
    })
}
