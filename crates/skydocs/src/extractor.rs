//! Binding to the external symbol-extraction collaborator.
//!
//! The collaborator statically analyzes the compiled project and emits a JSON
//! symbol tree. [`TypedocCli`] drives the `typedoc` command-line tool; tests
//! and hosts with their own integration implement [`SymbolExtractor`].

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use skydocs_config::DocsToolsConfig;

use crate::error::{DocsError, Result};
use crate::model::DocTree;

const STAGING_FILE_NAME: &str = "typedoc.json";

/// Options handed to the extraction collaborator for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    /// Working directory of the run.
    pub root: PathBuf,
    /// Directory whose exports are documented.
    pub input_dir: PathBuf,
    pub tsconfig: PathBuf,
    pub exclude: Vec<String>,
    /// Where the collaborator writes its raw JSON output.
    pub json_output: PathBuf,
    pub exclude_externals: bool,
    pub exclude_not_exported: bool,
    pub exclude_private: bool,
    pub exclude_protected: bool,
    pub strip_internal: bool,
    pub experimental_decorators: bool,
    pub mode: String,
    pub module: String,
    pub target: String,
    pub logger: String,
}

impl ExtractionRequest {
    /// The fixed option set used for documentation builds.
    pub fn from_config(config: &DocsToolsConfig) -> Self {
        Self {
            root: config.root.clone(),
            input_dir: config.public_dir.clone(),
            tsconfig: config.tsconfig_path(),
            exclude: config.exclude.clone(),
            json_output: config.output_path().join(STAGING_FILE_NAME),
            exclude_externals: true,
            exclude_not_exported: true,
            exclude_private: true,
            exclude_protected: true,
            strip_internal: true,
            experimental_decorators: true,
            mode: "file".to_string(),
            module: "CommonJS".to_string(),
            target: "ES5".to_string(),
            logger: "none".to_string(),
        }
    }

    /// Renders the request as `typedoc` command-line flags.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        args.push("--json".into());
        args.push(self.json_output.clone().into());
        args.push("--tsconfig".into());
        args.push(self.tsconfig.clone().into());
        for pattern in &self.exclude {
            args.push("--exclude".into());
            args.push(pattern.into());
        }

        let flags = [
            (self.exclude_externals, "--excludeExternals"),
            (self.exclude_not_exported, "--excludeNotExported"),
            (self.exclude_private, "--excludePrivate"),
            (self.exclude_protected, "--excludeProtected"),
            (self.strip_internal, "--stripInternal"),
            (self.experimental_decorators, "--experimentalDecorators"),
        ];
        args.extend(
            flags
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, flag)| OsString::from(flag)),
        );

        for (flag, value) in [
            ("--mode", &self.mode),
            ("--module", &self.module),
            ("--target", &self.target),
            ("--logger", &self.logger),
        ] {
            args.push(flag.into());
            args.push(value.into());
        }

        args.push(self.input_dir.clone().into());
        args
    }
}

/// Produces the symbol tree for a project.
pub trait SymbolExtractor: Send + Sync {
    /// Runs the extraction. `Ok(None)` means no project was produced.
    fn extract(&self, request: &ExtractionRequest) -> Result<Option<DocTree>>;
}

/// Runs the `typedoc` command-line tool.
#[derive(Debug, Clone)]
pub struct TypedocCli {
    program: String,
    args: Vec<String>,
}

impl TypedocCli {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &DocsToolsConfig) -> Self {
        Self::new(config.extractor.program.clone(), config.extractor.args.clone())
    }
}

impl SymbolExtractor for TypedocCli {
    fn extract(&self, request: &ExtractionRequest) -> Result<Option<DocTree>> {
        let output = &request.json_output;
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|error| DocsError::io(parent, error))?;
        }

        tracing::debug!(
            "Running {} {} on {}",
            self.program,
            self.args.join(" "),
            request.input_dir.display()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .args(request.to_args())
            .current_dir(&request.root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|error| DocsError::Extractor {
                program: self.program.clone(),
                message: error.to_string(),
            })?;

        if !status.success() {
            tracing::debug!("{} exited with {status}", self.program);
            return Ok(None);
        }

        let json_path = request.root.join(output);
        let content = match fs::read_to_string(&json_path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(DocsError::io(json_path, error)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|error| DocsError::Json {
                path: json_path,
                error,
            })
    }
}
