//! Configuration structure for the documentation builder plugin.
//!
//! Every path except `root` is relative to `root`. Defaults mirror the
//! directory conventions of a SKY UX library project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsToolsConfig {
    /// Project root; all other paths resolve against it.
    pub root: PathBuf,

    /// Directory handed to the extraction collaborator.
    pub public_dir: PathBuf,

    /// Placeholder directory used while serving or building.
    pub plugin_resources_dir: PathBuf,

    /// Placeholder directory used while packaging the library.
    pub temp_plugin_resources_dir: PathBuf,

    /// Root of the code-example sources embedded into the source-code provider.
    pub code_examples_dir: PathBuf,

    /// File extensions collected from `code_examples_dir`.
    pub code_example_extensions: Vec<String>,

    /// Temporary output directory owned by the documentation generator.
    pub output_dir: PathBuf,

    /// File name of the persisted documentation artifact inside `output_dir`.
    pub artifact_file_name: String,

    /// File-name marker of the shared module that receives provider registrations.
    pub module_file_name: String,

    /// Path segment identifying third-party installed code.
    pub dependency_dir_marker: String,

    /// Globs excluded from extraction.
    pub exclude: Vec<String>,

    pub package: PackageConfig,

    pub extractor: ExtractorConfig,

    pub tooling: ToolingConfig,
}

impl Default for DocsToolsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            public_dir: PathBuf::from("src/app/public"),
            plugin_resources_dir: PathBuf::from("src/app/public/plugin-resources"),
            temp_plugin_resources_dir: PathBuf::from(".skypagestmp/plugin-resources"),
            code_examples_dir: PathBuf::from("src/app/public/plugin-resources/code-examples"),
            code_example_extensions: ["ts", "js", "html", "scss"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_dir: PathBuf::from(".skypagestmp/docs"),
            artifact_file_name: "documentation.json".to_string(),
            module_file_name: "app-extras.module.ts".to_string(),
            dependency_dir_marker: "node_modules".to_string(),
            exclude: [
                "**/node_modules/**",
                "**/fixtures/**",
                "**/*.spec.ts",
                "**/plugin-resources/**",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            package: PackageConfig::default(),
            extractor: ExtractorConfig::default(),
            tooling: ToolingConfig::default(),
        }
    }
}

impl DocsToolsConfig {
    /// Creates the default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolves a root-relative path. Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Location of the persisted documentation artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.output_path().join(&self.artifact_file_name)
    }

    pub fn code_examples_path(&self) -> PathBuf {
        self.resolve(&self.code_examples_dir)
    }

    pub fn tsconfig_path(&self) -> PathBuf {
        self.resolve(&self.extractor.tsconfig)
    }
}

/// Identity of the optional companion documentation-tools package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Published package name, used as the import path in consuming projects.
    pub name: String,

    /// Directory name of the package's own repository.
    pub repository_dir: String,

    /// Import path used when building inside the package's own repository.
    pub local_import_path: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "@skyux/docs-tools".to_string(),
            repository_dir: "skyux-docs-tools".to_string(),
            local_import_path: "./public/public_api".to_string(),
        }
    }
}

/// How the extraction collaborator is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub program: String,

    /// Arguments placed before the generated option flags.
    pub args: Vec<String>,

    pub tsconfig: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["typedoc".to_string()],
            tsconfig: PathBuf::from("tsconfig.json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolingConfig {
    /// Overrides companion-package detection when set.
    pub force_available: Option<bool>,
}
