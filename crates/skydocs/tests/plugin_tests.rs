//! The plugin facade across a full serve/build cycle.

use std::fs;
use std::path::Path;

use serde_json::json;
use skydocs::{
    DocTree, DocsToolsPlugin, ExtractionRequest, HostCommand, SymbolExtractor,
    ToolingAvailability,
};
use skydocs_config::DocsToolsConfig;
use tempfile::TempDir;

const MODULE: &str = "@NgModule({})\nexport class AppExtrasModule { }\n";
const SOURCE_CODE_PLACEHOLDER: &str = "src/app/public/plugin-resources/sample-source-code-provider.ts";
const TYPE_DEFINITIONS_PLACEHOLDER: &str =
    "src/app/public/plugin-resources/sample-type-definitions-provider.ts";

struct FixedTree(serde_json::Value);

impl SymbolExtractor for FixedTree {
    fn extract(&self, _request: &ExtractionRequest) -> skydocs::Result<Option<DocTree>> {
        Ok(Some(serde_json::from_value(self.0.clone()).expect("fixture is a tree")))
    }
}

fn plugin(root: &Path, tooling: ToolingAvailability) -> DocsToolsPlugin {
    DocsToolsPlugin::new(DocsToolsConfig::with_root(root), tooling).with_extractor(FixedTree(
        json!({
            "children": [
                { "name": "FooType", "kindString": "Class" },
                { "name": "FOO", "kindString": "Variable" }
            ]
        }),
    ))
}

#[test]
fn build_populates_placeholders_from_generated_artifact() {
    let dir = TempDir::new().unwrap();
    let examples = dir.path().join("src/app/public/plugin-resources/code-examples");
    fs::create_dir_all(&examples).unwrap();
    fs::write(examples.join("demo.component.ts"), "let a = 1;").unwrap();

    let plugin = plugin(dir.path(), ToolingAvailability::Available);
    plugin.run_command(&HostCommand::Build).unwrap();
    assert!(plugin.config().artifact_path().is_file());

    let source_code = plugin
        .preload(
            "export class SampleSourceCodeProvider {}",
            Path::new(SOURCE_CODE_PLACEHOLDER),
            &HostCommand::Build,
        )
        .unwrap();
    assert!(source_code.contains("export class SampleSourceCodeProvider implements SkyDocsSourceCodeProvider {"));
    assert!(source_code.contains(r#""rawContents": "let%20a%20%3D%201%3B""#));

    let type_definitions = plugin
        .preload(
            "export class SampleTypeDefinitionsProvider {}",
            Path::new(TYPE_DEFINITIONS_PLACEHOLDER),
            &HostCommand::Build,
        )
        .unwrap();
    assert!(type_definitions.contains(
        r#"public readonly anchorIds: {[_: string]: string} = {"FooType":"class-footype"};"#
    ));
    assert!(type_definitions.contains(r#""anchorId":"class-footype""#));

    plugin.cleanup_output().unwrap();
    assert!(!plugin.config().output_path().exists());
    plugin.cleanup_output().unwrap();
}

#[test]
fn serve_merges_providers_into_shared_module() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin(dir.path(), ToolingAvailability::Available);

    let output = plugin
        .preload(MODULE, Path::new("src/app/app-extras.module.ts"), &HostCommand::Serve)
        .unwrap();

    assert!(output.contains(
        "import {
  SkyDocsSourceCodeProvider,
  SkyDocsTypeDefinitionsProvider
} from '@skyux/docs-tools';"
    ));
    assert!(output.contains(
        "export class SkyDocsSourceCodeImplService {
  public readonly sourceCode: any[] = [];
}"
    ));
    assert!(output.contains(
        "providers: [
    {
      provide: SkyDocsSourceCodeProvider,
      useClass: SkyDocsSourceCodeImplService
    },
    {
      provide: SkyDocsTypeDefinitionsProvider,
      useClass: SkyDocsTypeDefinitionsImplService
    }
  ]
})"
    ));
}

#[test]
fn other_commands_pass_content_through() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin(dir.path(), ToolingAvailability::Available);
    let command = HostCommand::parse("test");

    plugin.run_command(&command).unwrap();
    assert!(!plugin.config().output_path().exists());

    let output = plugin
        .preload(MODULE, Path::new("src/app/app-extras.module.ts"), &command)
        .unwrap();
    assert_eq!(output, MODULE);
}

#[test]
fn unrelated_files_pass_through() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin(dir.path(), ToolingAvailability::Available);

    let output = plugin
        .preload(MODULE, Path::new("src/app/foobar.ts"), &HostCommand::Build)
        .unwrap();
    assert_eq!(output, MODULE);
}

#[test]
fn missing_tooling_disables_everything() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin(dir.path(), ToolingAvailability::Missing);

    plugin.run_command(&HostCommand::Serve).unwrap();
    assert!(!plugin.config().output_path().exists());

    let output = plugin
        .preload(MODULE, Path::new("src/app/app-extras.module.ts"), &HostCommand::Serve)
        .unwrap();
    assert_eq!(output, MODULE);
}

#[test]
fn repeated_generation_keeps_latest_output() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin(dir.path(), ToolingAvailability::Available);

    plugin.run_command(&HostCommand::Serve).unwrap();
    plugin.run_command(&HostCommand::Serve).unwrap();
    assert!(plugin.config().artifact_path().is_file());

    let kept = plugin.keep_output().unwrap();
    drop(plugin);
    assert!(kept.join("documentation.json").is_file());
}

#[test]
fn dropping_plugin_removes_output() {
    let dir = TempDir::new().unwrap();
    let plugin = plugin(dir.path(), ToolingAvailability::Available);
    let output_path = plugin.config().output_path();

    plugin.run_command(&HostCommand::Build).unwrap();
    assert!(output_path.is_dir());

    drop(plugin);
    assert!(!output_path.exists());
}
