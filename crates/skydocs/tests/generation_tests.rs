//! Documentation generation against an in-memory extractor.

use std::fs;

use serde_json::json;
use skydocs::{
    DocTree, DocsError, DocumentationGenerator, ExtractionRequest, SymbolExtractor,
    read_artifact,
};
use skydocs_config::DocsToolsConfig;
use tempfile::TempDir;

struct FixedTree(Option<serde_json::Value>);

impl SymbolExtractor for FixedTree {
    fn extract(&self, _request: &ExtractionRequest) -> skydocs::Result<Option<DocTree>> {
        Ok(self
            .0
            .clone()
            .map(|value| serde_json::from_value(value).expect("fixture is a tree")))
    }
}

fn project() -> (TempDir, DocsToolsConfig) {
    let dir = TempDir::new().unwrap();
    let config = DocsToolsConfig::with_root(dir.path());
    (dir, config)
}

#[test]
fn writes_sanitized_tree_with_anchor_ids() {
    let (_dir, config) = project();
    let extractor = FixedTree(Some(json!({
        "name": "my-lib",
        "children": [
            {
                "name": "FooType",
                "kindString": "Class",
                "sources": [{ "fileName": "src/app/public/foo.ts" }],
                "children": [
                    {
                        "name": "_fooStream",
                        "sources": [{ "fileName": "node_modules/rxjs/Subject.d.ts" }]
                    },
                    {
                        "name": "foo",
                        "sources": [{ "fileName": "src/app/public/foo.ts" }]
                    }
                ]
            },
            { "name": "FooService", "kindString": "Injectable" },
            { "name": "FOO_CONFIG", "kindString": "Variable" }
        ]
    })));

    let generated = DocumentationGenerator::new(&config, &extractor)
        .generate()
        .expect("generation should succeed");

    let written = read_artifact(&config.artifact_path()).unwrap();
    assert_eq!(written, generated.artifact);

    let anchor_ids: Vec<_> = written
        .anchor_ids
        .iter()
        .map(|(name, id)| (name.as_str(), id.as_str()))
        .collect();
    assert_eq!(
        anchor_ids,
        vec![
            ("FooType", "class-footype"),
            ("FooService", "injectable-fooservice")
        ]
    );

    let foo_type = &written.children[0];
    assert_eq!(foo_type.anchor_id.as_deref(), Some("class-footype"));
    let members = foo_type.children.as_ref().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name.as_deref(), Some("foo"));

    assert_eq!(written.children[2].anchor_id, None);
    assert_eq!(written.extra.get("name"), Some(&json!("my-lib")));
}

#[test]
fn written_artifact_keeps_collaborator_key_order() {
    let (_dir, config) = project();
    let extractor = FixedTree(Some(json!({
        "id": 0,
        "name": "my-lib",
        "kind": 1,
        "children": [
            {
                "id": 3,
                "name": "FooType",
                "kind": 128,
                "kindString": "Class",
                "flags": { "isExported": true },
                "sources": [{ "fileName": "src/app/public/foo.ts", "line": 4 }]
            }
        ],
        "groups": []
    })));

    let _generated = DocumentationGenerator::new(&config, &extractor)
        .generate()
        .unwrap();

    let written = fs::read_to_string(config.artifact_path()).unwrap();
    assert_eq!(
        written,
        concat!(
            r#"{"id":0,"name":"my-lib","kind":1,"children":[{"id":3,"name":"FooType","kind":128,"#,
            r#""kindString":"Class","flags":{"isExported":true},"#,
            r#""sources":[{"fileName":"src/app/public/foo.ts","line":4}],"anchorId":"class-footype"}],"#,
            r#""groups":[],"anchorIds":{"FooType":"class-footype"}}"#
        )
    );
}

#[test]
fn artifact_is_removed_when_output_is_dropped() {
    let (_dir, config) = project();
    let extractor = FixedTree(Some(json!({ "children": [] })));

    let generated = DocumentationGenerator::new(&config, &extractor)
        .generate()
        .unwrap();
    assert!(config.artifact_path().is_file());

    drop(generated);
    assert!(!config.output_path().exists());
}

#[test]
fn kept_output_survives() {
    let (_dir, config) = project();
    let extractor = FixedTree(Some(json!({ "children": [] })));

    let generated = DocumentationGenerator::new(&config, &extractor)
        .generate()
        .unwrap();
    let kept = generated.output.keep();

    assert_eq!(kept, config.output_path());
    assert!(config.artifact_path().is_file());
}

#[test]
fn stale_output_is_replaced() {
    let (_dir, config) = project();
    fs::create_dir_all(config.output_path()).unwrap();
    fs::write(config.output_path().join("stale.json"), "{}").unwrap();

    let extractor = FixedTree(Some(json!({ "children": [] })));
    let generated = DocumentationGenerator::new(&config, &extractor)
        .generate()
        .unwrap();

    assert!(!config.output_path().join("stale.json").exists());
    assert!(generated.artifact.children.is_empty());
    assert!(generated.artifact.anchor_ids.is_empty());
}

#[test]
fn missing_project_is_reported() {
    let (_dir, config) = project();
    let extractor = FixedTree(None);

    let error = DocumentationGenerator::new(&config, &extractor)
        .generate()
        .unwrap_err();

    assert!(matches!(error, DocsError::ExtractionFailed));
    assert_eq!(
        error.to_string(),
        "TypeDoc project generation failed. This usually occurs when the underlying TypeScript project does not compile or is invalid. Try running `skyux build` to list any compiler issues."
    );
    assert!(!config.artifact_path().exists());
}
