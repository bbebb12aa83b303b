//! End-to-end tests for the `skydocs` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MODULE: &str = "@NgModule({})\nexport class AppExtrasModule { }\n";
const MISSING_TOOLING: &str = "does not include the optional `@skyux/docs-tools` NPM package";

fn skydocs(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skydocs").unwrap();
    cmd.arg("--root")
        .arg(root)
        .arg("--no-color")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SKYDOCS_TOOLING__FORCE_AVAILABLE");
    cmd
}

fn project_with_module() -> TempDir {
    let dir = TempDir::new().unwrap();
    let app = dir.path().join("src/app");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("app-extras.module.ts"), MODULE).unwrap();
    dir
}

fn install_companion(root: &Path) {
    let package = root.join("node_modules/@skyux/docs-tools");
    fs::create_dir_all(&package).unwrap();
    fs::write(package.join("package.json"), r#"{ "name": "@skyux/docs-tools" }"#).unwrap();
}

#[test]
fn preload_registers_providers_in_shared_module() {
    let dir = project_with_module();
    install_companion(dir.path());

    skydocs(dir.path())
        .arg("preload")
        .arg(dir.path().join("src/app/app-extras.module.ts"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "import {\n  SkyDocsSourceCodeProvider,\n  SkyDocsTypeDefinitionsProvider\n} from '@skyux/docs-tools';",
        ))
        .stdout(predicate::str::contains(
            "export class SkyDocsTypeDefinitionsImplService {\n  public readonly anchorIds: {[_: string]: string} = {};\n  public readonly typeDefinitions: any[] = [];\n}",
        ));
}

#[test]
fn preload_writes_to_out_file() {
    let dir = project_with_module();
    let out = dir.path().join("out.ts");

    skydocs(dir.path())
        .env("SKYDOCS_TOOLING__FORCE_AVAILABLE", "true")
        .arg("preload")
        .arg(dir.path().join("src/app/app-extras.module.ts"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(out).unwrap();
    assert!(written.contains("useClass: SkyDocsSourceCodeImplService"));
}

#[test]
fn preload_passes_through_without_companion() {
    let dir = project_with_module();

    skydocs(dir.path())
        .arg("preload")
        .arg(dir.path().join("src/app/app-extras.module.ts"))
        .assert()
        .success()
        .stdout(MODULE);
}

#[test]
fn preload_passes_through_for_other_commands() {
    let dir = project_with_module();
    install_companion(dir.path());

    skydocs(dir.path())
        .arg("preload")
        .arg(dir.path().join("src/app/app-extras.module.ts"))
        .args(["--command", "test"])
        .assert()
        .success()
        .stdout(MODULE);
}

#[test]
fn preload_reports_missing_file() {
    let dir = project_with_module();

    skydocs(dir.path())
        .arg("preload")
        .arg(dir.path().join("src/app/missing.ts"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn run_warns_when_companion_is_missing() {
    let dir = project_with_module();

    skydocs(dir.path())
        .args(["run", "build"])
        .assert()
        .success()
        .stderr(predicate::str::contains(MISSING_TOOLING));

    assert!(!dir.path().join(".skypagestmp").exists());
}

#[test]
fn run_ignores_other_commands() {
    let dir = project_with_module();

    skydocs(dir.path())
        .args(["run", "e2e"])
        .assert()
        .success()
        .stderr(predicate::str::contains(MISSING_TOOLING).not());
}

#[test]
fn missing_root_is_reported() {
    let dir = TempDir::new().unwrap();

    skydocs(&dir.path().join("nope"))
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project root not found"));
}

#[cfg(unix)]
mod with_fake_extractor {
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    use super::*;

    /// Points the extractor at a shell script that copies a fixture into the
    /// `--json` output path (the second argument after `-c`).
    fn configure_extractor(root: &Path, fixture: Option<&str>) {
        let config = match fixture {
            Some(tree) => {
                fs::write(root.join("typedoc-fixture.json"), tree).unwrap();
                "[extractor]\nprogram = \"sh\"\nargs = [\"-c\", 'cp typedoc-fixture.json \"$2\"', \"typedoc\"]\n"
            }
            None => "[extractor]\nprogram = \"false\"\nargs = []\n",
        };
        fs::write(root.join("skydocs.toml"), config).unwrap();
    }

    /// Points the extractor at a script that leaves a partial file in the
    /// output directory and then hangs.
    fn configure_hanging_extractor(root: &Path) {
        fs::write(
            root.join("skydocs.toml"),
            "[extractor]\nprogram = \"sh\"\nargs = [\"-c\", 'touch \"$2.partial\"; exec sleep 30', \"typedoc\"]\n",
        )
        .unwrap();
    }

    fn wait_until(mut done: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if done() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        false
    }

    /// Sends SIGINT while extraction hangs and returns the exit code.
    fn interrupt_during_extraction(root: &Path, args: &[&str]) -> Option<i32> {
        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_skydocs"))
            .arg("--root")
            .arg(root)
            .arg("--no-color")
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("SKYDOCS_TOOLING__FORCE_AVAILABLE")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let partial = root.join(".skypagestmp/docs/typedoc.json.partial");
        assert!(wait_until(|| partial.exists()), "extractor never started");

        let sent = std::process::Command::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .unwrap();
        assert!(sent.success());

        let mut status = None;
        let exited = wait_until(|| {
            status = child.try_wait().unwrap();
            status.is_some()
        });
        if !exited {
            child.kill().unwrap();
            panic!("skydocs did not exit after SIGINT");
        }
        status.and_then(|status| status.code())
    }

    #[test]
    fn interrupted_generate_removes_output() {
        let dir = project_with_module();
        configure_hanging_extractor(dir.path());

        let code = interrupt_during_extraction(dir.path(), &["generate", "--keep"]);

        assert_eq!(code, Some(130));
        assert!(!dir.path().join(".skypagestmp/docs").exists());
    }

    #[test]
    fn interrupted_run_removes_output() {
        let dir = project_with_module();
        install_companion(dir.path());
        configure_hanging_extractor(dir.path());

        let code = interrupt_during_extraction(dir.path(), &["run", "build", "--", "true"]);

        assert_eq!(code, Some(130));
        assert!(!dir.path().join(".skypagestmp/docs").exists());
    }

    #[test]
    fn generate_keeps_artifact_on_request() {
        let dir = project_with_module();
        configure_extractor(
            dir.path(),
            Some(
                r#"{"children":[
                    {"name":"FooType","kindString":"Class","children":[
                        {"name":"_inherited","sources":[{"fileName":"node_modules/rxjs/Subject.d.ts"}]}
                    ]},
                    {"name":"FOO","kindString":"Variable"}
                ]}"#,
            ),
        );

        skydocs(dir.path())
            .args(["generate", "--keep"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Generating documentation..."))
            .stderr(predicate::str::contains("Done."));

        let artifact: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join(".skypagestmp/docs/documentation.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(artifact["anchorIds"], serde_json::json!({ "FooType": "class-footype" }));
        assert_eq!(artifact["children"][0]["children"], serde_json::json!([]));
        assert!(artifact["children"][1].get("anchorId").is_none());
    }

    #[test]
    fn generate_without_keep_cleans_up() {
        let dir = project_with_module();
        configure_extractor(dir.path(), Some(r#"{"children":[]}"#));

        skydocs(dir.path()).arg("generate").assert().success();

        assert!(!dir.path().join(".skypagestmp/docs").exists());
    }

    #[test]
    fn generate_reports_extraction_failure() {
        let dir = project_with_module();
        configure_extractor(dir.path(), None);

        skydocs(dir.path())
            .arg("generate")
            .assert()
            .failure()
            .stderr(predicate::str::contains("TypeDoc project generation failed."));
    }

    #[test]
    fn host_command_sees_artifact_until_it_exits() {
        let dir = project_with_module();
        install_companion(dir.path());
        configure_extractor(dir.path(), Some(r#"{"children":[]}"#));

        skydocs(dir.path())
            .args(["run", "build", "--", "test", "-f", ".skypagestmp/docs/documentation.json"])
            .assert()
            .success();

        assert!(!dir.path().join(".skypagestmp/docs").exists());
    }

    #[test]
    fn failing_host_command_fails_the_run() {
        let dir = project_with_module();
        install_companion(dir.path());
        configure_extractor(dir.path(), Some(r#"{"children":[]}"#));

        skydocs(dir.path())
            .args(["run", "build", "--", "false"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Host command 'false' failed"));

        assert!(!dir.path().join(".skypagestmp/docs").exists());
    }
}
