use assetgraph::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_missing_manifest() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("--manifest-path")
        .arg(project.project_path().join("assets.toml"))
        .args(["resolve", "app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn test_missing_manifest_names_configured_file() {
    let project = TestProject::new().unwrap();
    project.write_config("manifest_name = \"web-assets.toml\"\n").unwrap();

    project
        .command()
        .args(["resolve", "app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "error: Manifest file web-assets.toml not found in current directory or any parent directory",
        ))
        .stderr(predicate::str::contains("Create web-assets.toml"));
}

#[test]
fn test_invalid_manifest_syntax() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::invalid_syntax().content).unwrap();

    project
        .command()
        .arg("graph")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest file syntax"));
}

#[test]
fn test_invalid_declaration() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[assets]]
id = "empty"
"#,
        )
        .unwrap();

    project
        .command()
        .arg("graph")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid asset 'empty'"));
}

#[test]
fn test_unknown_location_is_rejected() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[assets]]
id = "app"
location = "moon"
value = "app.js"
"#,
        )
        .unwrap();

    let output = project.run_assetgraph(&["resolve", "app"]).unwrap();
    output.assert_failure().assert_stderr_contains("Invalid manifest file syntax");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let project = TestProject::new().unwrap();
    project.command().args(["--verbose", "--quiet", "graph"]).assert().failure().code(2);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    project
        .command()
        .args(["--verbose", "resolve", "jquery"])
        .assert()
        .success()
        .stdout("url\tjquery.js\n")
        .stderr(predicate::str::contains("Registered 4 asset(s)"));
}
