use assetgraph::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_validate_valid_manifest() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    let output = project.run_assetgraph(&["validate"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("✓ 4/4 asset(s) resolve")
        .assert_stdout_contains("Manifest is valid");
}

#[test]
fn test_validate_reports_broken_assets() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::missing_dependency().content).unwrap();

    let output = project.run_assetgraph(&["validate"]).unwrap();
    output
        .assert_failure()
        .assert_stdout_contains("✗ app: Cannot resolve asset ghost")
        .assert_stdout_contains("Dependency 'ghost' is not declared (required by app)")
        .assert_stderr_contains("Validation failed with 1 problem(s)");
}

#[test]
fn test_validate_strict_duplicates() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::duplicate_ids().content).unwrap();

    project.command().arg("validate").assert().success();
    project
        .command()
        .args(["validate", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("'jquery' is declared more than once"));
}

#[test]
fn test_validate_json() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::cyclic().content).unwrap();

    let output = project.run_assetgraph(&["validate", "--format", "json"]).unwrap();
    output.assert_failure();
    let parsed: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["assets_total"], 2);
    assert_eq!(parsed["errors"].as_array().unwrap().len(), 2);
}
