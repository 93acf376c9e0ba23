use assetgraph::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_resolve_prints_delivery_order() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    let output = project.run_assetgraph(&["resolve", "app"]).unwrap();
    output.assert_success();
    assert_eq!(
        output.lines(),
        vec![
            "url\tjquery.js",
            "server\tjs/ui.js",
            "application\tjs/app.js",
            "application\tcss/app.css",
        ]
    );
}

#[test]
fn test_resolve_several_roots_shares_dependencies() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    let output = project.run_assetgraph(&["resolve", "app", "admin", "app"]).unwrap();
    output.assert_success();
    let values: Vec<&str> =
        output.lines().iter().filter_map(|line| line.split('\t').nth(1)).collect();
    assert_eq!(values, vec!["jquery.js", "js/admin.js", "js/ui.js", "js/app.js", "css/app.css"]);
}

#[test]
fn test_resolve_with_locators() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    project
        .command()
        .args(["resolve", "admin", "--locators"])
        .assert()
        .success()
        .stdout("url\tjquery.js\thttps://code.jquery.com/jquery.js\napplication\tjs/admin.js\t-\n");
}

#[test]
fn test_resolve_json() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    let output = project.run_assetgraph(&["resolve", "ui", "--format", "json"]).unwrap();
    output.assert_success();
    let parsed: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["location"], "url");
    assert_eq!(entries[1]["value"], "js/ui.js");
    assert_eq!(entries[1]["locator"], "/static/js/ui.js");
}

#[test]
fn test_resolve_unknown_dependency_fails() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::missing_dependency().content).unwrap();

    project
        .command()
        .args(["resolve", "app"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot resolve asset ghost"));
}

#[test]
fn test_resolve_cycle_lists_pending_assets() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::cyclic().content).unwrap();

    project
        .command()
        .args(["resolve", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot satisfy asset dependencies"))
        .stderr(predicate::str::contains("a -> [b]"))
        .stderr(predicate::str::contains("b -> [a]"));
}

#[test]
fn test_resolve_uses_first_declaration_of_duplicate_id() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::duplicate_ids().content).unwrap();

    let output = project.run_assetgraph(&["resolve", "jquery"]).unwrap();
    output.assert_success();
    assert_eq!(output.lines(), vec!["server\tjquery.js"]);
}

#[test]
fn test_resolve_finds_manifest_in_parent_directory() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();
    let nested = project.project_path().join("web").join("pages");
    std::fs::create_dir_all(&nested).unwrap();

    project
        .command()
        .current_dir(&nested)
        .args(["resolve", "ui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server\tjs/ui.js"));
}

#[test]
fn test_resolve_with_explicit_manifest_path() {
    let project = TestProject::new().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let manifest = ManifestFixture::basic().write_to(elsewhere.path()).unwrap();

    project
        .command()
        .arg("--manifest-path")
        .arg(&manifest)
        .args(["resolve", "jquery"])
        .assert()
        .success()
        .stdout("url\tjquery.js\n");
}
