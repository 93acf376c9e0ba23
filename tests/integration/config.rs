use assetgraph::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_default_location_from_global_config() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::duplicate_ids().content).unwrap();
    project.write_config("default_location = \"application\"\n").unwrap();

    project
        .command()
        .args(["resolve", "jquery"])
        .assert()
        .success()
        .stdout("application\tjquery.js\n");
}

#[test]
fn test_manifest_name_from_global_config() {
    let project = TestProject::new().unwrap();
    std::fs::write(
        project.project_path().join("web.toml"),
        ManifestFixture::basic().content,
    )
    .unwrap();
    project.write_config("manifest_name = \"web.toml\"\n").unwrap();

    project.command().args(["resolve", "jquery"]).assert().success().stdout("url\tjquery.js\n");
}

#[test]
fn test_config_flag_overrides_environment() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::duplicate_ids().content).unwrap();
    let other = project.project_path().join("other-config.toml");
    std::fs::write(&other, "default_location = \"url\"\n").unwrap();

    project
        .command()
        .arg("--config")
        .arg(&other)
        .args(["resolve", "jquery"])
        .assert()
        .success()
        .stdout("url\tjquery.js\n");
}

#[test]
fn test_invalid_global_config() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();
    project.write_config("colour = \"blue\"\n").unwrap();

    project
        .command()
        .arg("graph")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load global config"));
}

#[test]
fn test_config_init_show_and_path() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    project
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created global config"));
    assert!(project.config_path().exists());

    project
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    project
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_location = \"server\""));
}
