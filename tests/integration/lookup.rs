use assetgraph::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_lookup_prints_locator() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    project
        .command()
        .args(["lookup", "js/app.js"])
        .assert()
        .success()
        .stdout("/static/js/app.js\n");
}

#[test]
fn test_lookup_value_without_locator_fails() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    project
        .command()
        .args(["lookup", "css/app.css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No locator registered for 'css/app.css'"));
}

#[test]
fn test_lookup_keeps_first_registered_locator() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[assets]]
id = "cdn"
value = "jquery.js"
url = "https://cdn.example.com/jquery.js"

[[assets]]
id = "local"
value = "jquery.js"
url = "/static/jquery.js"
"#,
        )
        .unwrap();

    let output = project.run_assetgraph(&["lookup", "jquery.js"]).unwrap();
    output.assert_success().assert_stdout_contains("https://cdn.example.com/jquery.js");
}
