use assetgraph::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_tree_for_asset() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    project
        .command()
        .args(["tree", "app"])
        .assert()
        .success()
        .stdout("app\n├── jquery\n└── ui\n    └── jquery\n");
}

#[test]
fn test_tree_defaults_to_roots() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    let output = project.run_assetgraph(&["tree"]).unwrap();
    output.assert_success();
    let roots: Vec<&str> = output
        .stdout
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with(['├', '└', '│', ' ']))
        .collect();
    assert_eq!(roots, vec!["app", "admin"]);
}

#[test]
fn test_tree_marks_cycles_and_unresolved() {
    let project = TestProject::new().unwrap();
    project
        .write_manifest(
            r#"
[[assets]]
id = "a"
value = "a.js"
depends = ["b", "ghost"]

[[assets]]
id = "b"
value = "b.js"
depends = ["a"]
"#,
        )
        .unwrap();

    project
        .command()
        .args(["tree", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a (circular reference)"))
        .stdout(predicate::str::contains("ghost (unresolved)"));
}

#[test]
fn test_tree_unknown_root_fails() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    project
        .command()
        .args(["tree", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot resolve asset nope"));
}

#[test]
fn test_graph_outputs_dot() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&ManifestFixture::basic().content).unwrap();

    let output = project.run_assetgraph(&["graph"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("digraph {")
        .assert_stdout_contains("\"jquery\"")
        .assert_stdout_contains("\"admin\"");
    assert_eq!(output.stdout.matches("->").count(), 4);
}
