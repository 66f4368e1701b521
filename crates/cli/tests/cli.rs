use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn designmap() -> Command {
    Command::cargo_bin("designmap").expect("binary")
}

fn demo_catalog_file(dir: &std::path::Path) -> std::path::PathBuf {
    let output = designmap().arg("demo").output().expect("demo run");
    assert!(output.status.success());
    let path = dir.join("catalog.json");
    fs::write(&path, &output.stdout).unwrap();
    path
}

#[test]
fn demo_prints_a_parseable_catalog() {
    let output = designmap().arg("demo").output().expect("demo run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["schema_version"], 1);
    assert!(body["components"].as_array().unwrap().len() > 0);
}

#[test]
fn validate_passes_on_the_demo_catalog() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());

    designmap()
        .arg("validate")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("references resolved"));
}

#[test]
fn validate_fails_on_unresolved_reference() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(
        &path,
        r#"{
            "schema_version": 1,
            "components": [
                { "id": "button", "name": "Button", "category": "atomic", "status": "stable" }
            ],
            "pages": [
                { "id": "home", "name": "Home", "route": "/", "status": "live",
                  "components": ["Button", "GhostComponent"] }
            ]
        }"#,
    )
    .unwrap();

    designmap()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("GhostComponent"));
}

#[test]
fn validate_json_reports_counts() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());

    let output = designmap()
        .arg("validate")
        .arg(&catalog)
        .arg("--json")
        .output()
        .expect("validate run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(body["resolved"].as_u64().unwrap() > 0);
    assert_eq!(body["unresolved"].as_array().unwrap().len(), 0);
}

#[test]
fn stats_json_is_consistent() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());

    let output = designmap()
        .arg("stats")
        .arg(&catalog)
        .arg("--json")
        .output()
        .expect("stats run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let components = &body["components"];
    let total = components["total"].as_u64().unwrap();
    let by_category = components["atomic"].as_u64().unwrap()
        + components["molecular"].as_u64().unwrap()
        + components["organism"].as_u64().unwrap();
    assert_eq!(total, by_category);
    assert_eq!(body["totals"]["components"].as_u64().unwrap(), total);
}

#[test]
fn search_is_case_insensitive() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());

    designmap()
        .arg("search")
        .arg(&catalog)
        .arg("GLASS")
        .assert()
        .success()
        .stdout(predicate::str::contains("GlassCardAtomic"));
}

#[test]
fn ranked_search_tolerates_typos() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());

    designmap()
        .arg("search")
        .arg(&catalog)
        .arg("navigtion")
        .arg("--ranked")
        .assert()
        .success()
        .stdout(predicate::str::contains("NavigationMolecular"));
}

#[test]
fn graph_emits_snapshot_json() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());

    let output = designmap()
        .arg("graph")
        .arg(&catalog)
        .output()
        .expect("graph run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["nodes"].as_array().unwrap().len(), 15);
    assert!(body["edges"].as_array().unwrap().len() > 0);
}

#[test]
fn graph_writes_to_out_file() {
    let temp = tempdir().unwrap();
    let catalog = demo_catalog_file(temp.path());
    let out = temp.path().join("snapshot.json");

    designmap()
        .arg("graph")
        .arg(&catalog)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let body: Value = serde_json::from_slice(&fs::read(&out).unwrap()).expect("valid json");
    assert!(body["nodes"].as_array().unwrap().len() > 0);
}

#[test]
fn schema_prints_catalog_schema() {
    designmap()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("schema_version"));
}

#[test]
fn rejects_wrong_schema_version() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("v2.json");
    fs::write(&path, r#"{ "schema_version": 2 }"#).unwrap();

    designmap()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema_version"));
}

#[test]
fn rejects_unknown_catalog_field() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("typo.json");
    fs::write(&path, r#"{ "schema_version": 1, "component": [] }"#).unwrap();

    designmap().arg("validate").arg(&path).assert().failure();
}

#[test]
fn missing_catalog_file_fails_with_path_in_message() {
    designmap()
        .arg("stats")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}
