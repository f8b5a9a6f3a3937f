//! End-to-end tests for the `recipe_stats` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const SCENARIO: &str = r#"[
  {"postcode":"10120","recipe":"A5 Balsamic Veggie Chops","delivery":"Monday 10AM - 3PM"},
  {"postcode":"10120","recipe":"Creamy Dill Chicken","delivery":"Tuesday 9AM - 5PM"},
  {"postcode":"10120","recipe":"Creamy Dill Chicken","delivery":"Wednesday 11AM - 2PM"},
  {"postcode":"10224","recipe":"Potato Bake","delivery":"Thursday 8AM - 1PM"}
]"#;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_recipe_stats"))
}

fn write_fixture(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("deliveries.json");
    fs::write(&path, contents).expect("write fixture");
    path
}

fn stdout_json(path: &PathBuf, extra_args: &[&str]) -> Value {
    let assert = binary().arg(path).args(extra_args).assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON")
}

#[test]
fn shows_help() {
    binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe_stats"));
}

#[test]
fn reports_aggregated_statistics() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, SCENARIO);

    let report = stdout_json(&path, &["--name", "Potato,Veggie,Mushroom"]);

    assert_eq!(report["unique_recipe_count"], 2);

    let recipes = report["count_per_recipe"].as_array().expect("recipe array");
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0]["recipe"], "A5 Balsamic Veggie Chops");
    assert_eq!(recipes[0]["count"], 1);
    assert_eq!(recipes[1]["recipe"], "Creamy Dill Chicken");
    assert_eq!(recipes[1]["count"], 2);
    assert_eq!(recipes[2]["recipe"], "Potato Bake");
    assert_eq!(recipes[2]["count"], 1);

    assert_eq!(report["busiest_postcode"]["postcode"], "10120");
    assert_eq!(report["busiest_postcode"]["delivery_count"], 3);

    let window = &report["count_per_postcode_and_time"];
    assert_eq!(window["postcode"], "10120");
    assert_eq!(window["from"], "10AM");
    assert_eq!(window["to"], "3PM");
    assert_eq!(window["delivery_count"], 2);

    assert_eq!(
        report["match_by_name"],
        serde_json::json!(["A5 Balsamic Veggie Chops", "Potato Bake"])
    );
    assert!(report.get("total_json_objects").is_none());
}

#[test]
fn totals_flag_appends_record_count() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, SCENARIO);

    let report = stdout_json(&path, &["--totals"]);

    assert_eq!(report["total_json_objects"], 4);
}

#[test]
fn window_count_is_zero_for_unseen_postcode() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, SCENARIO);

    let report = stdout_json(&path, &["--postcode", "99999"]);

    let window = &report["count_per_postcode_and_time"];
    assert_eq!(window["postcode"], "99999");
    assert_eq!(window["delivery_count"], 0);
}

#[test]
fn writes_report_to_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, SCENARIO);
    let output = dir.path().join("report.json");

    binary()
        .arg(&path)
        .args(["--output", output.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("json");
    assert_eq!(report["busiest_postcode"]["postcode"], "10120");
}

#[test]
fn warns_on_malformed_delivery_and_still_counts_the_record() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(
        &dir,
        r#"[
  {"postcode":"10120","recipe":"Creamy Dill Chicken","delivery":"Wednesday 10AM - 3PM"},
  {"postcode":"10120","recipe":"Potato Bake","delivery":"whenever"}
]"#,
    );

    let assert = binary()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn] record 2"))
        .stderr(predicate::str::contains("does not match"));

    let report: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON");
    let recipes = report["count_per_recipe"].as_array().expect("recipe array");
    assert_eq!(recipes.len(), 2, "malformed delivery still counts");
    assert_eq!(report["count_per_postcode_and_time"]["delivery_count"], 1);
}

#[test]
fn empty_input_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, "[]");

    binary()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No delivery records"));
}

#[test]
fn missing_input_file_is_an_error() {
    binary()
        .arg("/no/such/deliveries.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("opening record source"));
}

#[test]
fn non_array_input_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, r#"{"not":"an array"}"#);

    binary()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn truncated_input_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, r#"[{"postcode":"10120","recipe":"A"#);

    binary().arg(&path).assert().failure().stderr(predicate::str::contains("Error:"));
}

#[test]
fn streams_large_inputs_record_by_record() {
    use recipe_stats_infra::source::{JsonRecordSource, RecordSource};

    let mut input = String::from("[");
    for index in 0..10_000 {
        if index > 0 {
            input.push(',');
        }
        input.push_str(&format!(
            r#"{{"postcode":"10{index:03}","recipe":"Recipe {index}","delivery":"Monday 10AM - 3PM"}}"#
        ));
    }
    input.push(']');

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("large.json");
    fs::write(&path, &input).expect("write fixture");

    let mut source = JsonRecordSource::open(&path).expect("open fixture");
    let mut decoded = 0_u64;
    while let Some(record) = source.next_record().expect("record decodes") {
        assert!(record.postcode.starts_with("10"));
        decoded += 1;
    }
    assert_eq!(decoded, 10_000);
}
