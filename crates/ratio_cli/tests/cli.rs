//! End-to-end tests for the `ratio` binary: stdout shape, stderr codes, and
//! exit-code mapping.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn ratio() -> Command {
    let mut cmd = Command::cargo_bin("ratio").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_rules(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("rules.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn parse_prints_canonical_ratio() {
    ratio()
        .args(["parse", "1:2:3"])
        .assert()
        .success()
        .stdout("1:2:3\n");
}

#[test]
fn parse_json_is_canonical() {
    ratio()
        .args(["parse", "3:5", "--json"])
        .assert()
        .success()
        .stdout("{\"numbers\":[3,5],\"ok\":true,\"ratio\":\"3:5\",\"term_count\":2}\n");
}

#[test]
fn parse_rejections_carry_codes() {
    for (raw, code) in [
        ("1:2:3:4:5:a", "INVALID_CHARS"),
        ("-1:3", "INVALID_CHARS"),
        ("1::2", "INVALID_COLONS"),
        (":1:2", "INVALID_FORMAT"),
        ("1", "INVALID_FORMAT"),
        ("1:3/2", "INVALID_RATIO"),
        ("1.2:2", "INVALID_RATIO"),
        ("2:4:6", "INVALID_FORM"),
    ] {
        ratio()
            .args(["parse", raw])
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains(code));
    }
}

#[test]
fn parse_rejection_as_json() {
    ratio()
        .args(["parse", "1::2", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"code\":\"INVALID_COLONS\""))
        .stdout(predicate::str::contains("\"ok\":false"))
        .stdout(predicate::str::contains("\"raw\":\"1::2\""));
}

#[test]
fn reduce_accepts_unsimplified() {
    ratio()
        .args(["reduce", "10:20:30"])
        .assert()
        .success()
        .stdout("1:2:3\n");

    ratio()
        .args(["reduce", "0:4"])
        .assert()
        .success()
        .stdout("0:1\n");

    ratio()
        .args(["reduce", "0:0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("INVALID_FORM"));
}

#[test]
fn check_true_and_false_exit_codes() {
    ratio()
        .args(["check", "--rule", "IsEquivalent", "--answer", "1:2:3", "--input", "2:4:6"])
        .assert()
        .success()
        .stdout("true\n");

    ratio()
        .args(["check", "--rule", "equals", "--answer", "1:2:3", "--input", "2:4:6"])
        .assert()
        .code(1)
        .stdout("false\n");

    ratio()
        .args([
            "check",
            "--rule",
            "has_number_of_terms_equal_to",
            "--answer",
            "1:2:3",
            "--input",
            "10:2:15",
        ])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn check_applies_simplest_form_to_answer_only() {
    ratio()
        .args(["check", "--rule", "IsEquivalent", "--answer", "2:4", "--input", "1:2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("INVALID_FORM"));
}

#[test]
fn check_rejects_unknown_rule_as_usage_error() {
    ratio()
        .args(["check", "--rule", "Contains", "--answer", "1:2", "--input", "1:2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown rule"));
}

#[test]
fn classify_first_match_wins() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write_rules(
        &dir,
        r#"{"id":"lesson","rules":[
            {"rule_type":"Equals","inputs":{"x":[1,2]}},
            {"rule_type":"IsEquivalent","inputs":{"x":"2:4:6"}},
            {"rule_type":"HasNumberOfTermsEqualTo","inputs":{"x":[5,5,5]}}
        ]}"#,
    );

    ratio()
        .args(["classify", "--answer", "1:2:3", "--rules"])
        .arg(&rules)
        .assert()
        .success()
        .stdout("match 1 IsEquivalent 2:4:6\n");

    ratio()
        .args(["classify", "--answer", "3:1", "--rules"])
        .arg(&rules)
        .assert()
        .code(1)
        .stdout("no match\n");
}

#[test]
fn classify_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write_rules(
        &dir,
        r#"{"rules":[{"rule_type":"IsEquivalent","inputs":{"x":[2,4]}}]}"#,
    );
    let out = dir.path().join("reports").join("result.json");

    ratio()
        .args(["classify", "--answer", "1:2", "--json", "--rules"])
        .arg(&rules)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        concat!(
            r#"{"answer":"1:2","matched":{"index":0,"input":"2:4","rule_type":"IsEquivalent"},"#,
            r#""outcomes":[{"hit":true,"index":0,"input":"2:4","rule_type":"IsEquivalent"}],"#,
            r#""rule_set_id":null}"#
        )
    );
}

#[test]
fn classify_config_and_io_errors() {
    let dir = tempfile::tempdir().unwrap();

    let bad = write_rules(&dir, r#"{"rules":[{"rule_type":"Equals","inputs":{"x":"1::2"}}]}"#);
    ratio()
        .args(["classify", "--answer", "1:2", "--rules"])
        .arg(&bad)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("/rules/0/inputs/x"));

    ratio()
        .args(["classify", "--answer", "1:2", "--rules"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(4);
}

#[test]
fn remote_paths_are_refused() {
    ratio()
        .args(["classify", "--answer", "1:2", "--rules", "https://example.org/rules.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be local"));
}
