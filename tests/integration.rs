use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn skillcheck() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("skillcheck")
}

fn write_skill(root: &Path, dir: &str, description: &str) {
    fs::create_dir_all(root.join(dir)).unwrap();
    fs::write(
        root.join(dir).join("SKILL.md"),
        format!("---\nname: {dir}\ndescription: {description}\n---\n# {dir}\n"),
    )
    .unwrap();
}

#[test]
fn valid_collection_exits_0() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "does a thing");

    skillcheck()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: all SKILL.md files validated."));
}

#[test]
fn no_arguments_validates_current_directory() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "does a thing");

    skillcheck()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: all SKILL.md files validated."));
}

#[test]
fn invalid_collection_exits_1_with_every_error() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "does a thing");
    write_skill(tmp.path(), "beta", &"d".repeat(600));

    skillcheck()
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Skill validation errors detected:"))
        .stdout(predicate::str::contains(
            "- beta/SKILL.md: description too long (600>500)",
        ))
        .stdout(predicate::str::contains("alpha/SKILL.md").not());
}

#[test]
fn fixing_the_error_restores_exit_0() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "does a thing");
    write_skill(tmp.path(), "beta", &"d".repeat(600));
    skillcheck().arg(tmp.path()).assert().code(1);

    write_skill(tmp.path(), "beta", "fixed");
    skillcheck().arg(tmp.path()).assert().success();
}

#[test]
fn nonexistent_path_exits_2() {
    skillcheck()
        .arg("tests/does-not-exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn json_format() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "");

    skillcheck()
        .args(["--format", "json"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("alpha/SKILL.md: missing/empty description"));
}

#[test]
fn sarif_format() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "does a thing");

    skillcheck()
        .args(["--format", "sarif"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""));
}

#[test]
fn output_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    let skills = tmp.path().join("skills");
    fs::create_dir_all(&skills).unwrap();
    write_skill(&skills, "alpha", "");
    let output_file = tmp.path().join("report.json");

    skillcheck()
        .arg(&skills)
        .args(["--format", "json", "--output"])
        .arg(&output_file)
        .assert()
        .code(1);

    let content = fs::read_to_string(&output_file).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Output file should contain valid JSON");
    assert!(!parsed["passed"].as_bool().unwrap());
}

#[test]
fn explicit_config_overrides_limits() {
    let tmp = tempfile::tempdir().unwrap();
    let skills = tmp.path().join("skills");
    fs::create_dir_all(&skills).unwrap();
    write_skill(&skills, "alpha", "twelve chars");
    let config = tmp.path().join("custom.toml");
    fs::write(&config, "[limits]\ndescription = 5\n").unwrap();

    skillcheck()
        .arg(&skills)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("description too long (12>5)"));
}

#[test]
fn default_config_file_is_picked_up() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "twelve chars");
    fs::write(tmp.path().join("skillcheck.toml"), "[limits]\ndescription = 5\n").unwrap();

    skillcheck()
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("description too long (12>5)"));
}

#[test]
fn missing_config_exits_2() {
    let tmp = tempfile::tempdir().unwrap();

    skillcheck()
        .arg(tmp.path())
        .args(["--config", "no-such-config.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_config_exits_2() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("bad.toml");
    fs::write(&config, "[limits\n").unwrap();

    skillcheck()
        .arg(tmp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn list_rules_shows_rules() {
    skillcheck()
        .arg("list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("frontmatter/missing-block"))
        .stdout(predicate::str::contains("reference/escapes-skill-dir"))
        .stdout(predicate::str::contains("collection/duplicate-name"));
}

#[test]
fn explain_known_rule() {
    skillcheck()
        .args(["explain", "field/too-long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("field/too-long"))
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_rule_exits_2() {
    skillcheck()
        .args(["explain", "nonexistent/rule"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule"));
}

#[test]
fn logs_stay_off_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "alpha", "does a thing");

    skillcheck()
        .arg(tmp.path())
        .args(["--log-level", "debug"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("validating").not())
        .stderr(predicate::str::contains("validation finished"));
}
