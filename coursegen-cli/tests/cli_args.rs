use assert_cmd::Command;
use predicates::prelude::*;

fn coursegen() -> Command {
    Command::cargo_bin("coursegen").expect("binary builds")
}

#[test]
fn help_lists_all_subcommands() {
    coursegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("courses"))
        .stdout(predicate::str::contains("assignments"))
        .stdout(predicate::str::contains("create"));
}

#[test]
fn create_requires_a_course_id() {
    coursegen().arg("create").assert().failure();
}

#[test]
fn create_rejects_an_unknown_language() {
    coursegen()
        .args(["create", "12345", "--language", "ruby"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn assignments_rejects_a_non_numeric_course_id() {
    coursegen().args(["assignments", "abc"]).assert().failure();
}
