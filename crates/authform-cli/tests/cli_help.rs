use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("authform")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_check_help_shows_fields() {
    cargo_bin_cmd!("authform")
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--username"))
        .stdout(predicate::str::contains("--confirm-password"))
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("authform")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
