//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

fn command_without_env() -> Command {
    let mut cmd = Command::cargo_bin("servicenow-mcp").unwrap();
    for var in [
        "SERVICENOW_INSTANCE_URL",
        "SERVICENOW_AUTH_TYPE",
        "SERVICENOW_USERNAME",
        "SERVICENOW_PASSWORD",
        "SERVICENOW_API_KEY",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("servicenow-mcp").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_doctor_fails_without_configuration() {
    command_without_env()
        .arg("doctor")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("SERVICENOW_INSTANCE_URL"));
}

#[test]
fn test_doctor_passes_with_basic_configuration() {
    command_without_env()
        .arg("doctor")
        .env("SERVICENOW_INSTANCE_URL", "https://dev.service-now.com")
        .env("SERVICENOW_USERNAME", "admin")
        .env("SERVICENOW_PASSWORD", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev.service-now.com"));
}
