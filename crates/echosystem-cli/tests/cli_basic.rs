//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway HOME so the
//! data directory never touches the real one.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with an isolated home directory. CARGO_HOME and
/// RUSTUP_HOME keep pointing at the real toolchain so the spawned cargo
/// does not re-resolve anything under the throwaway HOME.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let real_home = std::env::var("HOME").unwrap_or_default();
    let cargo_home =
        std::env::var("CARGO_HOME").unwrap_or_else(|_| format!("{real_home}/.cargo"));
    let rustup_home =
        std::env::var("RUSTUP_HOME").unwrap_or_else(|_| format!("{real_home}/.rustup"));

    let output = Command::new("cargo")
        .args(["run", "-p", "echosystem-cli", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .env("CARGO_HOME", cargo_home)
        .env("RUSTUP_HOME", rustup_home)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn guest_gold_flow() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["wallet", "add-gold", "3"]);
    assert_eq!(code, 0, "add-gold failed: {stdout}");
    assert!(stdout.contains("gold: 3"));

    let (stdout, _, code) = run_cli(home.path(), &["wallet", "redeem"]);
    assert_eq!(code, 0, "redeem failed: {stdout}");
    assert!(stdout.contains("gold: 8"));

    let (stdout, _, code) = run_cli(home.path(), &["wallet", "redeem"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already redeemed today"));
}

#[test]
fn task_toggle_flow() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["task", "add", "E2E task"]);
    assert_eq!(code, 0, "task add failed: {stdout}");
    let id = stdout
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("Task created: "))
        .expect("task id in output")
        .to_string();

    let (stdout, _, code) = run_cli(home.path(), &["task", "toggle", &id]);
    assert_eq!(code, 0, "toggle failed: {stdout}");
    assert!(stdout.contains("Completed: E2E task"));

    let (stdout, _, code) = run_cli(home.path(), &["resonance", "log"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Completed: E2E task"));
    assert!(stdout.contains("Planned: E2E task"));
}

#[test]
fn overspend_fails_with_nonzero_exit() {
    let home = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["wallet", "spend", "5"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("insufficient coins"));
}

#[test]
fn unknown_task_toggle_fails() {
    let home = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["task", "toggle", "missing-id"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Task not found"));
}
