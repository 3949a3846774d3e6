//! Binary-level checks of the documented CLI contract.

use assert_cmd::Command;
use predicates::prelude::*;
use scaffold_test_utils::TestParent;

fn scaffold() -> Command {
    Command::cargo_bin("scaffold").unwrap()
}

#[test]
fn valid_tools_exit_zero_and_create_exactly_their_dirs() {
    let parent = TestParent::new();

    scaffold()
        .args(["--name", "demo", "--tools", "claude", "--path"])
        .arg(parent.root())
        .assert()
        .success();

    parent.assert_file_exists("demo/.claude/CLAUDE.md");
    parent.assert_file_exists("demo/README.md");
    parent.assert_file_not_exists("demo/.cursor");
    parent.assert_file_not_exists("demo/.agent");
}

#[test]
fn all_expands_to_every_template_dir() {
    let parent = TestParent::new();

    scaffold()
        .args(["--name", "demo", "--tools", "all", "--path"])
        .arg(parent.root())
        .assert()
        .success();

    parent.assert_file_exists("demo/.claude");
    parent.assert_file_exists("demo/.cursor");
    parent.assert_file_exists("demo/.agent");
}

#[test]
fn bogus_tool_exits_nonzero_and_creates_nothing() {
    let parent = TestParent::new();

    scaffold()
        .args(["--name", "demo", "--tools", "bogus", "--path"])
        .arg(parent.root())
        .assert()
        .failure();

    parent.assert_file_not_exists("demo");
    assert!(parent.entries().is_empty());
}

#[test]
fn existing_target_exits_nonzero_and_changes_nothing() {
    let parent = TestParent::new();
    parent.occupy("demo");

    scaffold()
        .args(["--name", "demo", "--tools", "claude", "--path"])
        .arg(parent.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    parent.assert_file_not_exists("demo/.claude");
    parent.assert_file_not_exists("demo/README.md");
}

#[test]
fn missing_flags_in_non_interactive_mode_print_usage() {
    scaffold()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn shared_agent_dir_appears_once_for_both_tools() {
    let parent = TestParent::new();

    scaffold()
        .args(["--name", "demo", "--tools", "antigravity,gemini", "--path"])
        .arg(parent.root())
        .assert()
        .success();

    parent.assert_file_exists("demo/.agent");
    parent.assert_file_not_exists("demo/.claude");
    parent.assert_file_not_exists("demo/.cursor");
}

#[test]
fn json_summary_is_machine_readable() {
    let parent = TestParent::new();

    let output = scaffold()
        .args(["--name", "demo", "--tools", "claude,cursor", "--json", "--path"])
        .arg(parent.root())
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["tools"][0], "claude");
    assert_eq!(summary["tools"][1], "cursor");
    assert!(summary["files_copied"].as_u64().unwrap() > 0);
    assert_eq!(summary["git_initialized"], false);
}

#[test]
fn git_flag_initializes_repository() {
    let parent = TestParent::new();

    scaffold()
        .args(["--name", "demo", "--tools", "claude", "--git", "--path"])
        .arg(parent.root())
        .assert()
        .success();

    parent.assert_file_exists("demo/.git");
}

#[test]
fn invalid_project_name_is_rejected_before_creation() {
    let parent = TestParent::new();

    scaffold()
        .args(["--name", ".hidden", "--tools", "claude", "--path"])
        .arg(parent.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(parent.entries().is_empty());
}
