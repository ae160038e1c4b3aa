//! Integration tests for `notectx context`

mod support;

use predicates::prelude::*;
use support::{notectx_in, setup_vault};

#[test]
fn test_context_by_note_adds_extension() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--note", "Inbox"])
        .assert()
        .success()
        .stdout("[[Inbox]]\n\nQuick capture #todo\n");
}

#[test]
fn test_context_note_flag_is_trimmed() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--note", "  Inbox "])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[[Inbox]]"));
}

#[test]
fn test_context_note_with_extension() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--note", "projects/archive/Beta.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[[Beta]]"));
}

#[test]
fn test_context_missing_note_notifies() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--note", "Nope"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("notice: No note found."))
        .stderr(predicate::str::contains("error:").not());
}

#[test]
fn test_context_empty_note() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--note", "Blank"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice: No note content found."));
}

#[test]
fn test_context_quiet_suppresses_notice() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["--quiet", "context", "--note", "Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice:").not());
}

#[test]
fn test_context_active_note() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["--active", "projects/archive/Beta.md", "context", "--active-note"])
        .assert()
        .success()
        .stdout("[[Beta]]\n\nBeta notes\n");
}

#[test]
fn test_context_active_note_from_env() {
    let dir = setup_vault();
    notectx_in(&dir)
        .env("NOTECTX_ACTIVE", "Inbox.md")
        .args(["context", "--active-note"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[[Inbox]]"));
}

#[test]
fn test_context_without_active_note() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--active-note"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice: No active note found."));
}

#[test]
fn test_context_folder_aggregates_recursively() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--folder", "projects"])
        .assert()
        .success()
        .stdout(
            "Folder projects\n\n\
             # Alpha.md\n\n---\ntags: [work, rust]\n---\nAlpha plan\n\n\
             # Beta.md\n\nBeta notes\n",
        );
}

#[test]
fn test_context_folder_missing() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--folder", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice: No folder found."));
}

#[test]
fn test_context_folder_without_notes() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--folder", "empty"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice: No folder content found."));
}

#[test]
fn test_context_note_path_is_not_a_folder() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--folder", "Inbox.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No folder found."));
}

#[test]
fn test_context_tag_from_frontmatter() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--tag", "#rust"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#rust\n\n# Alpha.md\n\n"));
}

#[test]
fn test_context_tag_inline() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--tag", "todo"])
        .assert()
        .success()
        .stdout("todo\n\n# Inbox.md\n\nQuick capture #todo\n");
}

#[test]
fn test_context_tag_without_match() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--tag", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice: No note found with tag ghost."));
}

#[test]
fn test_context_blank_tag_needs_search_key() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--tag", " "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notice: Please provide a tag"));
}

#[test]
fn test_context_selection_literal() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--selection", "some highlighted text"])
        .assert()
        .success()
        .stdout("Selection\n\nsome highlighted text\n");
}

#[test]
fn test_context_selection_from_stdin() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--selection", "-"])
        .write_stdin("piped text")
        .assert()
        .success()
        .stdout("Selection\n\npiped text\n");
}

#[test]
fn test_context_empty_selection() {
    let dir = setup_vault();
    notectx_in(&dir)
        .args(["context", "--selection", "-"])
        .write_stdin("")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "notice: Please select some text to rewrite.",
        ));
}

#[test]
fn test_context_json_output() {
    let dir = setup_vault();
    let output = notectx_in(&dir)
        .args(["--format", "json", "context", "--note", "Inbox"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "[[Inbox]]");
    assert_eq!(json["content"], "Quick capture #todo");
}
