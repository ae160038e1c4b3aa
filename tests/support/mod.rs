use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for notectx with no inherited vault, focus, or config
pub fn notectx() -> Command {
    let mut cmd = cargo_bin_cmd!("notectx");
    cmd.env_remove("NOTECTX_VAULT")
        .env_remove("NOTECTX_ACTIVE")
        .env_remove("NOTECTX_LOG")
        .env_remove("RUST_LOG")
        .env("NOTECTX_CONFIG_DIR", "/nonexistent/notectx-config");
    cmd
}

/// Get a Command for notectx pointed at a vault
#[allow(dead_code)]
pub fn notectx_in(vault: &TempDir) -> Command {
    let mut cmd = notectx();
    cmd.arg("--vault").arg(vault.path());
    cmd
}

/// Write a file into a vault, creating parent folders
#[allow(dead_code)]
pub fn write_note(vault: &TempDir, path: &str, content: &str) {
    let target = vault.path().join(path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(target, content).unwrap();
}

/// A small vault with notes, a nested folder, and tagged notes
#[allow(dead_code)]
pub fn setup_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_note(&dir, "Inbox.md", "Quick capture #todo");
    write_note(
        &dir,
        "projects/Alpha.md",
        "---\ntags: [work, rust]\n---\nAlpha plan",
    );
    write_note(&dir, "projects/archive/Beta.md", "Beta notes");
    write_note(&dir, "projects/diagram.png", "not markdown");
    write_note(&dir, "empty/.keep", "");
    write_note(&dir, "Blank.md", "");
    dir
}

/// Write a chat history file and return its path
#[allow(dead_code)]
pub fn write_history(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("history.json");
    fs::write(&path, json).unwrap();
    path
}
