//! Vault root discovery for CLI commands

use std::env;
use std::path::{Path, PathBuf};

use notectx_core::config::VAULT_CONFIG_DIR;

/// Directories whose presence marks a vault root
const VAULT_MARKERS: [&str; 2] = [VAULT_CONFIG_DIR, ".obsidian"];

/// Resolve the vault root.
///
/// An explicit `--vault` wins. Otherwise the nearest ancestor of the working
/// directory holding a vault marker is used, and failing that the working
/// directory itself.
pub fn resolve_vault_path(vault: Option<PathBuf>) -> PathBuf {
    if let Some(explicit) = vault {
        return explicit;
    }
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_vault(&cwd).unwrap_or(cwd)
}

/// Walk up from `start` to the first directory containing a vault marker
pub fn discover_vault(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| VAULT_MARKERS.iter().any(|marker| dir.join(marker).is_dir()))
        .map(Path::to_path_buf)
}
