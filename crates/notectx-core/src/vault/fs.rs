//! Vault backed by a directory on disk

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{
    join_path, normalize_path, parent_path, FileMetadata, FileRef, FolderRef, Node, Vault,
    MARKDOWN_EXTENSION,
};
use crate::error::{NotectxError, Result};

/// A vault rooted at a directory.
///
/// Hidden entries (names starting with `.`) are invisible, which keeps
/// `.notectx/` and editor state directories out of every listing. Folder
/// children are listed in file-name order.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
    active: Option<String>,
}

impl FsVault {
    /// Open an existing directory as a vault
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(NotectxError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(FsVault {
            root: root.to_path_buf(),
            active: None,
        })
    }

    /// Mark a note as the one focused in the host
    pub fn with_active(mut self, path: &str) -> Self {
        self.active = normalize_path(path);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, vault_path: &str) -> Option<PathBuf> {
        let normalized = normalize_path(vault_path)?;
        if normalized.split('/').any(is_hidden_name) {
            return None;
        }
        if normalized.is_empty() {
            return Some(self.root.clone());
        }
        Some(self.root.join(normalized))
    }

    fn vault_path(&self, absolute: &Path) -> Option<String> {
        let relative = absolute.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    /// Create a new note. Missing parent folders are created; an existing
    /// file at the same path is an error.
    #[tracing::instrument(skip(self, content))]
    pub fn write(&self, vault_path: &str, content: &str) -> Result<FileRef> {
        let normalized = normalize_path(vault_path)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| NotectxError::invalid_value("note path", vault_path))?;
        let target = self
            .absolute(&normalized)
            .ok_or_else(|| NotectxError::invalid_value("note path", vault_path))?;

        if target.exists() {
            return Err(NotectxError::io_operation(
                "create",
                &normalized,
                "file already exists",
            ));
        }

        let parent = self.root.join(parent_path(&normalized));
        fs::create_dir_all(&parent)
            .map_err(|e| NotectxError::io_operation("create folder", parent.display(), e))?;
        fs::write(&target, content)
            .map_err(|e| NotectxError::io_operation("write", &normalized, e))?;

        tracing::debug!(path = %normalized, bytes = content.len(), "note written");
        Ok(FileRef::new(normalized))
    }
}

fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Symlinks to files count as files. Symlinked folders are never entered,
/// since a link back to an ancestor would repeat its notes forever.
fn is_linked_file(path: &Path, file_type: fs::FileType) -> bool {
    file_type.is_symlink() && path.is_file()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && is_hidden_name(&entry.file_name().to_string_lossy())
}

impl Vault for FsVault {
    fn node(&self, path: &str) -> Option<Node> {
        let normalized = normalize_path(path)?;
        let absolute = self.absolute(&normalized)?;
        let meta = fs::metadata(&absolute).ok()?;
        if meta.is_dir() {
            Some(Node::Folder(FolderRef::new(normalized)))
        } else if meta.is_file() && !normalized.is_empty() {
            Some(Node::File(FileRef::new(normalized)))
        } else {
            None
        }
    }

    fn children(&self, folder: &FolderRef) -> Vec<Node> {
        let Some(dir) = self.absolute(folder.path()) else {
            return Vec::new();
        };
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = folder.path(), error = %e, "cannot list folder");
                return Vec::new();
            }
        };

        let mut named: Vec<(String, PathBuf, fs::FileType)> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let file_type = e.file_type().ok()?;
                Some((e.file_name().to_string_lossy().into_owned(), e.path(), file_type))
            })
            .filter(|(name, _, _)| !is_hidden_name(name))
            .collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));

        named
            .into_iter()
            .filter_map(|(name, path, file_type)| {
                let child = join_path(folder.path(), &name);
                if file_type.is_dir() {
                    Some(Node::Folder(FolderRef::new(child)))
                } else if file_type.is_file() || is_linked_file(&path, file_type) {
                    Some(Node::File(FileRef::new(child)))
                } else {
                    None
                }
            })
            .collect()
    }

    fn read(&self, file: &FileRef) -> Result<String> {
        let path = self
            .absolute(file.path())
            .ok_or_else(|| NotectxError::not_found("file", file.path()))?;
        fs::read_to_string(&path).map_err(|e| NotectxError::io_operation("read", file.path(), e))
    }

    fn metadata(&self, file: &FileRef) -> Option<FileMetadata> {
        if !file.is_markdown() {
            return None;
        }
        let content = self.read(file).ok()?;
        Some(FileMetadata::from_content(&content))
    }

    fn markdown_files(&self) -> Vec<FileRef> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() || is_linked_file(e.path(), e.file_type()))
            .filter(|e| e.path().extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION))
            .filter_map(|e| self.vault_path(e.path()))
            .map(FileRef::new)
            .collect()
    }

    fn active_file(&self) -> Option<FileRef> {
        let active = self.active.as_deref()?;
        match self.node(active) {
            Some(Node::File(file)) => Some(file),
            _ => None,
        }
    }
}
