//! In-memory vault
//!
//! Children keep insertion order, which makes traversal order observable in
//! tests the same way a host's native ordering would be.

use std::collections::HashMap;

use super::{normalize_path, parent_path, FileMetadata, FileRef, FolderRef, Node, Vault};
use crate::error::{NotectxError, Result};

#[derive(Debug, Clone)]
enum Entry {
    File {
        /// `None` marks a file the host cannot read
        content: Option<String>,
        metadata: Option<FileMetadata>,
    },
    Folder,
}

#[derive(Debug, Clone)]
pub struct MemoryVault {
    entries: HashMap<String, Entry>,
    children: HashMap<String, Vec<String>>,
    files: Vec<String>,
    active: Option<String>,
}

impl Default for MemoryVault {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVault {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(String::new(), Entry::Folder);
        MemoryVault {
            entries,
            children: HashMap::new(),
            files: Vec::new(),
            active: None,
        }
    }

    /// Add a readable file, creating parent folders as needed
    pub fn insert_file(&mut self, path: &str, content: impl Into<String>) -> &mut Self {
        self.insert_entry(
            path,
            Entry::File {
                content: Some(content.into()),
                metadata: None,
            },
        )
    }

    /// Add a file whose reads always fail
    pub fn insert_unreadable(&mut self, path: &str) -> &mut Self {
        self.insert_entry(
            path,
            Entry::File {
                content: None,
                metadata: None,
            },
        )
    }

    /// Add an empty folder, creating parent folders as needed
    pub fn insert_folder(&mut self, path: &str) -> &mut Self {
        self.insert_entry(path, Entry::Folder)
    }

    /// Override the cached metadata for a file instead of deriving it from
    /// the content
    pub fn set_metadata(&mut self, path: &str, meta: FileMetadata) -> &mut Self {
        if let Some(Entry::File { metadata, .. }) =
            normalize_path(path).and_then(|p| self.entries.get_mut(&p))
        {
            *metadata = Some(meta);
        }
        self
    }

    pub fn set_active(&mut self, path: Option<&str>) -> &mut Self {
        self.active = path.and_then(normalize_path);
        self
    }

    fn insert_entry(&mut self, path: &str, entry: Entry) -> &mut Self {
        let Some(path) = normalize_path(path).filter(|p| !p.is_empty()) else {
            return self;
        };
        self.ensure_folder(parent_path(&path).to_string());

        if !self.entries.contains_key(&path) {
            self.children
                .entry(parent_path(&path).to_string())
                .or_default()
                .push(path.clone());
            if matches!(entry, Entry::File { .. }) {
                self.files.push(path.clone());
            }
        }
        self.entries.insert(path, entry);
        self
    }

    fn ensure_folder(&mut self, path: String) {
        if self.entries.contains_key(&path) {
            return;
        }
        self.ensure_folder(parent_path(&path).to_string());
        self.children
            .entry(parent_path(&path).to_string())
            .or_default()
            .push(path.clone());
        self.entries.insert(path, Entry::Folder);
    }
}

impl Vault for MemoryVault {
    fn node(&self, path: &str) -> Option<Node> {
        let path = normalize_path(path)?;
        match self.entries.get(&path)? {
            Entry::File { .. } => Some(Node::File(FileRef::new(path))),
            Entry::Folder => Some(Node::Folder(FolderRef::new(path))),
        }
    }

    fn children(&self, folder: &FolderRef) -> Vec<Node> {
        self.children
            .get(folder.path())
            .map(|paths| paths.iter().filter_map(|p| self.node(p)).collect())
            .unwrap_or_default()
    }

    fn read(&self, file: &FileRef) -> Result<String> {
        match self.entries.get(file.path()) {
            Some(Entry::File {
                content: Some(content),
                ..
            }) => Ok(content.clone()),
            Some(Entry::File { content: None, .. }) => Err(NotectxError::io_operation(
                "read",
                file.path(),
                "permission denied",
            )),
            _ => Err(NotectxError::not_found("file", file.path())),
        }
    }

    fn metadata(&self, file: &FileRef) -> Option<FileMetadata> {
        match self.entries.get(file.path())? {
            Entry::File {
                metadata: Some(meta),
                ..
            } => Some(meta.clone()),
            Entry::File {
                content: Some(content),
                metadata: None,
            } if file.is_markdown() => Some(FileMetadata::from_content(content)),
            _ => None,
        }
    }

    fn markdown_files(&self) -> Vec<FileRef> {
        self.files
            .iter()
            .map(FileRef::new)
            .filter(FileRef::is_markdown)
            .collect()
    }

    fn active_file(&self) -> Option<FileRef> {
        match self.node(self.active.as_deref()?)? {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }
}
