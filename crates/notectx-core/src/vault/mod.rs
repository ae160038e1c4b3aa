//! Host facade over a note vault
//!
//! Every component that reads notes takes a [`Vault`] explicitly. Paths are
//! vault-relative, `/`-separated, and the vault root is the empty path.

pub mod frontmatter;
pub mod fs;
pub mod memory;

use serde::Serialize;

use crate::error::Result;

pub use fs::FsVault;
pub use memory::MemoryVault;

/// Extension of notes that contribute text content
pub const MARKDOWN_EXTENSION: &str = "md";

/// A file in the vault
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileRef {
    path: String,
}

impl FileRef {
    pub fn new(path: impl Into<String>) -> Self {
        FileRef { path: path.into() }
    }

    /// Vault-relative path, e.g. `projects/alpha.md`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path segment including extension, e.g. `alpha.md`
    pub fn name(&self) -> &str {
        last_segment(&self.path)
    }

    /// File name without its extension, e.g. `alpha`
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    /// Extension without the dot, or an empty string
    pub fn extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[idx + 1..],
            _ => "",
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.extension() == MARKDOWN_EXTENSION
    }
}

/// A folder in the vault
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FolderRef {
    path: String,
}

impl FolderRef {
    pub fn new(path: impl Into<String>) -> Self {
        FolderRef { path: path.into() }
    }

    pub fn root() -> Self {
        FolderRef::new("")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        last_segment(&self.path)
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// A node in the vault tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileRef),
    Folder(FolderRef),
}

impl Node {
    pub fn path(&self) -> &str {
        match self {
            Node::File(file) => file.path(),
            Node::Folder(folder) => folder.path(),
        }
    }
}

/// Cached metadata for a note, as the host indexes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMetadata {
    /// Parsed YAML frontmatter, if the note has any
    pub frontmatter: Option<serde_yaml::Mapping>,
    /// Inline tag annotations exactly as written, including the leading `#`
    pub tags: Vec<String>,
}

impl FileMetadata {
    /// Derive metadata from raw note text.
    pub fn from_content(content: &str) -> Self {
        let (yaml, body) = frontmatter::split_frontmatter(content);
        FileMetadata {
            frontmatter: yaml.and_then(frontmatter::parse_frontmatter),
            tags: frontmatter::inline_tags(body),
        }
    }
}

/// The host application's view of the vault.
///
/// Implementations only expose what is on disk (or in memory); they never
/// notify the user.
pub trait Vault {
    /// Look up a file or folder by exact vault path
    fn node(&self, path: &str) -> Option<Node>;

    /// List the direct children of a folder in the host's native order
    fn children(&self, folder: &FolderRef) -> Vec<Node>;

    /// Read the full text of a file
    fn read(&self, file: &FileRef) -> Result<String>;

    /// Cached frontmatter and inline tags for a note
    fn metadata(&self, file: &FileRef) -> Option<FileMetadata>;

    /// Every markdown file in the vault
    fn markdown_files(&self) -> Vec<FileRef>;

    /// The note currently focused in the host, if any
    fn active_file(&self) -> Option<FileRef>;
}

/// Read a note's text if it is a markdown file the host can read.
///
/// Non-markdown files and read failures both yield `None`.
pub fn file_content<V: Vault + ?Sized>(vault: &V, file: &FileRef) -> Option<String> {
    if !file.is_markdown() {
        return None;
    }
    match vault.read(file) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(path = file.path(), error = %e, "skipping unreadable file");
            None
        }
    }
}

/// Normalize a user-supplied vault path.
///
/// Backslashes become `/`, empty and `.` segments are dropped, and any `..`
/// segment rejects the path. `"/"` and `""` both name the root.
pub fn normalize_path(path: &str) -> Option<String> {
    let path = path.replace('\\', "/");
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Join a folder path and a child name
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Parent folder path of a vault path; the root's parent is the root
pub(crate) fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
