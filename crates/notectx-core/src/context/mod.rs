//! Context resolution
//!
//! A [`ContextSelector`] names where supplementary text comes from; the
//! [`ContextResolver`] turns it into a [`ChainContext`] ready to seed a
//! context-aware chain.

pub mod folder;
pub mod resolve;
pub mod tags;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ContextError, NotectxError};

pub use folder::aggregate;
pub use resolve::ContextResolver;
pub use tags::find_by_tag;

/// Text resolved from the vault, plus a label to show in the chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContext {
    /// Display label, e.g. `[[Meeting notes]]` or `Folder projects`
    pub name: String,
    /// Concatenated source text
    pub content: String,
}

/// The kind of context source picked in the UI, without its search key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContextKind {
    #[default]
    #[serde(rename = "activeNote")]
    ActiveNote,
    #[serde(rename = "selection")]
    Selection,
    #[serde(rename = "note")]
    Note,
    #[serde(rename = "folder")]
    Folder,
    #[serde(rename = "tag")]
    Tag,
}

impl ContextKind {
    pub const ALL: [ContextKind; 5] = [
        ContextKind::ActiveNote,
        ContextKind::Selection,
        ContextKind::Note,
        ContextKind::Folder,
        ContextKind::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::ActiveNote => "activeNote",
            ContextKind::Selection => "selection",
            ContextKind::Note => "note",
            ContextKind::Folder => "folder",
            ContextKind::Tag => "tag",
        }
    }

    /// Whether this kind needs a non-empty search key to resolve
    pub fn requires_search_key(&self) -> bool {
        matches!(
            self,
            ContextKind::Note | ContextKind::Folder | ContextKind::Tag
        )
    }
}

impl FromStr for ContextKind {
    type Err = NotectxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContextKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NotectxError::UnknownContextKind(s.to_string()))
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The context picker state: a source kind and the key typed for it.
///
/// Switching to a different kind clears the key, since a note path means
/// nothing as a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSource {
    kind: ContextKind,
    search_key: String,
}

impl ContextSource {
    pub fn new(kind: ContextKind) -> Self {
        ContextSource {
            kind,
            search_key: String::new(),
        }
    }

    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    pub fn set_kind(&mut self, kind: ContextKind) {
        if kind != self.kind {
            self.kind = kind;
            self.search_key.clear();
        }
    }

    pub fn set_search_key(&mut self, key: impl Into<String>) {
        self.search_key = key.into();
    }
}

/// Where to take context from, with exactly the data each source needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextSelector {
    /// The note focused in the host
    ActiveNote,
    /// Text the caller already holds; `None` when nothing could be obtained
    Selection(Option<String>),
    /// A note by vault path; `.md` is appended when missing
    Note(String),
    /// Every markdown note under a folder, recursively
    Folder(String),
    /// Every markdown note carrying a tag
    Tag(String),
}

impl ContextSelector {
    pub fn kind(&self) -> ContextKind {
        match self {
            ContextSelector::ActiveNote => ContextKind::ActiveNote,
            ContextSelector::Selection(_) => ContextKind::Selection,
            ContextSelector::Note(_) => ContextKind::Note,
            ContextSelector::Folder(_) => ContextKind::Folder,
            ContextSelector::Tag(_) => ContextKind::Tag,
        }
    }

    /// Build a selector from UI state: the chosen kind, the search key typed
    /// for it, and the current selection if the caller has one.
    pub fn from_parts(
        kind: ContextKind,
        search_key: &str,
        selection: Option<String>,
    ) -> Result<Self, ContextError> {
        if kind.requires_search_key() && search_key.trim().is_empty() {
            return Err(ContextError::MissingSearchKey {
                kind: kind.to_string(),
            });
        }
        Ok(match kind {
            ContextKind::ActiveNote => ContextSelector::ActiveNote,
            ContextKind::Selection => ContextSelector::Selection(selection),
            ContextKind::Note => ContextSelector::Note(search_key.to_string()),
            ContextKind::Folder => ContextSelector::Folder(search_key.to_string()),
            ContextKind::Tag => ContextSelector::Tag(search_key.to_string()),
        })
    }
}
