//! Selector dispatch

use super::folder::{aggregate, note_block, BLOCK_SEPARATOR};
use super::tags::find_by_tag;
use super::{ChainContext, ContextSelector};
use crate::error::ContextError;
use crate::notify::Notifier;
use crate::vault::{file_content, FileRef, Node, Vault, MARKDOWN_EXTENSION};

/// Display name used for selection context
pub const SELECTION_NAME: &str = "Selection";

/// Resolves selectors against an injected vault, reporting failures through
/// an injected notifier.
pub struct ContextResolver<'a, V: ?Sized, N: ?Sized> {
    vault: &'a V,
    notifier: &'a N,
}

impl<'a, V, N> ContextResolver<'a, V, N>
where
    V: Vault + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(vault: &'a V, notifier: &'a N) -> Self {
        ContextResolver { vault, notifier }
    }

    pub fn vault(&self) -> &'a V {
        self.vault
    }

    pub fn notifier(&self) -> &'a N {
        self.notifier
    }

    /// Resolve a selector, or notify the user once and return `None`.
    #[tracing::instrument(skip(self), fields(kind = %selector.kind()))]
    pub fn resolve(&self, selector: &ContextSelector) -> Option<ChainContext> {
        match self.try_resolve(selector) {
            Ok(context) => {
                tracing::debug!(
                    name = %context.name,
                    bytes = context.content.len(),
                    "context resolved"
                );
                Some(context)
            }
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Report a failure the way `resolve` does
    pub fn report(&self, err: &ContextError) {
        if err.log_as_error() {
            tracing::error!(failure = err.kind().as_str(), "{}", err);
        } else {
            tracing::debug!(failure = err.kind().as_str(), "{}", err);
        }
        self.notifier.notify(&err.to_string());
    }

    /// Resolve a selector without notifying
    pub fn try_resolve(&self, selector: &ContextSelector) -> Result<ChainContext, ContextError> {
        match selector {
            ContextSelector::ActiveNote => self.active_note(),
            ContextSelector::Selection(text) => selection(text.as_deref()),
            ContextSelector::Note(path) => self.note(path),
            ContextSelector::Folder(path) => self.folder(path),
            ContextSelector::Tag(tag) => self.tag(tag),
        }
    }

    fn active_note(&self) -> Result<ChainContext, ContextError> {
        let file = self.vault.active_file().ok_or(ContextError::NoActiveNote)?;
        self.note_context(&file)
    }

    fn note(&self, path: &str) -> Result<ChainContext, ContextError> {
        let path = with_markdown_extension(path);
        match self.vault.node(&path) {
            Some(Node::File(file)) => self.note_context(&file),
            _ => Err(ContextError::NoteNotFound { path }),
        }
    }

    fn note_context(&self, file: &FileRef) -> Result<ChainContext, ContextError> {
        let content = file_content(self.vault, file)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ContextError::NoteEmpty {
                path: file.path().to_string(),
            })?;
        Ok(ChainContext {
            name: format!("[[{}]]", file.basename()),
            content,
        })
    }

    fn folder(&self, path: &str) -> Result<ChainContext, ContextError> {
        let folder = match self.vault.node(path) {
            Some(Node::Folder(folder)) => folder,
            _ => {
                return Err(ContextError::FolderNotFound {
                    path: path.to_string(),
                })
            }
        };
        let content = aggregate(self.vault, &folder).ok_or_else(|| ContextError::FolderEmpty {
            path: path.to_string(),
        })?;
        Ok(ChainContext {
            name: format!("Folder {}", folder.name()),
            content,
        })
    }

    fn tag(&self, tag: &str) -> Result<ChainContext, ContextError> {
        let files = find_by_tag(self.vault, tag);
        if files.is_empty() {
            return Err(ContextError::NoTagMatch {
                tag: tag.to_string(),
            });
        }
        let content = files
            .iter()
            .map(|file| note_block(file, &file_content(self.vault, file).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR);
        Ok(ChainContext {
            name: tag.to_string(),
            content,
        })
    }
}

fn selection(text: Option<&str>) -> Result<ChainContext, ContextError> {
    let text = text.ok_or(ContextError::NoSelection)?;
    if text.is_empty() {
        return Err(ContextError::EmptySelection);
    }
    Ok(ChainContext {
        name: SELECTION_NAME.to_string(),
        content: text.to_string(),
    })
}

/// Append `.md` unless the path already ends with it
pub fn with_markdown_extension(path: &str) -> String {
    let suffix = format!(".{MARKDOWN_EXTENSION}");
    if path.ends_with(&suffix) {
        path.to_string()
    } else {
        format!("{path}{suffix}")
    }
}
