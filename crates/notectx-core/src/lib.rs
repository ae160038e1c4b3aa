//! Notectx Core Library
//!
//! Resolves context from a markdown note vault for language-model chats:
//! the active note, a selection, a note by path, a folder subtree, or every
//! note carrying a tag. Also windows chat history and renders chats as notes.

pub mod chat;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod vault;
