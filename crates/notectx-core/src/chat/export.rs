//! Saving a conversation as a note

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::ChatMessage;
use crate::vault::normalize_path;

const FILE_PREFIX: &str = "Chat-";
const TIMESTAMP_FORMAT: &str = "%Y_%m_%d-%H_%M_%S";

/// Clock used for chat note names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    #[default]
    Local,
    Utc,
}

/// A rendered chat, ready to be written into the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatNote {
    /// Vault-relative path of the note to create
    pub path: String,
    pub content: String,
}

/// Format a timestamp as `YYYY_MM_DD-HH_mm_ss`
pub fn format_date_time(now: DateTime<Utc>, timezone: Timezone) -> String {
    match timezone {
        Timezone::Local => now.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        Timezone::Utc => now.format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Render visible messages as `**sender**: message` paragraphs
pub fn render_chat(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .filter(|m| m.is_visible)
        .map(|m| format!("**{}**: {}", m.sender, m.message))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the note for a conversation, named after the time it was saved
pub fn chat_note(
    messages: &[ChatMessage],
    folder: &str,
    now: DateTime<Utc>,
    timezone: Timezone,
) -> ChatNote {
    let file_name = format!("{FILE_PREFIX}{}.md", format_date_time(now, timezone));
    let folder = normalize_path(folder).unwrap_or_default();
    let path = if folder.is_empty() {
        file_name
    } else {
        format!("{folder}/{file_name}")
    };
    ChatNote {
        path,
        content: render_chat(messages),
    }
}
