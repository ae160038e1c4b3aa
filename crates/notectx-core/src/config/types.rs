use serde::{Deserialize, Serialize};

use crate::context::ContextKind;
use crate::models::{ChainType, DEFAULT_MODEL};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_CONTEXT_TURNS: usize = 3;
pub const DEFAULT_CONVERSATION_FOLDER: &str = "copilot-conversations";

/// Settings exactly as found in a config file, before validation.
///
/// Numeric fields are kept as raw TOML values because hand-edited files
/// often quote numbers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSettings {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub temperature: Option<toml::Value>,
    #[serde(default)]
    pub max_tokens: Option<toml::Value>,
    #[serde(default)]
    pub context_turns: Option<toml::Value>,
    #[serde(default)]
    pub default_context: Option<String>,
    #[serde(default)]
    pub conversation_folder: Option<String>,
}

/// Validated chat settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Model id, e.g. `gpt-4`
    pub model: String,
    /// Chain a new conversation starts with
    pub chain: ChainType,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Conversation turns kept as context; each turn is a user message and
    /// a reply
    pub context_turns: usize,
    /// Context source preselected in the UI
    pub default_context: ContextKind,
    /// Vault folder that saved chats are written to
    pub conversation_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model: DEFAULT_MODEL.to_string(),
            chain: ChainType::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            context_turns: DEFAULT_CONTEXT_TURNS,
            default_context: ContextKind::default(),
            conversation_folder: DEFAULT_CONVERSATION_FOLDER.to_string(),
        }
    }
}
