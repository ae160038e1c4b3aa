//! Chat models, vendors, and chain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotectxError;

/// Which chain a conversation runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChainType {
    /// Plain conversation
    #[default]
    #[serde(rename = "llm_chain")]
    LlmChain,
    /// Question answering over resolved context
    #[serde(rename = "retrieval_qa")]
    RetrievalQa,
}

impl ChainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainType::LlmChain => "llm_chain",
            ChainType::RetrievalQa => "retrieval_qa",
        }
    }
}

impl FromStr for ChainType {
    type Err = NotectxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llm_chain" => Ok(ChainType::LlmChain),
            "retrieval_qa" => Ok(ChainType::RetrievalQa),
            other => Err(NotectxError::UnknownChainType(other.to_string())),
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Openai,
    AzureOpenai,
    Anthropic,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Openai => "openai",
            Vendor::AzureOpenai => "azure_openai",
            Vendor::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A model offered in the chat model picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatModel {
    /// Identifier sent to the vendor API
    pub id: &'static str,
    /// Label shown in the picker
    pub display_name: &'static str,
    pub vendor: Vendor,
}

const fn model(id: &'static str, display_name: &'static str, vendor: Vendor) -> ChatModel {
    ChatModel {
        id,
        display_name,
        vendor,
    }
}

/// Every known model, in picker order
pub const CHAT_MODELS: &[ChatModel] = &[
    model("gpt-3.5-turbo", "GPT-3.5", Vendor::Openai),
    model("gpt-3.5-turbo-16k", "GPT-3.5 16K", Vendor::Openai),
    model("gpt-4", "GPT-4", Vendor::Openai),
    model("gpt-4-32k", "GPT-4 32K", Vendor::Openai),
    model("claude-1", "CLAUDE-1", Vendor::Anthropic),
    model("claude-1-100k", "CLAUDE-1-100K", Vendor::Anthropic),
    model("claude-instant-1", "CLAUDE-INSTANT", Vendor::Anthropic),
    model("claude-instant-1-100k", "CLAUDE-INSTANT-100K", Vendor::Anthropic),
    model("gpt-35-turbo", "AZURE GPT-3.5", Vendor::AzureOpenai),
    model("gpt-35-turbo-16k", "AZURE GPT-3.5-16K", Vendor::AzureOpenai),
    model("gpt-4", "AZURE GPT-4", Vendor::AzureOpenai),
    model("gpt-4-32k", "AZURE GPT-4-32K", Vendor::AzureOpenai),
];

/// Default model for new conversations
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Look a model up by its picker label
pub fn model_by_display_name(display_name: &str) -> Option<&'static ChatModel> {
    CHAT_MODELS.iter().find(|m| m.display_name == display_name)
}

/// Look a model up by API id. Ids shared between vendors resolve to the
/// first vendor listed.
pub fn model_by_id(id: &str) -> Option<&'static ChatModel> {
    CHAT_MODELS.iter().find(|m| m.id == id)
}

/// Resolve either a display name or a model id
pub fn find_model(name: &str) -> Result<&'static ChatModel, NotectxError> {
    model_by_display_name(name)
        .or_else(|| model_by_id(name))
        .ok_or_else(|| NotectxError::UnknownModel(name.to_string()))
}

/// Map a picker label to the model id sent to the vendor
pub fn model_name(display_name: &str) -> Option<&'static str> {
    model_by_display_name(display_name).map(|m| m.id)
}

/// Vendor of a model, by display name
pub fn vendor_for(display_name: &str) -> Option<Vendor> {
    model_by_display_name(display_name).map(|m| m.vendor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_type_parsing() {
        assert_eq!("llm_chain".parse::<ChainType>().unwrap(), ChainType::LlmChain);
        assert_eq!(
            "retrieval_qa".parse::<ChainType>().unwrap(),
            ChainType::RetrievalQa
        );
        let err = "summarize".parse::<ChainType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown chain type: summarize");
    }

    #[test]
    fn test_chain_type_serde_matches_str() {
        assert_eq!(
            serde_json::to_string(&ChainType::RetrievalQa).unwrap(),
            "\"retrieval_qa\""
        );
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(model_name("GPT-4 32K"), Some("gpt-4-32k"));
        assert_eq!(vendor_for("AZURE GPT-4"), Some(Vendor::AzureOpenai));
        assert_eq!(vendor_for("CLAUDE-1"), Some(Vendor::Anthropic));
        assert_eq!(model_name("GPT-5"), None);
    }

    #[test]
    fn test_find_model_accepts_id_or_label() {
        assert_eq!(find_model("GPT-3.5").unwrap().id, "gpt-3.5-turbo");
        assert_eq!(find_model("claude-1-100k").unwrap().display_name, "CLAUDE-1-100K");
        assert!(find_model("llama").is_err());
    }

    #[test]
    fn test_display_names_unique() {
        for (i, a) in CHAT_MODELS.iter().enumerate() {
            for b in &CHAT_MODELS[i + 1..] {
                assert_ne!(a.display_name, b.display_name);
            }
        }
    }

    #[test]
    fn test_default_model_is_known() {
        assert!(model_by_id(DEFAULT_MODEL).is_some());
    }
}
