//! Chat settings
//!
//! Settings live in `<vault>/.notectx/config.toml`, falling back to
//! `~/.config/notectx/config.toml`. Files are parsed into [`RawSettings`]
//! and validated once into [`Settings`]; nothing downstream re-coerces.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotectxError, Result};
use crate::models::{find_model, ChatModel};

pub use types::{
    RawSettings, Settings, DEFAULT_CONTEXT_TURNS, DEFAULT_CONVERSATION_FOLDER,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};

/// Hidden per-vault directory
pub const VAULT_CONFIG_DIR: &str = ".notectx";
const CONFIG_DIR: &str = "notectx";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NOTECTX_CONFIG_DIR";

impl Settings {
    /// Validate raw settings.
    ///
    /// Unparseable numbers fall back to their defaults with a warning.
    /// Unknown models, chains, and context kinds are errors.
    pub fn from_raw(raw: RawSettings) -> Result<Self> {
        let defaults = Settings::default();

        let model = match raw.model {
            Some(name) => find_model(&name)?.id.to_string(),
            None => defaults.model,
        };
        let chain = match raw.chain {
            Some(chain) => chain.parse()?,
            None => defaults.chain,
        };
        let default_context = match raw.default_context {
            Some(kind) => kind.parse()?,
            None => defaults.default_context,
        };

        Ok(Settings {
            model,
            chain,
            temperature: coerce_float("temperature", raw.temperature.as_ref())
                .unwrap_or(defaults.temperature),
            max_tokens: coerce_count("max_tokens", raw.max_tokens.as_ref())
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(defaults.max_tokens),
            context_turns: coerce_count("context_turns", raw.context_turns.as_ref())
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(defaults.context_turns),
            default_context,
            conversation_folder: raw
                .conversation_folder
                .unwrap_or(defaults.conversation_folder),
        })
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawSettings = toml::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NotectxError::io_operation("read config", path.display(), e))?;
        Self::parse(&content)
    }

    /// Locate and load settings for a vault.
    ///
    /// An explicit path must exist. Otherwise the vault's own config wins
    /// over the global one, and defaults apply when neither exists.
    pub fn discover(vault_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let vault_config = vault_root.join(VAULT_CONFIG_DIR).join(CONFIG_FILE);
        if vault_config.is_file() {
            tracing::debug!(path = %vault_config.display(), "using vault config");
            return Self::load(&vault_config);
        }

        if let Some(global) = global_config_path().filter(|p| p.is_file()) {
            tracing::debug!(path = %global.display(), "using global config");
            return Self::load(&global);
        }

        Ok(Settings::default())
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render settings in config file form
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NotectxError::Other(format!("failed to serialize config: {}", e)))
    }

    /// The configured model's catalog entry
    pub fn chat_model(&self) -> Result<&'static ChatModel> {
        find_model(&self.model)
    }
}

fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}

fn coerce_float(field: &str, value: Option<&toml::Value>) -> Option<f64> {
    let parsed = match value? {
        toml::Value::Float(f) => Some(*f),
        toml::Value::Integer(i) => Some(*i as f64),
        toml::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite());

    if parsed.is_none() {
        tracing::warn!(field, "invalid number in settings, using default");
    }
    parsed
}

fn coerce_count(field: &str, value: Option<&toml::Value>) -> Option<u64> {
    let parsed = match value? {
        toml::Value::Integer(i) => u64::try_from(*i).ok(),
        toml::Value::Float(f) if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 => {
            Some(*f as u64)
        }
        toml::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    if parsed.is_none() {
        tracing::warn!(field, "invalid count in settings, using default");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextKind;
    use crate::models::ChainType;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.chain, ChainType::LlmChain);
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.max_tokens, 1000);
        assert_eq!(settings.context_turns, 3);
        assert_eq!(settings.default_context, ContextKind::ActiveNote);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_quoted_numbers_are_accepted() {
        let settings =
            Settings::parse("temperature = \"0.2\"\nmax_tokens = \"256\"\ncontext_turns = \"5\"\n")
                .unwrap();
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.max_tokens, 256);
        assert_eq!(settings.context_turns, 5);
    }

    #[test]
    fn test_garbage_numbers_fall_back() {
        let settings = Settings::parse(
            "temperature = \"warm\"\nmax_tokens = -4\ncontext_turns = \"NaN\"\n",
        )
        .unwrap();
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(settings.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(settings.context_turns, DEFAULT_CONTEXT_TURNS);
    }

    #[test]
    fn test_nan_temperature_falls_back() {
        let settings = Settings::parse("temperature = \"NaN\"\n").unwrap();
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_model_by_display_name_is_stored_as_id() {
        let settings = Settings::parse("model = \"GPT-4\"\n").unwrap();
        assert_eq!(settings.model, "gpt-4");
        assert_eq!(settings.chat_model().unwrap().display_name, "GPT-4");
    }

    #[test]
    fn test_unknown_enums_are_errors() {
        assert!(Settings::parse("model = \"llama\"\n").is_err());
        assert!(Settings::parse("chain = \"summarize\"\n").is_err());
        assert!(Settings::parse("default_context = \"web\"\n").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let settings = Settings {
            chain: ChainType::RetrievalQa,
            default_context: ContextKind::Folder,
            context_turns: 8,
            ..Default::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_discover_prefers_vault_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(VAULT_CONFIG_DIR).join(CONFIG_FILE);
        Settings {
            max_tokens: 42,
            ..Default::default()
        }
        .save(&path)
        .unwrap();

        let settings = Settings::discover(dir.path(), None).unwrap();
        assert_eq!(settings.max_tokens, 42);
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let dir = tempdir().unwrap();
        assert!(Settings::discover(dir.path(), Some(&dir.path().join("nope.toml"))).is_err());
    }
}
