//! Reading chat histories from files or stdin

use std::fs;
use std::io::{self, Read};

use notectx_core::chat::ChatMessage;
use notectx_core::error::{NotectxError, Result};

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Read text from a file path, or stdin when the path is `-`
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        read_stdin()
    } else {
        fs::read_to_string(source).map_err(|e| NotectxError::io_operation("read", source, e))
    }
}

/// Parse a JSON array of chat messages
pub fn parse_history(json: &str) -> Result<Vec<ChatMessage>> {
    serde_json::from_str(json).map_err(|e| NotectxError::InvalidHistory {
        reason: e.to_string(),
    })
}

pub fn read_history(source: &str) -> Result<Vec<ChatMessage>> {
    let history = parse_history(&read_source(source)?)?;
    tracing::debug!(messages = history.len(), source, "history loaded");
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notectx_core::chat::Sender;

    #[test]
    fn test_parse_history() {
        let history = parse_history(
            r#"[
                {"sender": "user", "message": "q"},
                {"sender": "ai", "message": "a", "isVisible": false}
            ]"#,
        )
        .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].sender, Sender::Ai);
        assert!(!history[1].is_visible);
    }

    #[test]
    fn test_parse_history_rejects_unknown_sender() {
        let err = parse_history(r#"[{"sender": "bot", "message": "q"}]"#).unwrap_err();
        assert!(matches!(err, NotectxError::InvalidHistory { .. }));
    }
}
