//! Error types and exit codes for notectx
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing vault, no context resolved, invalid history)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the notectx binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing vault, unresolved context (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Broad classification of a context resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The selector resolved to nothing
    NotFound,
    /// The selector resolved to a node with no usable content
    Empty,
    /// The source could not be obtained at all (no selection)
    Unavailable,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NotFound => "not_found",
            FailureKind::Empty => "empty",
            FailureKind::Unavailable => "unavailable",
        }
    }
}

/// Expected failures while resolving a context selector.
///
/// The display text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("No active note found.")]
    NoActiveNote,

    #[error("No note found.")]
    NoteNotFound { path: String },

    #[error("No note content found.")]
    NoteEmpty { path: String },

    #[error("No folder found.")]
    FolderNotFound { path: String },

    #[error("No folder content found.")]
    FolderEmpty { path: String },

    #[error("No note found with tag {tag}.")]
    NoTagMatch { tag: String },

    #[error("No active editor found.")]
    NoSelection,

    #[error("Please select some text to rewrite.")]
    EmptySelection,

    #[error("Please provide a {kind}")]
    MissingSearchKey { kind: String },
}

impl ContextError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ContextError::NoActiveNote
            | ContextError::NoteNotFound { .. }
            | ContextError::FolderNotFound { .. }
            | ContextError::NoTagMatch { .. }
            | ContextError::MissingSearchKey { .. } => FailureKind::NotFound,
            ContextError::NoteEmpty { .. }
            | ContextError::FolderEmpty { .. }
            | ContextError::EmptySelection => FailureKind::Empty,
            ContextError::NoSelection => FailureKind::Unavailable,
        }
    }

    /// Whether the failure is worth an error-level log line in addition to
    /// the user notification. An empty selection is a user slip, not a fault.
    pub fn log_as_error(&self) -> bool {
        !matches!(self, ContextError::EmptySelection)
    }
}

/// Errors that can occur during notectx operations
#[derive(Error, Debug)]
pub enum NotectxError {
    // Usage errors (exit code 2)
    #[error("unknown chain type: {0}")]
    UnknownChainType(String),

    #[error("unknown context type: {0}")]
    UnknownContextKind(String),

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{0}")]
    Context(#[from] ContextError),

    #[error("No context found.")]
    NoContext,

    #[error("invalid chat history: {reason}")]
    InvalidHistory { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl NotectxError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NotectxError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotectxError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NotectxError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotectxError::UnknownChainType(_)
            | NotectxError::UnknownContextKind(_)
            | NotectxError::UnknownModel(_)
            | NotectxError::InvalidValue { .. } => ExitCode::Usage,

            NotectxError::VaultNotFound { .. }
            | NotectxError::NotFound { .. }
            | NotectxError::Context(_)
            | NotectxError::NoContext
            | NotectxError::InvalidHistory { .. } => ExitCode::Data,

            NotectxError::Io(_)
            | NotectxError::Json(_)
            | NotectxError::Toml(_)
            | NotectxError::FailedOperationWithTarget { .. }
            | NotectxError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NotectxError::UnknownChainType(_) => "unknown_chain_type",
            NotectxError::UnknownContextKind(_) => "unknown_context_kind",
            NotectxError::UnknownModel(_) => "unknown_model",
            NotectxError::InvalidValue { .. } => "invalid_value",
            NotectxError::VaultNotFound { .. } => "vault_not_found",
            NotectxError::NotFound { .. } => "not_found",
            NotectxError::Context(_) => "context_unresolved",
            NotectxError::NoContext => "no_context",
            NotectxError::InvalidHistory { .. } => "invalid_history",
            NotectxError::Io(_) => "io_error",
            NotectxError::Json(_) => "json_error",
            NotectxError::Toml(_) => "toml_error",
            NotectxError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NotectxError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let NotectxError::Context(err) = self {
            error_obj["failure"] = serde_json::json!(err.kind().as_str());
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for notectx operations
pub type Result<T> = std::result::Result<T, NotectxError>;
