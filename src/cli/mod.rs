//! CLI argument parsing for notectx
//!
//! Global flags: --vault, --config, --active, --format, --quiet, --verbose

pub mod args;
pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{ChainArgs, ContextArgs, ExportArgs, WindowArgs};
pub use output::OutputFormat;

/// notectx - note-vault context for language-model chats
#[derive(Parser, Debug)]
#[command(name = "notectx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root directory (defaults to the current directory)
    #[arg(long, global = true, env = "NOTECTX_VAULT")]
    pub vault: Option<PathBuf>,

    /// Explicit settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vault path of the note currently focused in the editor
    #[arg(long, global = true, env = "NOTECTX_ACTIVE")]
    pub active: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress notices and non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a context source and print its name and content
    Context(ContextArgs),

    /// Show every tag on a note
    Tags {
        /// Vault path of the note (`.md` optional)
        note: String,
    },

    /// List notes carrying a tag
    Tagged {
        /// Tag to look for, with or without the leading `#`
        tag: String,
    },

    /// Switch a chat to a chain, resolving context for retrieval QA
    Chain(ChainArgs),

    /// Print the trailing window of a chat history
    Window(WindowArgs),

    /// List known chat models and their vendors
    Models,

    /// Save a chat history as a note in the vault
    Export(ExportArgs),

    /// Show effective settings
    Config,
}
