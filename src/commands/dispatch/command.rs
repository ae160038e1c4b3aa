//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use notectx_core::config::Settings;
use notectx_core::error::Result;
use notectx_core::notify::StderrNotifier;
use notectx_core::vault::FsVault;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub vault_root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, vault_root: &'a PathBuf, start: Instant) -> Self {
        Self {
            cli,
            vault_root,
            start,
        }
    }

    /// Open the vault, focusing the note named by --active
    pub fn open_vault(&self) -> Result<FsVault> {
        let vault = FsVault::open(self.vault_root)?;
        Ok(match &self.cli.active {
            Some(active) => vault.with_active(active),
            None => vault,
        })
    }

    pub fn settings(&self) -> Result<Settings> {
        Settings::discover(self.vault_root, self.cli.config.as_deref())
    }

    /// Notices go to stderr unless output is JSON, where the error envelope
    /// carries the same message.
    pub fn notifier(&self) -> StderrNotifier {
        StderrNotifier::new(self.cli.quiet || self.cli.format == OutputFormat::Json)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notectx {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Note-vault context for language-model chats.");
        println!();
        println!("Run `notectx --help` for usage information.");
        Ok(())
    }
}
