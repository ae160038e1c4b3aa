//! Command dispatch logic for notectx

use std::time::Instant;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;
use notectx_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, NoCommand};
pub use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let vault_root = resolve_vault_path(cli.vault.clone());

    debug!(elapsed = ?start.elapsed(), vault = %vault_root.display(), "resolve_vault");

    let ctx = CommandContext::new(cli, &vault_root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
