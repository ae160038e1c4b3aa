//! Command implementations for the Commands enum

use tracing::debug;

use super::command::{Command, CommandContext};
use crate::cli::Commands;
use crate::commands;
use notectx_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Context(args) => commands::context::execute(ctx, args),
            Commands::Tags { note } => commands::tags::execute_show(ctx, note),
            Commands::Tagged { tag } => commands::tags::execute_find(ctx, tag),
            Commands::Chain(args) => commands::chain::execute(ctx, args),
            Commands::Window(args) => commands::window::execute(ctx, args),
            Commands::Models => commands::models::execute(ctx),
            Commands::Export(args) => commands::export::execute(ctx, args),
            Commands::Config => commands::config::execute(ctx),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
