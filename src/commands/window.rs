//! `notectx window` - trailing chat context

use notectx_core::chat::window;
use notectx_core::error::Result;

use super::dispatch::CommandContext;
use super::history::read_history;
use crate::cli::{OutputFormat, WindowArgs};

pub fn execute(ctx: &CommandContext, args: &WindowArgs) -> Result<()> {
    let history = read_history(&args.history)?;
    let size = match args.size {
        Some(size) => size,
        None => ctx.settings()?.context_turns.saturating_mul(2),
    };

    let windowed = window(&history, size);
    tracing::debug!(size, kept = windowed.len(), total = history.len(), "history windowed");

    match ctx.cli.format {
        OutputFormat::Human => {
            for message in windowed {
                println!("{}: {}", message.sender, message.message);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(windowed)?);
        }
    }
    Ok(())
}
