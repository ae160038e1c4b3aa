//! `notectx config` - effective settings

use notectx_core::error::Result;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let settings = ctx.settings()?;
    match ctx.cli.format {
        OutputFormat::Human => print!("{}", settings.to_toml()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
    }
    Ok(())
}
