//! `notectx models` - the model catalog

use notectx_core::error::Result;
use notectx_core::models::CHAT_MODELS;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Human => {
            let width = CHAT_MODELS
                .iter()
                .map(|m| m.display_name.len())
                .max()
                .unwrap_or(0);
            for model in CHAT_MODELS {
                println!(
                    "{:<width$}  {:<22}  {}",
                    model.display_name, model.id, model.vendor
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = CHAT_MODELS
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "display_name": m.display_name,
                        "id": m.id,
                        "vendor": m.vendor,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
