//! `notectx export` - save a chat history as a note

use chrono::Utc;
use notectx_core::chat::{chat_note, Timezone};
use notectx_core::error::{NotectxError, Result};
use notectx_core::vault::normalize_path;

use super::dispatch::CommandContext;
use super::history::read_history;
use crate::cli::{ExportArgs, OutputFormat};

pub fn execute(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
    let history = read_history(&args.history)?;
    let vault = ctx.open_vault()?;
    let requested = match &args.folder {
        Some(folder) => folder.clone(),
        None => ctx.settings()?.conversation_folder,
    };
    let folder = normalize_path(requested.trim())
        .ok_or_else(|| NotectxError::invalid_value("folder", &requested))?;
    let timezone = if args.utc {
        Timezone::Utc
    } else {
        Timezone::Local
    };

    let note = chat_note(&history, &folder, Utc::now(), timezone);
    let file = vault.write(&note.path, &note.content)?;

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", file.path()),
        OutputFormat::Json => {
            let output = serde_json::json!({ "path": file.path() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
