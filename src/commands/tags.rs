//! `notectx tags` and `notectx tagged`

use notectx_core::context::resolve::with_markdown_extension;
use notectx_core::context::tags::{file_tags, find_by_tag};
use notectx_core::error::{NotectxError, Result};
use notectx_core::vault::{Node, Vault};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

/// Print every tag on a note, frontmatter tags first
pub fn execute_show(ctx: &CommandContext, note: &str) -> Result<()> {
    let vault = ctx.open_vault()?;
    let path = with_markdown_extension(note);
    let file = match vault.node(&path) {
        Some(Node::File(file)) => file,
        _ => return Err(NotectxError::not_found("note", &path)),
    };

    let tags = file_tags(&vault, &file);
    match ctx.cli.format {
        OutputFormat::Human => {
            for tag in &tags {
                println!("{tag}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": file.path(),
                "tags": tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Print the vault path of every note carrying a tag. No match prints
/// nothing and still succeeds.
pub fn execute_find(ctx: &CommandContext, tag: &str) -> Result<()> {
    let vault = ctx.open_vault()?;
    let files = find_by_tag(&vault, tag);

    match ctx.cli.format {
        OutputFormat::Human => {
            for file in &files {
                println!("{}", file.path());
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = files
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "path": f.path(),
                        "name": f.basename(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
