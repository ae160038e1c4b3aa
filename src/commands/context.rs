//! `notectx context` - resolve a context source

use notectx_core::context::{ChainContext, ContextKind, ContextResolver, ContextSelector};
use notectx_core::error::Result;

use super::dispatch::CommandContext;
use super::history::read_stdin;
use crate::cli::{ContextArgs, OutputFormat};

/// The requested source as a kind, a search key, and any selection text
fn source_from_args(args: &ContextArgs) -> Result<(ContextKind, String, Option<String>)> {
    Ok(if let Some(text) = &args.selection {
        let text = if text == "-" {
            read_stdin()?
        } else {
            text.clone()
        };
        (ContextKind::Selection, String::new(), Some(text))
    } else if let Some(path) = &args.note {
        (ContextKind::Note, path.trim().to_string(), None)
    } else if let Some(path) = &args.folder {
        (ContextKind::Folder, path.trim().to_string(), None)
    } else if let Some(tag) = &args.tag {
        (ContextKind::Tag, tag.clone(), None)
    } else {
        (ContextKind::ActiveNote, String::new(), None)
    })
}

pub fn execute(ctx: &CommandContext, args: &ContextArgs) -> Result<()> {
    let vault = ctx.open_vault()?;
    let notifier = ctx.notifier();
    let resolver = ContextResolver::new(&vault, &notifier);

    let (kind, search_key, selection) = source_from_args(args)?;
    let resolved = ContextSelector::from_parts(kind, &search_key, selection)
        .and_then(|selector| resolver.try_resolve(&selector));
    let context = match resolved {
        Ok(context) => context,
        Err(err) => {
            resolver.report(&err);
            return Err(err.into());
        }
    };

    print_context(&context, ctx.cli.format)
}

fn print_context(context: &ChainContext, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", context.name);
            println!();
            println!("{}", context.content);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(context)?);
        }
    }
    Ok(())
}
