//! `notectx chain` - switch a chat session's chain

use notectx_core::chat::{ChainSetup, ChatSession};
use notectx_core::context::{ContextResolver, ContextSource};
use notectx_core::error::{NotectxError, Result};
use notectx_core::models::{find_model, ChainType};

use super::dispatch::CommandContext;
use super::history::{read_history, read_stdin};
use crate::cli::{ChainArgs, OutputFormat};

pub fn execute(ctx: &CommandContext, args: &ChainArgs) -> Result<()> {
    let chain: ChainType = args.chain.parse()?;
    let settings = ctx.settings()?;
    let mut source = ContextSource::new(settings.default_context);
    if let Some(kind) = &args.context {
        source.set_kind(kind.parse()?);
    }
    source.set_search_key(args.key.as_str());
    let selection = match args.selection.as_deref() {
        Some("-") => Some(read_stdin()?),
        Some(text) => Some(text.to_string()),
        None => None,
    };

    let mut session = ChatSession::from_settings(&settings)?;
    if let Some(model) = &args.model {
        session.set_model(find_model(model)?);
    }
    if let Some(source) = &args.history {
        for message in read_history(source)? {
            session.add_message(message);
        }
    }

    let vault = ctx.open_vault()?;
    let notifier = ctx.notifier();
    let resolver = ContextResolver::new(&vault, &notifier);

    let setup = session
        .select_chain(
            chain,
            source.kind(),
            source.search_key(),
            selection,
            &resolver,
        )
        .ok_or(NotectxError::NoContext)?;

    print_setup(&setup, &session, ctx.cli.format)
}

fn print_setup(setup: &ChainSetup, session: &ChatSession, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("chain: {}", setup.chain);
            println!("model: {}", session.model().id);
            if let Some(context) = &setup.context {
                println!("context: {}", context.name);
            }
            for message in session.chat_context() {
                println!("{}: {}", message.sender, message.message);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "setup": setup,
                "model": session.model().id,
                "history": session.history(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
