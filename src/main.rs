//! notectx - note-vault context for language-model chats
//!
//! Resolves the active note, a selection, a note, a folder, or a tag into a
//! single block of text, and windows chat histories for context-aware chains.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use notectx_core::error::{ExitCode as NotectxExitCode, NotectxError};
use notectx_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(NotectxExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet && !already_notified(&e) {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Resolution failures have been shown as a notice already
fn already_notified(err: &NotectxError) -> bool {
    matches!(err, NotectxError::Context(_) | NotectxError::NoContext)
}
