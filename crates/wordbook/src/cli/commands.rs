//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Handlers call the API facade and print what `render` makes of the result.

use super::render::{render_entries_full, render_list, render_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbookapp::commands::{CmdMessage, CmdResult};
use wordbookapp::error::Result;
use wordbookapp::init::{initialize, WordbookContext};

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    let command = cli.command.unwrap_or(Commands::List);

    // `reload` reports storage problems itself
    if command != Commands::Reload {
        if let Some(warning) = &ctx.startup_warning {
            print!("{}", render_messages(&[CmdMessage::warning(warning.to_string())]));
        }
    }

    match command {
        Commands::Lookup { word, save } => handle_lookup(&mut ctx, &word, save).await,
        Commands::Save { word } => handle_lookup(&mut ctx, &word, true).await,
        Commands::List => handle_list(&ctx),
        Commands::Show { word } => handle_show(&ctx, &word),
        Commands::Rename { old, new } => handle_rename(&mut ctx, &old, &new),
        Commands::Remove { word } => handle_remove(&mut ctx, &word),
        Commands::Reload => handle_reload(&mut ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

async fn handle_lookup(ctx: &mut WordbookContext, word: &str, save: bool) -> Result<()> {
    let result = if save {
        ctx.api.save(word).await?
    } else {
        ctx.api.lookup(word).await?
    };
    print_full(&result);
    Ok(())
}

fn handle_list(ctx: &WordbookContext) -> Result<()> {
    let result = ctx.api.list()?;
    print!("{}", render_list(&result.listed_entries));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_show(ctx: &WordbookContext, word: &str) -> Result<()> {
    let result = ctx.api.show(word)?;
    print_full(&result);
    Ok(())
}

fn handle_rename(ctx: &mut WordbookContext, old: &str, new: &str) -> Result<()> {
    let result = ctx.api.rename(old, new)?;
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_remove(ctx: &mut WordbookContext, word: &str) -> Result<()> {
    let result = ctx.api.remove(word)?;
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_reload(ctx: &mut WordbookContext) -> Result<()> {
    let result = ctx.api.reload()?;
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn print_full(result: &CmdResult) {
    print!("{}", render_entries_full(&result.listed_entries));
    print!("{}", render_messages(&result.messages));
}
