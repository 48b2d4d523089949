//! Checklist CLI - a small to-do list from the command line
//!
//! Each invocation loads the list, handles one command, saves, and exits.

mod cli;
mod commands;
mod error;
mod interaction;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::clear::run_clear;
use crate::commands::common::resolve_store_path;
use crate::commands::complete::run_complete;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "checklist=warn".parse() {
        env_filter = env_filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store_path = resolve_store_path(cli.store);
    let interaction = TerminalInteraction::new(cli.yes);

    match cli.command {
        Some(Commands::Add { due, text }) => {
            run_add(&text, due.as_deref(), &store_path, interaction)?;
        }
        Some(Commands::List { status, json }) => {
            run_list(status.into(), json, &store_path, interaction)?;
        }
        Some(Commands::Edit { number, text }) => {
            run_edit(number, &text, &store_path, interaction)?;
        }
        Some(Commands::Complete { number }) => run_complete(number, &store_path, interaction)?,
        Some(Commands::Delete { number }) => run_delete(number, &store_path, interaction)?,
        Some(Commands::Clear) => run_clear(&store_path, interaction)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &store_path, interaction)?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: checklist "buy milk"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.note, None, &store_path, interaction)?;
            }
        }
    }

    Ok(())
}
