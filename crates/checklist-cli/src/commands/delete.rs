use std::path::Path;

use checklist_core::Outcome;

use crate::commands::common::{open_manager, resolve_note_number};
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_delete(
    number: usize,
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<(), CliError> {
    let mut manager = open_manager(store_path, interaction)?;
    let id = resolve_note_number(&manager, number)?;

    match manager.delete(&id)? {
        Outcome::Cancelled => println!("Cancelled"),
        _ => println!("{number}"),
    }
    Ok(())
}
