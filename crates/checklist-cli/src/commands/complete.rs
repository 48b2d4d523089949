use std::path::Path;

use checklist_core::Outcome;

use crate::commands::common::{open_manager, resolve_note_number};
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_complete(
    number: usize,
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<(), CliError> {
    let mut manager = open_manager(store_path, interaction)?;
    let id = resolve_note_number(&manager, number)?;

    if manager.complete(&id)? == Outcome::Unchanged {
        println!("#{number} is already complete");
    } else {
        println!("{number}");
    }
    Ok(())
}
