use std::path::Path;

use checklist_core::Outcome;

use crate::commands::common::{normalize_content, open_manager, resolve_note_number};
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_edit(
    number: usize,
    text_parts: &[String],
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<(), CliError> {
    // Text given on the command line answers the edit prompt; `None` opens the editor.
    let replacement = if text_parts.is_empty() {
        None
    } else {
        Some(normalize_content(&text_parts.join(" ")).unwrap_or_default())
    };

    let mut manager = open_manager(store_path, interaction.with_replacement(replacement))?;
    let id = resolve_note_number(&manager, number)?;

    match manager.edit(&id)? {
        Outcome::Applied | Outcome::Unchanged => println!("{number}"),
        Outcome::Cancelled => println!("Cancelled"),
        Outcome::Rejected => return Err(CliError::Rejected("Edited note text cannot be empty")),
    }
    Ok(())
}
