use std::path::Path;

use checklist_core::models::parse_date_input;

use crate::commands::common::{open_manager, resolve_note_text};
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_add(
    text_parts: &[String],
    due: Option<&str>,
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<(), CliError> {
    let due_date = due.map(parse_date_input).transpose()?.flatten();
    let text = resolve_note_text(text_parts)?;

    let mut manager = open_manager(store_path, interaction)?;
    let Some(id) = manager.add(&text, due_date)? else {
        return Err(CliError::Rejected("Note was not added"));
    };

    let number = manager.list().sequence_number(&id).unwrap_or_default();
    println!("{number}");
    Ok(())
}
