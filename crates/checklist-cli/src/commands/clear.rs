use std::path::Path;

use checklist_core::Outcome;

use crate::commands::common::open_manager;
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_clear(store_path: &Path, interaction: TerminalInteraction) -> Result<(), CliError> {
    let mut manager = open_manager(store_path, interaction)?;
    let removed = manager.list().len();

    match manager.delete_all()? {
        Outcome::Applied => println!("Deleted {removed} notes"),
        Outcome::Cancelled => println!("Cancelled"),
        Outcome::Rejected => return Err(CliError::Rejected("Nothing was deleted")),
        Outcome::Unchanged => {}
    }
    Ok(())
}
