use std::path::Path;

use checklist_core::FilterCriterion;

use crate::commands::common::{
    empty_view_message, format_view_lines, open_manager, row_to_list_item, NoteListItem,
};
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_list(
    filter: FilterCriterion,
    as_json: bool,
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<(), CliError> {
    let mut manager = open_manager(store_path, interaction)?;
    manager.set_filter(filter);
    let view = manager.view();

    if as_json {
        let json_items = view
            .visible_rows()
            .map(row_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if let Some(message) = empty_view_message(view) {
        println!("{message}");
    } else {
        for line in format_view_lines(view) {
            println!("{line}");
        }
    }

    Ok(())
}
