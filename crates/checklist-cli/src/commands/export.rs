use std::path::Path;

use checklist_core::export::{self, render_notes_export, suggested_export_file_name};
use chrono::Utc;

use crate::cli::ExportFormat;
use crate::commands::common::open_manager;
use crate::error::CliError;
use crate::interaction::TerminalInteraction;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<(), CliError> {
    let manager = open_manager(store_path, interaction)?;
    let format: export::ExportFormat = format.into();
    let rendered = render_notes_export(manager.list(), format)?;

    if let Some(path) = output_path {
        let path = if path.is_dir() {
            path.join(suggested_export_file_name(
                format,
                Utc::now().timestamp_millis(),
            ))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
