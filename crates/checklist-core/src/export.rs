//! Note list export helpers.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::Note;
use crate::store::NoteList;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Serializable note representation used in exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNote {
    pub number: usize,
    pub text: String,
    pub date: String,
    pub status: String,
}

#[must_use]
pub fn note_to_export_item(number: usize, note: &Note) -> ExportNote {
    ExportNote {
        number,
        text: note.text.clone(),
        date: note.due_date_label(),
        status: note.status.label().to_string(),
    }
}

/// Render notes as pretty-printed JSON.
pub fn render_json_export(list: &NoteList) -> serde_json::Result<String> {
    let items = list
        .numbered()
        .map(|(number, note)| note_to_export_item(number, note))
        .collect::<Vec<ExportNote>>();
    serde_json::to_string_pretty(&items)
}

/// Render notes as a numbered Markdown checklist.
#[must_use]
pub fn render_markdown_export(list: &NoteList) -> String {
    let mut output = String::new();

    for (number, note) in list.numbered() {
        let mark = if note.status.is_complete() { 'x' } else { ' ' };
        let text = note.text.split_whitespace().collect::<Vec<_>>().join(" ");
        let _ = write!(output, "{number}. [{mark}] {text}");
        if note.due_date.is_some() {
            let _ = write!(output, " (due {})", note.due_date_label());
        }
        output.push('\n');
    }

    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(list: &NoteList, format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(list),
        ExportFormat::Markdown => Ok(render_markdown_export(list)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("checklist-export-{timestamp_ms}.{}", format.extension())
}
