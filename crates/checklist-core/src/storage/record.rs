//! Stored record format: a JSON array of `{ text, date, status }`.

use serde::{Deserialize, Serialize};

use serde_json::Value;

use crate::models::{parse_due_date_label, Note, NoteStatus, NO_DATE_LABEL};
use crate::store::NoteList;
use crate::util::{compact_text, normalize_text};

/// One persisted note, in display form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedNote {
    #[serde(default)]
    pub text: String,
    /// `DD/MM/YYYY` or `No date`
    #[serde(default = "default_date_label")]
    pub date: String,
    /// `Pending` or `Complete`
    #[serde(default)]
    pub status: String,
}

fn default_date_label() -> String {
    NO_DATE_LABEL.to_string()
}

impl SavedNote {
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            text: note.text.clone(),
            date: note.due_date_label(),
            status: note.status.label().to_string(),
        }
    }

    /// Rebuild a note from its stored form.
    ///
    /// Returns `None` when the text is blank. An unreadable date loads as no
    /// date, and any status other than `Complete` loads as pending.
    #[must_use]
    pub fn into_note(self) -> Option<Note> {
        let Some(text) = normalize_text(&self.text) else {
            tracing::warn!("Skipping stored note with empty text");
            return None;
        };

        let due_date = parse_due_date_label(&self.date).unwrap_or_else(|error| {
            tracing::warn!("Dropping unreadable due date for stored note: {}", error);
            None
        });

        let status = if self.status == NoteStatus::Complete.label() {
            NoteStatus::Complete
        } else {
            NoteStatus::Pending
        };

        Some(Note::new(text, due_date).with_status(status))
    }
}

/// Serialize the full list, in display order.
pub fn encode_notes(list: &NoteList) -> serde_json::Result<String> {
    let records = list
        .notes()
        .iter()
        .map(SavedNote::from_note)
        .collect::<Vec<_>>();
    serde_json::to_string(&records)
}

/// Parse a stored entry. Anything that is not a JSON array (including `null`)
/// decodes as an empty list; within an array, each unreadable record is
/// skipped on its own.
#[must_use]
pub fn decode_notes(raw: &str) -> Vec<SavedNote> {
    let values = match serde_json::from_str::<Option<Vec<Value>>>(raw) {
        Ok(values) => values.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                "Ignoring unreadable stored notes ({}): {}",
                error,
                compact_text(raw)
            );
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!("Skipping unreadable stored note #{}: {}", index + 1, error);
                None
            }
        })
        .collect()
}
