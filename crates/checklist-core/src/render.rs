//! Projection of the note list into display rows.
//!
//! Rendering is pure: rows are rebuilt from the authoritative [`NoteList`]
//! and the current [`FilterCriterion`], never read back.

use serde::Serialize;

use crate::filter::FilterCriterion;
use crate::models::{NoteId, NoteStatus};
use crate::store::NoteList;

/// Row count at which the list switches to compact spacing.
pub const COMPACT_THRESHOLD: usize = 5;

/// Row spacing of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Normal,
    Compact,
}

impl Density {
    #[must_use]
    pub const fn for_row_count(rows: usize) -> Self {
        if rows >= COMPACT_THRESHOLD {
            Self::Compact
        } else {
            Self::Normal
        }
    }
}

/// One rendered row of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRow {
    pub id: NoteId,
    pub sequence: usize,
    pub text: String,
    /// Long text wraps instead of being truncated
    pub wrap: bool,
    pub date: String,
    pub status: NoteStatus,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// The complete action is disabled once the note is complete
    pub complete_enabled: bool,
    pub visible: bool,
}

/// The whole rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub rows: Vec<NoteRow>,
    pub density: Density,
    pub filter: FilterCriterion,
}

impl ListView {
    pub fn visible_rows(&self) -> impl Iterator<Item = &NoteRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    #[must_use]
    pub fn row(&self, id: &NoteId) -> Option<&NoteRow> {
        self.rows.iter().find(|row| row.id == *id)
    }
}

#[must_use]
pub fn render_list(list: &NoteList, filter: FilterCriterion) -> ListView {
    let rows = list
        .numbered()
        .map(|(sequence, note)| NoteRow {
            id: note.id,
            sequence,
            text: note.text.clone(),
            wrap: note.is_long(),
            date: note.due_date_label(),
            status: note.status,
            status_label: note.status.label(),
            status_class: note.status.style_class(),
            complete_enabled: !note.status.is_complete(),
            visible: filter.matches(note.status),
        })
        .collect::<Vec<_>>();

    ListView {
        density: Density::for_row_count(rows.len()),
        rows,
        filter,
    }
}
