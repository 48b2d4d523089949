//! Note model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::date::format_due_date;
use crate::error::Error;

/// Notes longer than this many characters are rendered wrapped.
pub const LONG_NOTE_CHARS: usize = 40;

/// A unique row handle for a note, using UUID v7 (time-sortable)
///
/// Sequence numbers shift when notes are deleted; the id does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Completion status of a note. The only transition is Pending -> Complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteStatus {
    #[default]
    Pending,
    Complete,
}

impl NoteStatus {
    /// Label shown on the status badge and written to storage.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Complete => "Complete",
        }
    }

    /// Style class attached to the status badge.
    #[must_use]
    pub const fn style_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Complete => "status-complete",
        }
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NoteStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Complete" => Ok(Self::Complete),
            other => Err(Error::InvalidInput(format!("unknown status: {other}"))),
        }
    }
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Row handle
    pub id: NoteId,
    /// Note body, already trimmed and non-empty
    pub text: String,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Completion status
    pub status: NoteStatus,
}

impl Note {
    /// Create a new pending note
    #[must_use]
    pub fn new(text: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: NoteId::new(),
            text: text.into(),
            due_date,
            status: NoteStatus::Pending,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: NoteStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark the note complete. Returns `false` if it already was.
    pub fn complete(&mut self) -> bool {
        if self.status.is_complete() {
            return false;
        }
        self.status = NoteStatus::Complete;
        true
    }

    /// Due date as shown in the list (`DD/MM/YYYY` or `No date`)
    #[must_use]
    pub fn due_date_label(&self) -> String {
        format_due_date(self.due_date)
    }

    /// Whether the text is long enough to be wrapped instead of kept on one line
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.text.chars().count() > LONG_NOTE_CHARS
    }
}
