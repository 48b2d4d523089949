//! Data models for Checklist

mod date;
mod note;

pub use date::{format_due_date, parse_date_input, parse_due_date_label, NO_DATE_LABEL};
pub use note::{Note, NoteId, NoteStatus, LONG_NOTE_CHARS};
