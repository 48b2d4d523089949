//! Due date formatting and parsing.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Placeholder shown for notes without a due date.
pub const NO_DATE_LABEL: &str = "No date";

const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Render an optional due date as `DD/MM/YYYY`, or the `No date` placeholder.
#[must_use]
pub fn format_due_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || NO_DATE_LABEL.to_string(),
        |date| date.format(DISPLAY_FORMAT).to_string(),
    )
}

/// Parse a label produced by [`format_due_date`] back into a date.
pub fn parse_due_date_label(label: &str) -> Result<Option<NaiveDate>> {
    let label = label.trim();
    if label == NO_DATE_LABEL {
        return Ok(None);
    }
    NaiveDate::parse_from_str(label, DISPLAY_FORMAT)
        .map(Some)
        .map_err(|error| Error::InvalidDate(format!("{label}: {error}")))
}

/// Parse a date picker value (`YYYY-MM-DD`). Empty input means no date.
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, INPUT_FORMAT)
        .map(Some)
        .map_err(|error| Error::InvalidDate(format!("{value}: {error}")))
}
