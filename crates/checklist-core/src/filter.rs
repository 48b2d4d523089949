//! Status filter for the note list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::NoteStatus;

/// Which rows are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCriterion {
    #[default]
    All,
    Pending,
    Complete,
}

impl FilterCriterion {
    /// Parse a selector value. Unknown values fall back to `All`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "complete" => Self::Complete,
            _ => Self::All,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Complete => "complete",
        }
    }

    /// Whether a row with `status` is shown under this criterion.
    #[must_use]
    pub fn matches(self, status: NoteStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending | Self::Complete => status.label().to_lowercase() == self.as_str(),
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_status() {
        assert!(FilterCriterion::All.matches(NoteStatus::Pending));
        assert!(FilterCriterion::All.matches(NoteStatus::Complete));
    }

    #[test]
    fn status_criteria_match_only_their_status() {
        assert!(FilterCriterion::Pending.matches(NoteStatus::Pending));
        assert!(!FilterCriterion::Pending.matches(NoteStatus::Complete));
        assert!(FilterCriterion::Complete.matches(NoteStatus::Complete));
        assert!(!FilterCriterion::Complete.matches(NoteStatus::Pending));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(FilterCriterion::parse("Pending"), FilterCriterion::Pending);
        assert_eq!(FilterCriterion::parse(" COMPLETE "), FilterCriterion::Complete);
        assert_eq!(FilterCriterion::parse("all"), FilterCriterion::All);
    }

    #[test]
    fn unknown_criterion_defaults_to_all() {
        assert_eq!(FilterCriterion::parse("archived"), FilterCriterion::All);
        assert_eq!(FilterCriterion::parse(""), FilterCriterion::All);
    }
}
