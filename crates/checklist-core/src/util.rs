//! Shared utility functions used across multiple modules.

/// Normalize user-entered text by trimming whitespace and removing empties.
///
/// Returns `None` when the trimmed value is empty.
pub fn normalize_text(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Truncate text to at most 180 characters for log messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
