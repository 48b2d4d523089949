//! Blocking user interaction capability injected into the manager.

/// Alerts, confirmations and text prompts shown to the user.
///
/// Every call blocks until the user answers.
pub trait Interaction {
    /// Show a message the user has to acknowledge
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question. `false` means the user declined
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text pre-filled with `default`. `None` means cancelled
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;
}

impl<T: Interaction + ?Sized> Interaction for &mut T {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
        (**self).prompt_text(message, default)
    }
}

/// Fixed user-facing messages.
pub mod messages {
    pub const EMPTY_NOTE: &str = "Enter a note first!";
    pub const NOTHING_TO_DELETE: &str = "There are no notes to delete!";
    pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this note?";
    pub const CONFIRM_DELETE_ALL: &str = "Are you sure you want to delete all notes?";
    pub const EDIT_PROMPT: &str = "Edit task:";
}
