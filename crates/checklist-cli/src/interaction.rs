//! Terminal implementation of the manager's interaction capability.

use std::io::{self, BufRead, IsTerminal, Write};

use checklist_core::Interaction;

use crate::commands::common::capture_editor_input_with_initial;

/// Alerts go to stderr; confirmations are asked on the terminal.
///
/// Without a terminal on stdin every confirmation is declined unless
/// `assume_yes` is set.
#[derive(Debug, Default)]
pub struct TerminalInteraction {
    assume_yes: bool,
    replacement: Option<String>,
}

impl TerminalInteraction {
    pub const fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            replacement: None,
        }
    }

    /// Answer the next text prompt with `text` instead of opening the editor.
    #[must_use]
    pub fn with_replacement(mut self, text: Option<String>) -> Self {
        self.replacement = text;
        self
    }
}

impl Interaction for TerminalInteraction {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let stdin = io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!("Declining \"{}\": stdin is not a terminal", message);
            return false;
        }

        let mut stderr = io::stderr();
        let _ = write!(stderr, "{message} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        parse_confirmation(&answer)
    }

    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
        if let Some(text) = self.replacement.take() {
            return Some(text);
        }

        tracing::debug!("{} opening editor", message);
        match capture_editor_input_with_initial(default) {
            Ok(text) => text,
            Err(error) => {
                eprintln!("{error}");
                None
            }
        }
    }
}

pub fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
