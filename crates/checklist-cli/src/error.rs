use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] checklist_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note #{0}; run `checklist list` to see the current numbers")]
    NoteNotFound(usize),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("{0}")]
    Rejected(&'static str),
}
