use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use checklist_core::{Density, FileStorage, ListView, NoteId, NoteManager, NoteRow};
use serde::Serialize;

use crate::error::CliError;
use crate::interaction::TerminalInteraction;

/// Column width at which long note text wraps.
pub const TEXT_COLUMN_WIDTH: usize = 40;

pub type CliManager = NoteManager<FileStorage, TerminalInteraction>;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub number: usize,
    pub id: String,
    pub text: String,
    pub date: String,
    pub status: String,
}

pub fn resolve_store_path(cli_store_path: Option<PathBuf>) -> PathBuf {
    cli_store_path
        .or_else(|| env::var_os("CHECKLIST_STORE").map(PathBuf::from))
        .unwrap_or_else(default_store_path)
}

pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("checklist")
        .join("storage.json")
}

pub fn open_manager(
    store_path: &Path,
    interaction: TerminalInteraction,
) -> Result<CliManager, CliError> {
    tracing::debug!("Using store {}", store_path.display());
    Ok(NoteManager::load(FileStorage::new(store_path), interaction)?)
}

/// Map a displayed note number to its row handle.
pub fn resolve_note_number(manager: &CliManager, number: usize) -> Result<NoteId, CliError> {
    manager
        .id_at(number)
        .ok_or(CliError::NoteNotFound(number))
}

pub fn row_to_list_item(row: &NoteRow) -> NoteListItem {
    NoteListItem {
        number: row.sequence,
        id: row.id.to_string(),
        text: row.text.clone(),
        date: row.date.clone(),
        status: row.status_label.to_string(),
    }
}

/// Render the visible rows as a table.
///
/// Long text wraps onto continuation lines. Normal density separates rows
/// with a blank line; compact density does not.
pub fn format_view_lines(view: &ListView) -> Vec<String> {
    let mut lines = Vec::new();

    for row in view.visible_rows() {
        if view.density == Density::Normal && !lines.is_empty() {
            lines.push(String::new());
        }

        let text_lines = if row.wrap {
            wrap_text(&row.text, TEXT_COLUMN_WIDTH)
        } else {
            vec![collapse_whitespace(&row.text)]
        };
        let marker = if row.complete_enabled { ' ' } else { 'x' };

        for (index, text) in text_lines.iter().enumerate() {
            if index == 0 {
                lines.push(format!(
                    "{:>3}  [{marker}] {text:<width$}  {:<10}  {}",
                    row.sequence,
                    row.date,
                    row.status_label,
                    width = TEXT_COLUMN_WIDTH
                ));
            } else {
                lines.push(format!("{:>3}      {text}", ""));
            }
        }
    }

    lines
}

/// Message shown instead of the table when no row is visible.
pub fn empty_view_message(view: &ListView) -> Option<&'static str> {
    if view.rows.is_empty() {
        Some("No notes yet")
    } else if view.visible_rows().next().is_none() {
        Some("No matching notes")
    } else {
        None
    }
}

/// Fold newlines and runs of whitespace into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head = word.chars().take(width).collect::<String>();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        if current.is_empty() {
            current = word;
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Text from the arguments, else piped stdin, else the editor.
///
/// Returns whatever was captured, possibly empty; blank text is the manager's
/// call to reject.
pub fn resolve_note_text(text_parts: &[String]) -> Result<String, CliError> {
    if let Some(text) = normalize_content(&text_parts.join(" ")) {
        return Ok(text);
    }

    if let Some(text) = read_piped_stdin()? {
        return Ok(text);
    }

    if io::stdin().is_terminal() {
        if let Some(text) = capture_editor_input_with_initial("")? {
            return Ok(text);
        }
    }

    Ok(String::new())
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn capture_editor_input_with_initial(
    initial_content: &str,
) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let note_content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(normalize_content(&note_content))
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let status = Command::new(program).args(parts).arg(file_path).status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("checklist-note-{}-{now}.txt", std::process::id()))
}
