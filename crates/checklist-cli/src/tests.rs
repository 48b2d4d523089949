use std::path::{Path, PathBuf};

use checklist_core::storage::STORAGE_KEY;
use checklist_core::{FileStorage, FilterCriterion, KeyValueStorage, NoteStatus};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use crate::cli::{CompletionShell, ExportFormat, StatusFilter};
use crate::commands::add::run_add;
use crate::commands::clear::run_clear;
use crate::commands::common::{
    default_editor, empty_view_message, format_view_lines, normalize_content, open_manager,
    resolve_note_number, resolve_store_path, wrap_text,
};
use crate::commands::complete::run_complete;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::error::CliError;
use crate::interaction::{parse_confirmation, TerminalInteraction};

fn test_store() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    (dir, path)
}

fn yes() -> TerminalInteraction {
    TerminalInteraction::new(true)
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn add(path: &Path, text: &str) {
    run_add(&words(text), None, path, yes()).unwrap();
}

fn stored_texts(path: &Path) -> Vec<(usize, String, NoteStatus)> {
    let manager = open_manager(path, yes()).unwrap();
    manager
        .view()
        .rows
        .iter()
        .map(|row| (row.sequence, row.text.clone(), row.status))
        .collect()
}

#[test]
fn normalize_content_trims_and_rejects_empty() {
    assert_eq!(normalize_content("  hello  "), Some("hello".to_string()));
    assert_eq!(normalize_content(" \n\t "), None);
}

#[test]
fn default_editor_is_defined() {
    assert!(!default_editor().is_empty());
}

#[test]
fn parse_confirmation_accepts_only_yes() {
    assert!(parse_confirmation("y\n"));
    assert!(parse_confirmation(" YES "));
    assert!(!parse_confirmation("\n"));
    assert!(!parse_confirmation("no"));
}

#[test]
fn resolve_store_path_prefers_explicit_flag() {
    let explicit = PathBuf::from("/tmp/explicit.json");
    assert_eq!(resolve_store_path(Some(explicit.clone())), explicit);
}

#[test]
fn status_filter_maps_to_criterion() {
    assert_eq!(FilterCriterion::from(StatusFilter::All), FilterCriterion::All);
    assert_eq!(
        FilterCriterion::from(StatusFilter::Pending),
        FilterCriterion::Pending
    );
    assert_eq!(
        FilterCriterion::from(StatusFilter::Complete),
        FilterCriterion::Complete
    );
}

#[test]
fn wrap_text_breaks_on_words() {
    assert_eq!(
        wrap_text("the quick brown fox jumps over the lazy dog", 15),
        vec!["the quick brown", "fox jumps over", "the lazy dog"]
    );
}

#[test]
fn wrap_text_splits_overlong_words() {
    assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    assert_eq!(wrap_text("", 10), vec![String::new()]);
}

#[test]
fn add_complete_delete_flow_renumbers() {
    let (_dir, path) = test_store();
    add(&path, "Buy milk");
    add(&path, "Call mom");
    add(&path, "Water plants");

    run_complete(2, &path, yes()).unwrap();
    run_delete(1, &path, yes()).unwrap();

    assert_eq!(
        stored_texts(&path),
        vec![
            (1, "Call mom".to_string(), NoteStatus::Complete),
            (2, "Water plants".to_string(), NoteStatus::Pending),
        ]
    );
}

#[test]
fn add_persists_due_date_in_display_form() {
    let (_dir, path) = test_store();
    run_add(&words("Buy milk"), Some("2024-05-01"), &path, yes()).unwrap();

    let raw = FileStorage::new(&path).get_item(STORAGE_KEY).unwrap();
    assert_eq!(
        raw.as_deref(),
        Some(r#"[{"text":"Buy milk","date":"01/05/2024","status":"Pending"}]"#)
    );
}

#[test]
fn add_rejects_malformed_due_date() {
    let (_dir, path) = test_store();
    let result = run_add(&words("Buy milk"), Some("01/05/2024"), &path, yes());
    assert!(matches!(result, Err(CliError::Core(_))));
    assert!(stored_texts(&path).is_empty());
}

#[test]
fn edit_with_text_replaces_note() {
    let (_dir, path) = test_store();
    add(&path, "Buy milk");

    run_edit(1, &words("Buy oat milk"), &path, yes()).unwrap();
    assert_eq!(stored_texts(&path)[0].1, "Buy oat milk");
}

#[test]
fn edit_with_blank_text_is_rejected() {
    let (_dir, path) = test_store();
    add(&path, "Buy milk");

    let result = run_edit(1, &[" ".to_string()], &path, yes());
    assert!(matches!(result, Err(CliError::Rejected(_))));
    assert_eq!(stored_texts(&path)[0].1, "Buy milk");
}

#[test]
fn unknown_number_is_reported() {
    let (_dir, path) = test_store();
    add(&path, "Buy milk");

    let manager = open_manager(&path, yes()).unwrap();
    assert!(matches!(
        resolve_note_number(&manager, 2),
        Err(CliError::NoteNotFound(2))
    ));
    assert!(matches!(
        run_complete(0, &path, yes()),
        Err(CliError::NoteNotFound(0))
    ));
}

#[test]
fn clear_on_empty_store_is_rejected() {
    let (_dir, path) = test_store();
    assert!(matches!(
        run_clear(&path, yes()),
        Err(CliError::Rejected(_))
    ));
}

#[test]
fn clear_removes_everything() {
    let (_dir, path) = test_store();
    add(&path, "a");
    add(&path, "b");

    run_clear(&path, yes()).unwrap();
    assert!(stored_texts(&path).is_empty());

    add(&path, "c");
    assert_eq!(stored_texts(&path)[0].0, 1);
}

#[test]
fn format_view_lines_spacing_follows_density() {
    let (_dir, path) = test_store();
    for text in ["one", "two"] {
        add(&path, text);
    }
    let manager = open_manager(&path, yes()).unwrap();
    let lines = format_view_lines(manager.view());
    assert_eq!(lines.len(), 3);
    assert!(lines[1].is_empty());

    for text in ["three", "four", "five"] {
        add(&path, text);
    }
    let manager = open_manager(&path, yes()).unwrap();
    let lines = format_view_lines(manager.view());
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| !line.is_empty()));
}

#[test]
fn format_view_lines_wraps_long_text_and_hides_filtered_rows() {
    let (_dir, path) = test_store();
    add(
        &path,
        "Renew the passport before the summer holidays start next month",
    );
    add(&path, "Short");
    run_complete(2, &path, yes()).unwrap();

    let mut manager = open_manager(&path, yes()).unwrap();
    manager.set_filter(FilterCriterion::Pending);
    let lines = format_view_lines(manager.view());

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("  1  [ ] Renew the passport before the summer"));
    assert!(lines[0].contains("No date"));
    assert!(lines[0].ends_with("Pending"));
    assert_eq!(lines[1].trim(), "holidays start next month");
}

#[test]
fn run_export_writes_markdown_file() {
    let (dir, path) = test_store();
    add(&path, "Buy milk");
    run_complete(1, &path, yes()).unwrap();

    let output = dir.path().join("notes.md");
    run_export(ExportFormat::Markdown, Some(&output), &path, yes()).unwrap();
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "1. [x] Buy milk\n"
    );
}

#[test]
fn run_export_into_directory_uses_suggested_name() {
    let (dir, path) = test_store();
    add(&path, "Buy milk");
    let out_dir = dir.path().join("exports");
    std::fs::create_dir_all(&out_dir).unwrap();

    run_export(ExportFormat::Json, Some(&out_dir), &path, yes()).unwrap();

    let entries = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("checklist-export-"));
    assert!(entries[0].ends_with(".json"));
}

#[test]
fn run_completions_writes_script() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("checklist.bash");
    run_completions(CompletionShell::Bash, Some(&output)).unwrap();
    let script = std::fs::read_to_string(&output).unwrap();
    assert!(script.contains("checklist"));
}

#[test]
fn empty_view_message_distinguishes_empty_and_filtered_out() {
    let (_dir, path) = test_store();
    let mut manager = open_manager(&path, yes()).unwrap();
    assert_eq!(empty_view_message(manager.view()), Some("No notes yet"));

    manager.add("Buy milk", None).unwrap();
    assert_eq!(empty_view_message(manager.view()), None);

    manager.set_filter(FilterCriterion::Complete);
    assert_eq!(empty_view_message(manager.view()), Some("No matching notes"));
    assert!(format_view_lines(manager.view()).is_empty());
}

#[test]
fn format_view_lines_keeps_short_multiline_text_on_one_row() {
    let (_dir, path) = test_store();
    let mut manager = open_manager(&path, yes()).unwrap();
    manager.add("Buy\nmilk  today", None).unwrap();

    let lines = format_view_lines(manager.view());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("  1  [ ] Buy milk today "));
    assert!(!lines[0].contains('\n'));
}
