//! Ordered in-memory note list.
//!
//! Sequence numbers are derived from position, so after any insert or removal
//! the visible numbering is always exactly `1..=len`.

use crate::error::{Error, Result};
use crate::models::{Note, NoteId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes paired with their 1-based sequence number, in display order.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Note)> {
        self.notes.iter().enumerate().map(|(index, note)| (index + 1, note))
    }

    /// Sequence number the next appended note will receive.
    #[must_use]
    pub fn next_sequence_number(&self) -> usize {
        self.notes.len() + 1
    }

    /// Append a note at the end of the list and return its row handle.
    pub fn push(&mut self, note: Note) -> NoteId {
        let id = note.id;
        self.notes.push(note);
        id
    }

    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    #[must_use]
    pub fn sequence_number(&self, id: &NoteId) -> Option<usize> {
        self.position(id).map(|index| index + 1)
    }

    /// Row handle of the note currently shown with `sequence` (1-based).
    #[must_use]
    pub fn id_at(&self, sequence: usize) -> Option<NoteId> {
        let index = sequence.checked_sub(1)?;
        self.notes.get(index).map(|note| note.id)
    }

    /// Replace a note's text in place.
    pub fn replace_text(&mut self, id: &NoteId, text: String) -> Result<()> {
        self.get_mut(id)?.text = text;
        Ok(())
    }

    /// Mark a note complete. Returns whether the status changed.
    pub fn complete(&mut self, id: &NoteId) -> Result<bool> {
        Ok(self.get_mut(id)?.complete())
    }

    /// Remove a note; the notes after it move up one position.
    pub fn remove(&mut self, id: &NoteId) -> Result<Note> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        Ok(self.notes.remove(index))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == *id)
    }

    fn get_mut(&mut self, id: &NoteId) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|note| note.id == *id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &NoteId) -> Error {
    Error::NotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteStatus;
    use pretty_assertions::assert_eq;

    fn list_of(texts: &[&str]) -> (NoteList, Vec<NoteId>) {
        let mut list = NoteList::new();
        let ids = texts
            .iter()
            .map(|text| list.push(Note::new(*text, None)))
            .collect();
        (list, ids)
    }

    fn sequence_numbers(list: &NoteList) -> Vec<usize> {
        list.numbered().map(|(sequence, _)| sequence).collect()
    }

    #[test]
    fn push_assigns_next_sequence_number() {
        let (list, ids) = list_of(&["a", "b", "c"]);
        assert_eq!(list.sequence_number(&ids[2]), Some(3));
        assert_eq!(list.next_sequence_number(), 4);
    }

    #[test]
    fn remove_renumbers_contiguously() {
        let (mut list, ids) = list_of(&["a", "b", "c", "d"]);
        list.remove(&ids[1]).unwrap();
        list.remove(&ids[0]).unwrap();

        assert_eq!(sequence_numbers(&list), vec![1, 2]);
        assert_eq!(list.sequence_number(&ids[2]), Some(1));
        assert_eq!(list.sequence_number(&ids[3]), Some(2));
        assert_eq!(list.next_sequence_number(), 3);
    }

    #[test]
    fn mixed_adds_and_removes_keep_numbering_dense() {
        let mut list = NoteList::new();
        let mut ids = Vec::new();
        for round in 0..10 {
            ids.push(list.push(Note::new(format!("note {round}"), None)));
            if round % 3 == 2 {
                let victim = ids.remove(round % ids.len());
                list.remove(&victim).unwrap();
            }
            let expected: Vec<usize> = (1..=list.len()).collect();
            assert_eq!(sequence_numbers(&list), expected);
        }
    }

    #[test]
    fn clear_resets_numbering() {
        let (mut list, _) = list_of(&["a", "b"]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.next_sequence_number(), 1);
    }

    #[test]
    fn id_at_maps_sequence_to_handle() {
        let (list, ids) = list_of(&["a", "b"]);
        assert_eq!(list.id_at(1), Some(ids[0]));
        assert_eq!(list.id_at(2), Some(ids[1]));
        assert_eq!(list.id_at(0), None);
        assert_eq!(list.id_at(3), None);
    }

    #[test]
    fn replace_text_and_complete_mutate_in_place() {
        let (mut list, ids) = list_of(&["a", "b"]);
        list.replace_text(&ids[0], "changed".to_string()).unwrap();
        assert!(list.complete(&ids[1]).unwrap());
        assert!(!list.complete(&ids[1]).unwrap());

        assert_eq!(list.notes()[0].text, "changed");
        assert_eq!(list.notes()[1].status, NoteStatus::Complete);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut list, _) = list_of(&["a"]);
        let stranger = NoteId::new();
        assert!(matches!(list.remove(&stranger), Err(Error::NotFound(_))));
        assert!(matches!(list.complete(&stranger), Err(Error::NotFound(_))));
        assert_eq!(list.len(), 1);
    }
}
