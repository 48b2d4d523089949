//! Note list manager: the single owner of list state.
//!
//! Every user event runs to completion synchronously: mutate the list,
//! persist the whole list, then re-render with the current filter.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::filter::FilterCriterion;
use crate::interaction::{messages, Interaction};
use crate::models::{Note, NoteId, NoteStatus};
use crate::render::{render_list, Density, ListView};
use crate::storage::{decode_notes, encode_notes, KeyValueStorage, SavedNote, STORAGE_KEY};
use crate::store::NoteList;
use crate::util::normalize_text;

/// What a user event did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and was persisted
    Applied,
    /// Valid request that left the state as it was
    Unchanged,
    /// User dismissed a prompt or declined a confirmation
    Cancelled,
    /// Validation or precondition failed
    Rejected,
}

pub struct NoteManager<S, I> {
    list: NoteList,
    storage: S,
    interaction: I,
    filter: FilterCriterion,
    view: ListView,
}

impl<S: KeyValueStorage, I: Interaction> NoteManager<S, I> {
    /// Build the manager from whatever the storage origin holds.
    ///
    /// A missing or unreadable entry starts an empty list.
    pub fn load(storage: S, interaction: I) -> Result<Self> {
        let records = storage
            .get_item(STORAGE_KEY)?
            .map(|raw| decode_notes(&raw))
            .unwrap_or_default();

        let mut list = NoteList::new();
        for note in records.into_iter().filter_map(SavedNote::into_note) {
            list.push(note);
        }
        tracing::info!("Loaded {} notes", list.len());

        let filter = FilterCriterion::All;
        let view = render_list(&list, filter);
        Ok(Self {
            list,
            storage,
            interaction,
            filter,
            view,
        })
    }

    /// Add a pending note. Blank text alerts and returns `None`.
    pub fn add(&mut self, text: &str, due_date: Option<NaiveDate>) -> Result<Option<NoteId>> {
        self.add_with_status(text, due_date, NoteStatus::Pending)
    }

    pub fn add_with_status(
        &mut self,
        text: &str,
        due_date: Option<NaiveDate>,
        status: NoteStatus,
    ) -> Result<Option<NoteId>> {
        let Some(text) = normalize_text(text) else {
            self.interaction.alert(messages::EMPTY_NOTE);
            return Ok(None);
        };

        let id = self.list.push(Note::new(text, due_date).with_status(status));
        tracing::debug!("Added note {} as #{}", id, self.list.len());
        self.commit()?;
        Ok(Some(id))
    }

    /// Prompt for replacement text, pre-filled with the current text.
    pub fn edit(&mut self, id: &NoteId) -> Result<Outcome> {
        let current = self.note(id)?.text.clone();
        let Some(answer) = self.interaction.prompt_text(messages::EDIT_PROMPT, &current) else {
            return Ok(Outcome::Cancelled);
        };
        self.replace_text(id, &answer)
    }

    /// Replace a note's text. Blank text is rejected without an alert.
    pub fn replace_text(&mut self, id: &NoteId, new_text: &str) -> Result<Outcome> {
        let current = self.note(id)?;
        let Some(new_text) = normalize_text(new_text) else {
            return Ok(Outcome::Rejected);
        };
        if current.text == new_text {
            return Ok(Outcome::Unchanged);
        }

        self.list.replace_text(id, new_text)?;
        tracing::debug!("Edited note {}", id);
        self.commit()?;
        Ok(Outcome::Applied)
    }

    /// Mark a note complete. Completing twice is a no-op.
    pub fn complete(&mut self, id: &NoteId) -> Result<Outcome> {
        if self.list.complete(id)? {
            tracing::debug!("Completed note {}", id);
            self.commit()?;
            Ok(Outcome::Applied)
        } else {
            self.refresh();
            Ok(Outcome::Unchanged)
        }
    }

    /// Delete one note after confirmation; later notes are renumbered.
    pub fn delete(&mut self, id: &NoteId) -> Result<Outcome> {
        self.note(id)?;
        if !self.interaction.confirm(messages::CONFIRM_DELETE) {
            return Ok(Outcome::Cancelled);
        }

        self.list.remove(id)?;
        tracing::debug!("Deleted note {}", id);
        self.commit()?;
        Ok(Outcome::Applied)
    }

    /// Delete every note after confirmation. An empty list alerts instead.
    pub fn delete_all(&mut self) -> Result<Outcome> {
        if self.list.is_empty() {
            self.interaction.alert(messages::NOTHING_TO_DELETE);
            return Ok(Outcome::Rejected);
        }
        if !self.interaction.confirm(messages::CONFIRM_DELETE_ALL) {
            return Ok(Outcome::Cancelled);
        }

        let removed = self.list.len();
        self.list.clear();
        tracing::debug!("Deleted all {} notes", removed);
        self.commit()?;
        Ok(Outcome::Applied)
    }

    pub fn set_filter(&mut self, filter: FilterCriterion) {
        self.filter = filter;
        self.refresh();
    }

    pub fn reset_filter(&mut self) {
        self.set_filter(FilterCriterion::All);
    }

    /// Overwrite the stored entry with the full current list.
    pub fn save(&mut self) -> Result<()> {
        let encoded = encode_notes(&self.list)?;
        self.storage.set_item(STORAGE_KEY, &encoded)
    }

    #[must_use]
    pub const fn filter(&self) -> FilterCriterion {
        self.filter
    }

    #[must_use]
    pub const fn view(&self) -> &ListView {
        &self.view
    }

    #[must_use]
    pub const fn density(&self) -> Density {
        self.view.density
    }

    #[must_use]
    pub const fn list(&self) -> &NoteList {
        &self.list
    }

    /// Row handle for a displayed sequence number.
    #[must_use]
    pub fn id_at(&self, sequence: usize) -> Option<NoteId> {
        self.list.id_at(sequence)
    }

    #[must_use]
    pub fn next_sequence_number(&self) -> usize {
        self.list.next_sequence_number()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn note(&self, id: &NoteId) -> Result<&Note> {
        self.list
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn commit(&mut self) -> Result<()> {
        self.save()?;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.view = render_list(&self.list, self.filter);
    }
}
