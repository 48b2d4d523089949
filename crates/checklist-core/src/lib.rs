//! checklist-core - Core library for Checklist
//!
//! This crate owns the note list and everything that happens to it: the
//! ordered store, the row renderer, the status filter, the persistence
//! bridge to a key-value storage origin, and the manager that wires user
//! events through all of them.

pub mod error;
pub mod export;
pub mod filter;
pub mod interaction;
pub mod manager;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use filter::FilterCriterion;
pub use interaction::Interaction;
pub use manager::{NoteManager, Outcome};
pub use models::{Note, NoteId, NoteStatus};
pub use render::{Density, ListView, NoteRow};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::NoteList;
