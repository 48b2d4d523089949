//! Persistence bridge between the note list and a key-value storage origin.

mod file;
mod memory;
mod record;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use record::{decode_notes, encode_notes, SavedNote};

use crate::error::Result;

/// Storage key holding the serialized note list.
pub const STORAGE_KEY: &str = "todoNotes";

/// String key-value storage scoped to one origin, like a browser's local storage.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &mut T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}
