use super::backend::StorageBackend;
use crate::codec::{self, Decoded};
use crate::error::Result;
use crate::model::Entry;

pub const ENTRIES_KEY: &str = "diaryEntries";

/// An entry that was just appended, with its position in the stored sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appended {
    pub position: usize,
    pub entry: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(Entry),
    NotFound,
}

/// The ordered entry collection, persisted as a single value in a
/// [`StorageBackend`].
///
/// Storage order is creation order (oldest first). Positions are dense 0-based
/// indexes into that order, so every delete invalidates positions handed out
/// before it.
pub struct EntryStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> EntryStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, ENTRIES_KEY)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the stored collection.
    ///
    /// Never fails: an unreadable or malformed value loads as an empty journal.
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(%err, key = %self.key, "failed to read entries; treating journal as empty");
                return Vec::new();
            }
        };
        match codec::decode_entries(raw.as_deref()) {
            Decoded::Value(entries) => entries,
            Decoded::Missing => Vec::new(),
            Decoded::Fallback { reason } => {
                tracing::warn!(%reason, key = %self.key, "stored entries are malformed; treating journal as empty");
                Vec::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, position: usize) -> Option<Entry> {
        self.load().into_iter().nth(position)
    }

    /// Appends a new entry built from `text`.
    ///
    /// Returns `Ok(None)` without touching storage when `text` is blank.
    pub fn append(&mut self, text: &str) -> Result<Option<Appended>> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring blank entry");
            return Ok(None);
        }

        let entry = Entry::new(text.to_string(), Entry::now());
        let mut entries = self.load();
        entries.push(entry.clone());
        self.write(&entries)?;

        let position = entries.len() - 1;
        tracing::debug!(position, direction = %entry.direction, "appended entry");
        Ok(Some(Appended { position, entry }))
    }

    /// Removes the entry at `position`.
    ///
    /// An out-of-range position leaves storage untouched and reports
    /// [`DeleteOutcome::NotFound`].
    pub fn delete_at(&mut self, position: usize) -> Result<DeleteOutcome> {
        let mut entries = self.load();
        if position >= entries.len() {
            tracing::debug!(position, len = entries.len(), "delete position out of range");
            return Ok(DeleteOutcome::NotFound);
        }

        let removed = entries.remove(position);
        self.write(&entries)?;
        tracing::debug!(position, remaining = entries.len(), "deleted entry");
        Ok(DeleteOutcome::Removed(removed))
    }

    fn write(&self, entries: &[Entry]) -> Result<()> {
        let raw = codec::encode_entries(entries)?;
        self.backend.set(&self.key, &raw)
    }
}
