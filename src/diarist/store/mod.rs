//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! - [`backend::StorageBackend`] is the raw medium: a string key-value store
//!   (the "how"). [`fs_backend::FsBackend`] keeps one file per key;
//!   [`mem_backend::MemBackend`] keeps everything in memory for tests.
//! - [`entry_store::EntryStore`] owns the journal semantics on top of a backend
//!   (the "what"): load, append, delete by position.
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── diaryEntries.json   # JSON array of entries, creation order
//! ├── darkMode.json       # literal `true` / `false`
//! └── config.json         # DiaristConfig (not a backend key)
//! ```
//!
//! The store assumes a single writer. Nothing here guards against two sessions
//! writing the same directory.

pub mod backend;
pub mod entry_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use entry_store::{Appended, DeleteOutcome, EntryStore, ENTRIES_KEY};
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
