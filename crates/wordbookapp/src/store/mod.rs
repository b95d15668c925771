//! # Storage Layer
//!
//! Persistence is split in two, the same way I/O and logic are split elsewhere:
//!
//! 1. [`backend::StorageBackend`]: the "how". A synchronous get/set API over named
//!    string blobs with no transactional guarantees.
//! 2. [`entry_store::EntryStore`]: the "what". Owns the in-memory collection of saved
//!    entries, enforces word uniqueness and writes the whole collection through the
//!    backend on every mutation.
//!
//! ## Write Protocol
//!
//! Every mutating operation runs:
//!
//! ```text
//! validate → mutate a copy → serialize whole collection → write → commit copy
//! ```
//!
//! If the write fails the copy is dropped, so the in-memory collection never holds
//! something the backend would not return on the next read.
//!
//! ## Recovery
//!
//! A blob that cannot be read or parsed is replaced by an empty collection on
//! [`entry_store::EntryStore::reload`] and reported as a [`StorageWarning`]. It is
//! never fatal. The damaged blob stays on the medium until the next successful
//! write replaces it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per blob, written atomically.
//! - [`mem_backend::MemBackend`]: for tests; clones share the same medium.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── savedWords.json     # JSON array of entries, oldest first
//! ```

use std::fmt;

pub mod backend;
pub mod entry_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use entry_store::{EntryStore, Reloaded, SAVED_WORDS_KEY};

/// Non-fatal problem found while reading the persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageWarning {
    /// The blob exists but is not a valid collection of entries.
    Corrupt { location: String, reason: String },
    /// The medium failed to return the blob.
    Unreadable { location: String, reason: String },
}

impl fmt::Display for StorageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageWarning::Corrupt { location, reason } => write!(
                f,
                "Saved words at {} are corrupt and were ignored ({})",
                location, reason
            ),
            StorageWarning::Unreadable { location, reason } => write!(
                f,
                "Saved words at {} could not be read and were ignored ({})",
                location, reason
            ),
        }
    }
}
