use super::backend::StorageBackend;
use super::StorageWarning;
use crate::error::{Result, WordbookError};
use crate::model::Entry;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Blob key of the saved collection. Matches the key the web client used.
pub const SAVED_WORDS_KEY: &str = "savedWords";

/// Outcome of [`EntryStore::reload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reloaded {
    pub entries: Vec<Entry>,
    pub warning: Option<StorageWarning>,
}

/// Sole owner of the persisted collection of saved entries.
///
/// Entries are kept in insertion order (oldest first) and `word` is unique among
/// them. All methods take `&mut self` for mutation, so operations on one store are
/// serialized by the borrow checker.
pub struct EntryStore<B: StorageBackend> {
    backend: B,
    key: String,
    entries: Vec<Entry>,
}

impl<B: StorageBackend> EntryStore<B> {
    /// Create a store and load whatever the backend currently holds.
    pub fn open(backend: B) -> (Self, Option<StorageWarning>) {
        let mut store = Self::with_key(backend, SAVED_WORDS_KEY);
        let reloaded = store.reload();
        (store, reloaded.warning)
    }

    /// Create an empty, not yet loaded store over an arbitrary blob key.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            entries: Vec::new(),
        }
    }

    pub fn location(&self) -> String {
        self.backend.location(&self.key)
    }

    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.word == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.word == word)
    }

    /// Append a new entry. An entry whose word is already saved is discarded and
    /// reported as `AlreadyExists`; the stored one is left as it was.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        entry.validate()?;
        if self.contains(&entry.word) {
            return Err(WordbookError::AlreadyExists(entry.word));
        }

        let mut next = self.entries.clone();
        next.push(entry);
        self.commit(next)
    }

    /// Replace the entry saved under `word` with `entry`, keeping its position.
    ///
    /// `entry.word` may differ from `word`, in which case it must not name another
    /// saved entry.
    pub fn update(&mut self, word: &str, entry: Entry) -> Result<()> {
        entry.validate()?;
        let pos = self
            .position(word)
            .ok_or_else(|| WordbookError::NotFound(word.to_string()))?;
        if entry.word != word && self.contains(&entry.word) {
            return Err(WordbookError::Conflict(entry.word));
        }

        let mut next = self.entries.clone();
        next[pos] = entry;
        self.commit(next)
    }

    /// Change the word of a saved entry in place. Returns the renamed entry.
    pub fn rename(&mut self, old_word: &str, new_word: &str) -> Result<Entry> {
        if new_word.trim().is_empty() {
            return Err(WordbookError::InvalidInput(
                "new word cannot be empty".to_string(),
            ));
        }
        let current = self
            .get(old_word)
            .ok_or_else(|| WordbookError::NotFound(old_word.to_string()))?;
        if old_word == new_word {
            return Ok(current.clone());
        }

        let renamed = current.renamed(new_word);
        self.update(old_word, renamed.clone())?;
        Ok(renamed)
    }

    /// Delete the entry saved under `word`. Returns the removed entry.
    pub fn remove(&mut self, word: &str) -> Result<Entry> {
        let pos = self
            .position(word)
            .ok_or_else(|| WordbookError::NotFound(word.to_string()))?;

        let mut next = self.entries.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(removed)
    }

    /// Discard the in-memory collection and read it again from the backend.
    ///
    /// Never fails: unreadable or corrupt data yields an empty collection plus a
    /// warning. Entries failing [`Entry::validate`] are skipped and duplicate words
    /// keep their first occurrence.
    pub fn reload(&mut self) -> Reloaded {
        let location = self.location();
        let (entries, warning) = match self.backend.read(&self.key) {
            Ok(None) => (Vec::new(), None),
            Ok(Some(blob)) if blob.trim().is_empty() => (Vec::new(), None),
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Entry>>(&blob) {
                Ok(parsed) => {
                    let valid = drop_invalid(parsed, &location);
                    (dedup_by_word(valid, &location), None)
                }
                Err(e) => (
                    Vec::new(),
                    Some(StorageWarning::Corrupt {
                        location,
                        reason: e.to_string(),
                    }),
                ),
            },
            Err(e) => (
                Vec::new(),
                Some(StorageWarning::Unreadable {
                    location,
                    reason: e.to_string(),
                }),
            ),
        };

        if let Some(w) = &warning {
            debug!("{}", w);
        }
        debug!(count = entries.len(), "reloaded saved words");

        self.entries = entries;
        Reloaded {
            entries: self.entries.clone(),
            warning,
        }
    }

    /// Persist `next` as the whole collection, then make it the in-memory one.
    fn commit(&mut self, next: Vec<Entry>) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        if let Err(e) = self.backend.write(&self.key, &blob) {
            warn!(
                location = %self.location(),
                "write failed, keeping previous collection: {}",
                e
            );
            return Err(WordbookError::Storage(e.to_string()));
        }
        debug!(count = next.len(), location = %self.location(), "saved words written");
        self.entries = next;
        Ok(())
    }
}

fn drop_invalid(entries: Vec<Entry>, location: &str) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|e| match e.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(location = %location, "skipping saved entry: {}", err);
                false
            }
        })
        .collect()
}

fn dedup_by_word(entries: Vec<Entry>, location: &str) -> Vec<Entry> {
    let mut seen = HashSet::new();
    let before = entries.len();
    let unique: Vec<Entry> = entries
        .into_iter()
        .filter(|e| seen.insert(e.word.clone()))
        .collect();
    if unique.len() != before {
        warn!(
            location = %location,
            dropped = before - unique.len(),
            "duplicate words in saved collection, keeping first occurrences"
        );
    }
    unique
}
