//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UI clients. It holds the one [`EntryStore`] and the one
//! [`LookupClient`] of a session and dispatches each call to a command.
//!
//! `WordbookApi<B, S>` is generic over the storage backend and the dictionary
//! source:
//! - Production: `WordbookApi<FsBackend, HttpSource>`
//! - Testing: `WordbookApi<MemBackend, StaticSource>`
//!
//! Lookups are `async` because they wait on the network. Everything touching the
//! store is synchronous and takes `&mut self` when it mutates, so two mutations on
//! the same API can never interleave.

use crate::commands;
use crate::error::Result;
use crate::lookup::{DictionarySource, LookupClient};
use crate::model::Entry;
use crate::store::{EntryStore, StorageBackend};

pub struct WordbookApi<B: StorageBackend, S: DictionarySource> {
    store: EntryStore<B>,
    lookup: LookupClient<S>,
}

impl<B: StorageBackend, S: DictionarySource> WordbookApi<B, S> {
    pub fn new(store: EntryStore<B>, lookup: LookupClient<S>) -> Self {
        Self { store, lookup }
    }

    pub fn store(&self) -> &EntryStore<B> {
        &self.store
    }

    pub async fn lookup(&self, word: &str) -> Result<commands::CmdResult> {
        commands::lookup::run(&self.store, &self.lookup, word).await
    }

    pub async fn save(&mut self, word: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.lookup, word).await
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, entry)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show(&self, word: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, word)
    }

    pub fn rename(&mut self, old_word: &str, new_word: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, old_word, new_word)
    }

    pub fn remove(&mut self, word: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, word)
    }

    pub fn reload(&mut self) -> Result<commands::CmdResult> {
        commands::reload::run(&mut self.store)
    }
}
