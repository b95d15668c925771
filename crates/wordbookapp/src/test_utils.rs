use crate::error::Result;
use crate::lookup::{DictionarySource, SourceReply};
use crate::model::{Definition, Entry, Meaning};
use crate::store::fs_backend::FsBackend;
use crate::store::EntryStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A fresh store over this environment's directory, as a new process would open it.
    pub fn open_store(&self) -> EntryStore<FsBackend> {
        let (store, _) = EntryStore::open(FsBackend::new(self.root.clone()));
        store
    }
}

/// Dictionary source answering from a fixed set of entries.
#[derive(Default, Clone)]
pub struct StaticSource {
    documents: HashMap<String, Vec<Entry>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.documents
            .entry(entry.word.clone())
            .or_default()
            .push(entry);
        self
    }
}

#[async_trait]
impl DictionarySource for StaticSource {
    async fn fetch(&self, word: &str) -> Result<SourceReply> {
        match self.documents.get(word) {
            Some(entries) => Ok(SourceReply::Found(serde_json::to_string(entries)?)),
            None => Ok(SourceReply::NotFound),
        }
    }
}

/// Single-meaning noun entry.
pub fn sample_entry(word: &str, definition: &str) -> Entry {
    Entry::new(
        word,
        vec![Meaning::new("noun", vec![Definition::new(definition)])],
    )
}
