use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &EntryStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(store.list().to_vec()))
}
