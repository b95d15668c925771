use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut EntryStore<B>, word: &str) -> Result<CmdResult> {
    let removed = store.remove(word)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed \"{}\".", removed.word)));
    Ok(result.with_affected_entries(vec![removed]))
}
