use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut EntryStore<B>,
    old_word: &str,
    new_word: &str,
) -> Result<CmdResult> {
    let renamed = store.rename(old_word, new_word)?;
    let mut result = CmdResult::default();
    if old_word == new_word {
        result.add_message(CmdMessage::info(format!("\"{}\" is unchanged.", old_word)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Renamed \"{}\" to \"{}\".",
            old_word, new_word
        )));
        result.affected_entries.push(renamed);
    }
    Ok(result)
}
