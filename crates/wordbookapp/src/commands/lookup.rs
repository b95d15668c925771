use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::{DictionarySource, LookupClient};
use crate::store::{EntryStore, StorageBackend};

/// Look `word` up without saving it. Notes when the word is already saved.
pub async fn run<B: StorageBackend, S: DictionarySource>(
    store: &EntryStore<B>,
    client: &LookupClient<S>,
    word: &str,
) -> Result<CmdResult> {
    let entry = client.lookup(word).await?;
    let mut result = CmdResult::default();
    if store.contains(&entry.word) {
        result.add_message(CmdMessage::info(format!(
            "\"{}\" is in your wordbook.",
            entry.word
        )));
    }
    result.listed_entries.push(entry);
    Ok(result)
}
