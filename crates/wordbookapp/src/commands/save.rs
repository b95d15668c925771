use crate::commands::{add, CmdResult};
use crate::error::Result;
use crate::lookup::{DictionarySource, LookupClient};
use crate::store::{EntryStore, StorageBackend};

/// Look `word` up and save the first candidate.
pub async fn run<B: StorageBackend, S: DictionarySource>(
    store: &mut EntryStore<B>,
    client: &LookupClient<S>,
    word: &str,
) -> Result<CmdResult> {
    let entry = client.lookup(word).await?;
    let mut result = add::run(store, entry.clone())?;
    result.listed_entries.push(entry);
    Ok(result)
}
