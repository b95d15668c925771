use crate::commands::CmdResult;
use crate::error::{Result, WordbookError};
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &EntryStore<B>, word: &str) -> Result<CmdResult> {
    let entry = store
        .get(word)
        .cloned()
        .ok_or_else(|| WordbookError::NotFound(word.to_string()))?;
    Ok(CmdResult::default().with_listed_entries(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_entry;

    #[test]
    fn shows_saved_entry() {
        let (mut store, _) = EntryStore::open(MemBackend::new());
        store.add(sample_entry("cat", "a feline")).unwrap();

        let result = run(&store, "cat").unwrap();
        assert_eq!(result.listed_entries[0].word, "cat");
    }

    #[test]
    fn unknown_word_is_not_found() {
        let (store, _) = EntryStore::open(MemBackend::new());
        assert!(matches!(run(&store, "cat"), Err(WordbookError::NotFound(_))));
    }
}
