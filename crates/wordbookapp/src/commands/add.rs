use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordbookError};
use crate::model::Entry;
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut EntryStore<B>, entry: Entry) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.add(entry.clone()) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Word \"{}\" saved!",
                entry.word
            )));
            result.affected_entries.push(entry);
        }
        Err(WordbookError::AlreadyExists(word)) => {
            result.add_message(CmdMessage::warning(format!(
                "Word \"{}\" is already saved.",
                word
            )));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_entry;

    #[test]
    fn saves_new_entry() {
        let (mut store, _) = EntryStore::open(MemBackend::new());
        let result = run(&mut store, sample_entry("cat", "a feline")).unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        assert!(result.has_level(MessageLevel::Success));
        assert!(store.contains("cat"));
    }

    #[test]
    fn duplicate_becomes_warning() {
        let (mut store, _) = EntryStore::open(MemBackend::new());
        run(&mut store, sample_entry("cat", "a feline")).unwrap();
        let result = run(&mut store, sample_entry("cat", "other")).unwrap();

        assert!(result.affected_entries.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("already saved"));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn storage_failure_is_an_error() {
        let backend = MemBackend::new();
        let (mut store, _) = EntryStore::open(backend.clone());
        backend.set_simulate_write_error(true);

        let result = run(&mut store, sample_entry("cat", "a feline"));
        assert!(matches!(result, Err(WordbookError::Storage(_))));
        assert!(store.list().is_empty());
    }
}
