use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut EntryStore<B>) -> Result<CmdResult> {
    let reloaded = store.reload();
    let mut result = CmdResult::default();
    if let Some(warning) = reloaded.warning {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }
    result.add_message(CmdMessage::info(format!(
        "Loaded {} saved word{}.",
        reloaded.entries.len(),
        if reloaded.entries.len() == 1 { "" } else { "s" }
    )));
    Ok(result.with_listed_entries(reloaded.entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;
    use crate::store::SAVED_WORDS_KEY;
    use crate::test_utils::sample_entry;

    #[test]
    fn reports_entries_from_storage() {
        let backend = MemBackend::new();
        let (mut writer, _) = EntryStore::open(backend.clone());
        let (mut reader, _) = EntryStore::open(backend);
        writer.add(sample_entry("cat", "a feline")).unwrap();

        let result = run(&mut reader).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.messages[0].content, "Loaded 1 saved word.");
    }

    #[test]
    fn corrupt_storage_is_a_warning() {
        let backend = MemBackend::new();
        let (mut store, _) = EntryStore::open(backend.clone());
        backend.put_raw(SAVED_WORDS_KEY, "[{]");

        let result = run(&mut store).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("corrupt"));
    }
}
