//! # Context Wiring
//!
//! [`initialize`] assembles everything a client needs for one session:
//!
//! 1. Locate the OS config directory (via the `directories` crate) and load
//!    `wordbook.toml` plus environment overrides.
//! 2. Resolve the data directory:
//!    - `data_override` (the CLI's `--data`) if given,
//!    - else `data_dir` from config,
//!    - else the OS data directory.
//! 3. Open the [`EntryStore`] over an [`FsBackend`] rooted there. Opening reloads the
//!    saved collection; a corrupt or unreadable blob becomes `startup_warning`.
//! 4. Build the [`HttpSource`] lookup client from config.

use crate::api::WordbookApi;
use crate::config::{WordbookConfig, CONFIG_FILE_NAME};
use crate::error::{Result, WordbookError};
use crate::lookup::{HttpSource, LookupClient};
use crate::store::fs_backend::FsBackend;
use crate::store::{EntryStore, StorageWarning};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub struct WordbookContext {
    pub api: WordbookApi<FsBackend, HttpSource>,
    pub config: WordbookConfig,
    pub data_dir: PathBuf,
    pub startup_warning: Option<StorageWarning>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "wordbook", "wordbook")
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<WordbookContext> {
    let dirs = project_dirs();
    let config_file = dirs.as_ref().map(|d| d.config_dir().join(CONFIG_FILE_NAME));
    let config = WordbookConfig::load(config_file.as_deref())?;

    let default_data_dir = dirs.as_ref().map(|d| d.data_dir().to_path_buf());
    let data_dir = resolve_data_dir(data_override, &config, default_data_dir)?;

    initialize_with(config, data_dir)
}

/// Pick the data directory: explicit override, then config, then OS default.
pub fn resolve_data_dir(
    data_override: Option<PathBuf>,
    config: &WordbookConfig,
    default_data_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    data_override
        .or_else(|| config.data_dir.clone())
        .or(default_data_dir)
        .ok_or_else(|| {
            WordbookError::Config(
                "could not determine a data directory; set WORDBOOK_DATA_DIR or pass --data"
                    .to_string(),
            )
        })
}

/// Build a context from an already resolved config and data directory.
pub fn initialize_with(config: WordbookConfig, data_dir: PathBuf) -> Result<WordbookContext> {
    debug!(data_dir = %data_dir.display(), api_url = config.api_url.as_str(), "initializing");

    let (store, startup_warning) = EntryStore::open(FsBackend::new(data_dir.clone()));
    let source = HttpSource::from_config(&config)?;
    let api = WordbookApi::new(store, LookupClient::new(source));

    Ok(WordbookContext {
        api,
        config,
        data_dir,
        startup_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SAVED_WORDS_KEY;
    use crate::test_utils::{sample_entry, TestEnv};
    use std::fs;

    #[test]
    fn override_wins_over_config_and_default() {
        let config = WordbookConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(
            Some(PathBuf::from("/from/flag")),
            &config,
            Some(PathBuf::from("/from/os")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn config_wins_over_default() {
        let config = WordbookConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(None, &config, Some(PathBuf::from("/from/os"))).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn no_directory_at_all_is_config_error() {
        let result = resolve_data_dir(None, &WordbookConfig::default(), None);
        assert!(matches!(result, Err(WordbookError::Config(_))));
    }

    #[test]
    fn initialize_with_loads_existing_words() {
        let env = TestEnv::new();
        fs::write(
            env.root.join(format!("{}.json", SAVED_WORDS_KEY)),
            r#"[{"word":"cat","phonetics":[],"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a feline"}]}]}]"#,
        )
        .unwrap();

        let ctx = initialize_with(WordbookConfig::default(), env.root.clone()).unwrap();
        assert!(ctx.startup_warning.is_none());
        assert!(ctx.api.store().contains("cat"));
    }

    #[test]
    fn words_added_through_context_are_on_disk() {
        let env = TestEnv::new();
        let mut ctx = initialize_with(WordbookConfig::default(), env.root.clone()).unwrap();
        ctx.api.add_entry(sample_entry("cat", "a feline")).unwrap();

        let fresh = env.open_store();
        assert!(fresh.contains("cat"));
    }

    #[test]
    fn initialize_with_surfaces_corruption() {
        let env = TestEnv::new();
        fs::write(env.root.join(format!("{}.json", SAVED_WORDS_KEY)), "garbage").unwrap();

        let ctx = initialize_with(WordbookConfig::default(), env.root.clone()).unwrap();
        assert!(matches!(
            ctx.startup_warning,
            Some(StorageWarning::Corrupt { .. })
        ));
        assert!(ctx.api.store().list().is_empty());
    }
}
