//! # Configuration
//!
//! Wordbook configuration is managed by [`confique`], which layers environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `WORDBOOK_API_URL`, `WORDBOOK_TIMEOUT_SECS`, `WORDBOOK_DATA_DIR`.
//! 2. **Config file**: `wordbook.toml` in the OS-appropriate config directory.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! A `--data` flag on the CLI overrides `data_dir` on top of all of these.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_url` | `https://api.dictionaryapi.dev/api/v2/entries/en` | Base URL; the word is appended as a path segment |
//! | `timeout_secs` | `10` | Per-request timeout for lookups |
//! | `data_dir` | OS data directory | Where `savedWords.json` lives |

use crate::error::{Result, WordbookError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const CONFIG_FILE_NAME: &str = "wordbook.toml";

/// Configuration for wordbook, stored in `wordbook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordbookConfig {
    /// Base URL of the dictionary service.
    #[config(env = "WORDBOOK_API_URL", default = "https://api.dictionaryapi.dev/api/v2/entries/en")]
    pub api_url: String,

    /// Lookup timeout in seconds.
    #[config(env = "WORDBOOK_TIMEOUT_SECS", default = 10)]
    pub timeout_secs: u64,

    /// Directory holding the saved words. Defaults to the OS data directory.
    #[config(env = "WORDBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for WordbookConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 10,
            data_dir: None,
        }
    }
}

impl WordbookConfig {
    /// Load from the environment and, when given, `file`. A missing file is not an error.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| WordbookError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
