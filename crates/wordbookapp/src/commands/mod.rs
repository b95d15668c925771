//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over the store
//! and/or lookup client. Commands return [`CmdResult`], never strings:
//!
//! - `listed_entries`: Entries to display (lookup result, saved list, one entry)
//! - `affected_entries`: Entries an operation added, renamed or removed
//! - `messages`: Leveled messages for the UI to render
//!
//! Commands do no terminal I/O and do not decide exit codes. Failures the user
//! should simply be told about (a word that is already saved, a corrupt blob that
//! was recovered) become messages; everything else is returned as an error.
//!
//! ## Command Modules
//!
//! - [`lookup`]: Look a word up without saving it
//! - [`save`]: Look a word up and save the result
//! - [`add`]: Save an already obtained entry
//! - [`list`]: Saved entries, oldest first
//! - [`show`]: One saved entry
//! - [`rename`]: Change the word of a saved entry
//! - [`remove`]: Delete a saved entry
//! - [`reload`]: Re-read saved entries from storage

use crate::model::Entry;
use serde::Serialize;

pub mod add;
pub mod list;
pub mod lookup;
pub mod reload;
pub mod remove;
pub mod rename;
pub mod save;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_entries: Vec<Entry>,
    pub affected_entries: Vec<Entry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
