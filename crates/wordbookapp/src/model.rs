//! # Data Model
//!
//! The types mirror the JSON documents served by the dictionary service, using its
//! camelCase field names so a persisted collection is the same array of objects the
//! service returned. Optional collections default to empty and are left out of the
//! serialized form when empty.
//!
//! Nothing here assumes a minimum number of meanings, definitions or phonetics:
//! the read helpers ([`Entry::primary_phonetic`], [`Entry::preview_definition`])
//! return `Option` instead of indexing.

use crate::error::{Result, WordbookError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

impl Definition {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            ..Default::default()
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>, definitions: Vec<Definition>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definitions,
            ..Default::default()
        }
    }
}

/// A word's dictionary record.
///
/// `word` is the identity inside a saved collection and is compared by exact,
/// case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl Entry {
    pub fn new(word: impl Into<String>, meanings: Vec<Meaning>) -> Self {
        Self {
            word: word.into(),
            meanings,
            ..Default::default()
        }
    }

    pub fn with_phonetic(mut self, text: impl Into<String>, audio: Option<String>) -> Self {
        self.phonetics.push(Phonetic {
            text: Some(text.into()),
            audio,
        });
        self
    }

    /// Checks the shape every usable entry must have: a non-blank word and at
    /// least one meaning.
    pub fn validate(&self) -> Result<()> {
        if self.word.trim().is_empty() {
            return Err(WordbookError::InvalidInput(
                "entry word cannot be empty".to_string(),
            ));
        }
        if self.meanings.is_empty() {
            return Err(WordbookError::InvalidInput(format!(
                "entry \"{}\" has no meanings",
                self.word
            )));
        }
        Ok(())
    }

    /// Pronunciation text to show next to the word, if any.
    ///
    /// Prefers the first phonetic that carries text, then the top-level `phonetic`.
    pub fn primary_phonetic(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|p| p.text.as_deref().filter(|t| !t.trim().is_empty()))
            .or(self.phonetic.as_deref())
    }

    /// First definition available, scanning meanings in order.
    pub fn preview_definition(&self) -> Option<&Definition> {
        self.meanings.iter().find_map(|m| m.definitions.first())
    }

    pub fn definition_count(&self) -> usize {
        self.meanings.iter().map(|m| m.definitions.len()).sum()
    }

    /// Copy of this entry under a different word; everything else is kept.
    pub fn renamed(&self, new_word: impl Into<String>) -> Self {
        Self {
            word: new_word.into(),
            ..self.clone()
        }
    }
}
