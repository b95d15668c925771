//! # Dictionary Lookups
//!
//! [`LookupClient`] turns a word into a single validated [`Entry`]. The remote
//! service sits behind the [`DictionarySource`] trait so the client logic can be
//! exercised without a network; [`HttpSource`] is the production source.
//!
//! One attempt per call. Retrying is up to the caller.

use crate::config::WordbookConfig;
use crate::error::{Result, WordbookError};
use crate::model::Entry;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// What the remote boundary answered for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceReply {
    /// Raw response body; expected to be a JSON array of entries.
    Found(String),
    NotFound,
}

/// Remote dictionary provider interface
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch the raw document for an already trimmed, non-empty word.
    async fn fetch(&self, word: &str) -> Result<SourceReply>;
}

/// Source backed by a dictionaryapi.dev-compatible HTTP endpoint.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| WordbookError::Config(format!("invalid api_url {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(WordbookError::Config(format!(
                "api_url {} cannot be used as a base URL",
                base_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WordbookError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &WordbookConfig) -> Result<Self> {
        Self::new(&config.api_url, config.timeout())
    }

    /// URL for a word, with the word as a single escaped path segment.
    pub fn word_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self, word: &str) -> Result<SourceReply> {
        let url = self.word_url(word);
        debug!(url = url.as_str(), "dictionary request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WordbookError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(SourceReply::NotFound);
        }
        if !status.is_success() {
            return Err(WordbookError::Transport(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WordbookError::Transport(e.to_string()))?;
        Ok(SourceReply::Found(body))
    }
}

pub struct LookupClient<S: DictionarySource> {
    source: S,
}

impl<S: DictionarySource> LookupClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look a word up and return its first candidate entry.
    ///
    /// The service may return several homographs; only the first is kept.
    pub async fn lookup(&self, word: &str) -> Result<Entry> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordbookError::InvalidInput(
                "word to look up cannot be empty".to_string(),
            ));
        }

        match self.source.fetch(word).await? {
            SourceReply::NotFound => Err(WordbookError::NotFound(word.to_string())),
            SourceReply::Found(body) => first_candidate(word, &body),
        }
    }
}

fn first_candidate(word: &str, body: &str) -> Result<Entry> {
    let candidates: Vec<Entry> =
        serde_json::from_str(body).map_err(|e| WordbookError::MalformedResponse(e.to_string()))?;

    let total = candidates.len();
    let entry = candidates
        .into_iter()
        .next()
        .ok_or_else(|| WordbookError::NotFound(word.to_string()))?;
    entry
        .validate()
        .map_err(|e| WordbookError::MalformedResponse(e.to_string()))?;

    if total > 1 {
        debug!(word = word, discarded = total - 1, "keeping first of several homographs");
    }
    debug!(
        word = word,
        meanings = entry.meanings.len(),
        definitions = entry.definition_count(),
        "lookup resolved"
    );
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned replies keyed by word; records every word it was asked for.
    #[derive(Default)]
    struct FakeSource {
        replies: HashMap<String, SourceReply>,
        fail_transport: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn with_body(word: &str, body: &str) -> Self {
            let mut source = Self::default();
            source
                .replies
                .insert(word.to_string(), SourceReply::Found(body.to_string()));
            source
        }
    }

    #[async_trait]
    impl DictionarySource for FakeSource {
        async fn fetch(&self, word: &str) -> Result<SourceReply> {
            self.calls.lock().unwrap().push(word.to_string());
            if self.fail_transport {
                return Err(WordbookError::Transport("connection refused".to_string()));
            }
            Ok(self
                .replies
                .get(word)
                .cloned()
                .unwrap_or(SourceReply::NotFound))
        }
    }

    const TWO_HOMOGRAPHS: &str = r#"[
        {"word":"bank","phonetics":[{"text":"/bæŋk/"}],"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"edge of a river"}]}]},
        {"word":"bank","phonetics":[],"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"financial institution"}]}]}
    ]"#;

    #[tokio::test]
    async fn returns_first_candidate() {
        let client = LookupClient::new(FakeSource::with_body("bank", TWO_HOMOGRAPHS));
        let entry = client.lookup("bank").await.unwrap();
        assert_eq!(entry.word, "bank");
        assert_eq!(
            entry.preview_definition().unwrap().definition,
            "edge of a river"
        );
    }

    #[tokio::test]
    async fn trims_input_before_fetching() {
        let client = LookupClient::new(FakeSource::with_body("bank", TWO_HOMOGRAPHS));
        client.lookup("  bank\n").await.unwrap();
        assert_eq!(*client.source().calls.lock().unwrap(), vec!["bank"]);
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_fetching() {
        let client = LookupClient::new(FakeSource::default());
        let result = client.lookup("   ").await;
        assert!(matches!(result, Err(WordbookError::InvalidInput(_))));
        assert!(client.source().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn not_found_reply_maps_to_not_found() {
        let client = LookupClient::new(FakeSource::default());
        let result = client.lookup("qwxz").await;
        assert!(matches!(result, Err(WordbookError::NotFound(w)) if w == "qwxz"));
    }

    #[tokio::test]
    async fn empty_array_maps_to_not_found() {
        let client = LookupClient::new(FakeSource::with_body("void", "[]"));
        assert!(matches!(
            client.lookup("void").await,
            Err(WordbookError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let source = FakeSource {
            fail_transport: true,
            ..Default::default()
        };
        let client = LookupClient::new(source);
        assert!(matches!(
            client.lookup("cat").await,
            Err(WordbookError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn missing_meanings_is_malformed() {
        let client = LookupClient::new(FakeSource::with_body(
            "cat",
            r#"[{"word":"cat","phonetics":[]}]"#,
        ));
        assert!(matches!(
            client.lookup("cat").await,
            Err(WordbookError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn empty_meanings_is_malformed() {
        let client = LookupClient::new(FakeSource::with_body(
            "cat",
            r#"[{"word":"cat","meanings":[]}]"#,
        ));
        assert!(matches!(
            client.lookup("cat").await,
            Err(WordbookError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn wrong_field_types_are_malformed() {
        let client = LookupClient::new(FakeSource::with_body(
            "cat",
            r#"[{"word":"cat","meanings":"lots"}]"#,
        ));
        assert!(matches!(
            client.lookup("cat").await,
            Err(WordbookError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let client = LookupClient::new(FakeSource::with_body("cat", "<html>oops</html>"));
        assert!(matches!(
            client.lookup("cat").await,
            Err(WordbookError::MalformedResponse(_))
        ));
    }

    #[test]
    fn word_url_escapes_the_word() {
        let source = HttpSource::new(
            "https://api.dictionaryapi.dev/api/v2/entries/en",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            source.word_url("hello").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
        assert_eq!(
            source.word_url("ice cream").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );
        assert_eq!(
            source.word_url("a/b").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/a%2Fb"
        );
    }

    #[test]
    fn word_url_tolerates_trailing_slash() {
        let source =
            HttpSource::new("http://localhost:8080/entries/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            source.word_url("cat").as_str(),
            "http://localhost:8080/entries/cat"
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        assert!(matches!(
            HttpSource::new("not a url", Duration::from_secs(1)),
            Err(WordbookError::Config(_))
        ));
        assert!(matches!(
            HttpSource::new("mailto:someone@example.com", Duration::from_secs(1)),
            Err(WordbookError::Config(_))
        ));
    }
}
