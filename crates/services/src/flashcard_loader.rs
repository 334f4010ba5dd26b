use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use kartei_core::model::{CardId, Flashcard, FlashcardRecord};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::LoadError;

/// Public flashcard collection the quiz reads when nothing else is configured.
pub const DEFAULT_FLASHCARDS_URL: &str =
    "https://fh-salzburg-3e27a-default-rtdb.europe-west1.firebasedatabase.app/flashcards.json";

const ENDPOINT_ENV: &str = "KARTEI_FLASHCARDS_URL";

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    endpoint: Url,
}

impl LoaderConfig {
    /// Parse an endpoint URL. Only `http` and `https` are accepted.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidEndpoint` if the URL does not parse or uses
    /// another scheme.
    pub fn new(raw: &str) -> Result<Self, LoadError> {
        let endpoint =
            Url::parse(raw.trim()).map_err(|_| LoadError::InvalidEndpoint(raw.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(LoadError::InvalidEndpoint(raw.to_string()));
        }
        Ok(Self { endpoint })
    }

    /// Read `KARTEI_FLASHCARDS_URL`, falling back to the public collection.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidEndpoint` if the variable holds an unusable URL.
    pub fn from_env() -> Result<Self, LoadError> {
        let raw = env::var(ENDPOINT_ENV)
            .ok()
            .filter(|raw| !raw.trim().is_empty());
        Self::new(raw.as_deref().unwrap_or(DEFAULT_FLASHCARDS_URL))
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

//
// ─── SOURCES ───────────────────────────────────────────────────────────────────
//

/// Where raw flashcard documents come from.
#[async_trait]
pub trait FlashcardSource: Send + Sync {
    /// Fetch the raw JSON document.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the document cannot be retrieved or decoded as JSON.
    async fn fetch(&self) -> Result<Value, LoadError>;
}

/// Plain GET against the configured endpoint. No auth, no retries.
#[derive(Clone)]
pub struct HttpFlashcardSource {
    client: Client,
    config: LoaderConfig,
}

impl HttpFlashcardSource {
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl FlashcardSource for HttpFlashcardSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        let response = self
            .client
            .get(self.config.endpoint().clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| LoadError::Parse(err.to_string()))
    }
}

//
// ─── NORMALIZATION ─────────────────────────────────────────────────────────────
//

/// Turn a raw document into an ordered card list.
///
/// `null` is an empty collection. Objects contribute their values in document
/// order; arrays their elements. `null` entries and records that do not match
/// `FlashcardRecord` are skipped, and ids count the surviving records from 1.
///
/// # Errors
///
/// Returns `LoadError::Parse` for any other top-level shape.
pub fn normalize_flashcards(document: Value) -> Result<Vec<Flashcard>, LoadError> {
    let entries: Vec<Value> = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
        Value::Array(items) => items,
        other => {
            return Err(LoadError::Parse(format!(
                "expected an object or array of flashcards, found {}",
                json_kind(&other)
            )));
        }
    };

    let cards = entries
        .into_iter()
        .filter(|value| !value.is_null())
        .enumerate()
        .filter_map(|(position, value)| {
            serde_json::from_value::<FlashcardRecord>(value)
                .inspect_err(|err| log::warn!("skipping flashcard #{}: {err}", position + 1))
                .ok()
        })
        .enumerate()
        .map(|(position, record)| record.into_flashcard(CardId::from_position(position)))
        .collect();
    Ok(cards)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//
// ─── LOADER ────────────────────────────────────────────────────────────────────
//

/// Outcome of a load that never fails outward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedFlashcards {
    pub cards: Vec<Flashcard>,
    /// Set when the list is empty because loading failed, not because the
    /// collection was empty.
    pub failed: bool,
}

impl LoadedFlashcards {
    #[must_use]
    pub fn loaded(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            failed: false,
        }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self {
            cards: Vec::new(),
            failed: true,
        }
    }
}

#[derive(Clone)]
pub struct FlashcardLoader {
    source: Arc<dyn FlashcardSource>,
}

impl FlashcardLoader {
    #[must_use]
    pub fn new(source: Arc<dyn FlashcardSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn http(config: LoaderConfig) -> Self {
        Self::new(Arc::new(HttpFlashcardSource::new(config)))
    }

    /// Fetch and normalize the flashcards.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` for transport, status or payload failures.
    pub async fn load(&self) -> Result<Vec<Flashcard>, LoadError> {
        let document = self.source.fetch().await?;
        normalize_flashcards(document)
    }

    /// Like [`FlashcardLoader::load`], but any failure is logged and degrades
    /// to an empty list flagged as failed.
    pub async fn load_or_empty(&self) -> LoadedFlashcards {
        match self.load().await {
            Ok(cards) => {
                log::info!("loaded {} flashcards", cards.len());
                LoadedFlashcards::loaded(cards)
            }
            Err(err) => {
                log::error!("failed to load flashcards: {err}");
                LoadedFlashcards::failed()
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
