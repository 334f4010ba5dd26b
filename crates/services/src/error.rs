//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while fetching or normalizing flashcards.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("invalid flashcard endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("flashcard request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed flashcard payload: {0}")]
    Parse(String),
}

/// Errors emitted by `ThemeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
