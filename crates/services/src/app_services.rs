use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::flashcard_loader::{FlashcardLoader, LoaderConfig};
use crate::quiz::QuizLoopService;
use crate::theme_service::ThemeService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_loop: Arc<QuizLoopService>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services with the preference store backed by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        loader_config: LoaderConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(&storage, FlashcardLoader::http(loader_config)))
    }

    /// Wire services over an already-built storage and loader.
    #[must_use]
    pub fn from_parts(storage: &Storage, loader: FlashcardLoader) -> Self {
        Self {
            quiz_loop: Arc::new(QuizLoopService::new(loader)),
            theme: Arc::new(ThemeService::new(Arc::clone(&storage.preferences))),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
