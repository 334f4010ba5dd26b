use crate::flashcard_loader::FlashcardLoader;

use super::service::QuizSession;

/// Orchestrates the startup load into a ready quiz session.
#[derive(Clone)]
pub struct QuizLoopService {
    loader: FlashcardLoader,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(loader: FlashcardLoader) -> Self {
        Self { loader }
    }

    /// Load the flashcards and leave the `Loading` phase.
    ///
    /// Load failures never surface here; they yield an empty, completed quiz
    /// whose `load_failed()` is set.
    pub async fn start_session(&self) -> QuizSession {
        let loaded = self.loader.load_or_empty().await;
        let mut session = QuizSession::new();
        session.finish_loading(loaded);
        session
    }
}
