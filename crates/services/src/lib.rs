#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod flashcard_loader;
pub mod quiz;
pub mod theme_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, LoadError, ThemeServiceError};
pub use flashcard_loader::{
    DEFAULT_FLASHCARDS_URL, FlashcardLoader, FlashcardSource, HttpFlashcardSource,
    LoadedFlashcards, LoaderConfig, normalize_flashcards,
};
pub use quiz::{
    CardResult, QuizIntent, QuizLoopService, QuizPhase, QuizSession, ScoreSummary,
};
pub use theme_service::{ThemeService, resolve_theme};
