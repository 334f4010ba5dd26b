#![forbid(unsafe_code)]

pub mod model;

pub use model::{CardId, Flashcard, FlashcardRecord, Score, Theme};
