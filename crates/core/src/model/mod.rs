mod flashcard;
mod ids;
mod score;
mod theme;

pub use flashcard::{Flashcard, FlashcardRecord};
pub use ids::CardId;
pub use score::Score;
pub use theme::{THEME_PREFERENCE_KEY, Theme, ThemeParseError};
