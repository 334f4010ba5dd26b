mod final_card;
mod flashcard;
mod navbar;
mod progress_bar;

pub use final_card::FinalCard;
pub use flashcard::FlashcardView;
pub use navbar::AppNavbar;
pub use progress_bar::ProgressBar;
