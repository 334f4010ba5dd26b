mod components;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{AppNavbar, FinalCard, FlashcardView, ProgressBar};
pub use quiz::QuizView;
