use crate::model::flashcard::Flashcard;

/// Final tally of a quiz run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn from_cards(cards: &[Flashcard]) -> Self {
        let correct = cards.iter().filter(|card| card.is_correct()).count();
        Self::new(correct, cards.len())
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Integer percentage, rounded half-up. An empty quiz scores 0.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let correct = self.correct as u128;
        let total = self.total as u128;
        let rounded = (correct * 200 + total) / (total * 2);
        u8::try_from(rounded).unwrap_or(100)
    }
}
