use kartei_core::model::{CardId, Flashcard, Score};

/// One row of the final breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardResult {
    pub id: CardId,
    pub question: String,
    pub chosen: Option<String>,
    pub correct: Option<String>,
    pub is_correct: bool,
    pub postponed: bool,
}

impl From<&Flashcard> for CardResult {
    fn from(card: &Flashcard) -> Self {
        Self {
            id: card.id(),
            question: card.question().to_string(),
            chosen: card
                .user_answer()
                .and_then(|index| card.choice(index))
                .map(str::to_string),
            correct: card.correct_choice().map(str::to_string),
            is_correct: card.is_correct(),
            postponed: card.is_postponed(),
        }
    }
}

/// Score plus per-card results in final card order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: Score,
    pub results: Vec<CardResult>,
}

impl ScoreSummary {
    #[must_use]
    pub fn from_cards(cards: &[Flashcard]) -> Self {
        Self {
            score: Score::from_cards(cards),
            results: cards.iter().map(CardResult::from).collect(),
        }
    }
}
