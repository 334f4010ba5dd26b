use std::fmt;

use kartei_core::model::{Flashcard, Score};

use super::progress::progress_percent;
use super::summary::ScoreSummary;
use crate::flashcard_loader::LoadedFlashcards;

//
// ─── PHASES AND INTENTS ────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the initial load to resolve.
    Loading,
    /// The cursor points at a card that accepts input.
    Active,
    /// Every card has been passed.
    Complete { revealed: bool },
}

/// User actions the presentation layer can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer {
        card_index: usize,
        choice_index: usize,
    },
    Postpone {
        card_index: usize,
    },
    Advance,
    RevealResults,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz over a loaded card list.
///
/// Every operation is total: calls that are not legal in the current state
/// leave the session untouched and report `false` (or `None`).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    cards: Vec<Flashcard>,
    current: usize,
    loaded: bool,
    load_failed: bool,
    results_revealed: bool,
}

impl QuizSession {
    /// A session still waiting for its cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that is already past loading.
    #[must_use]
    pub fn from_cards(cards: Vec<Flashcard>) -> Self {
        let mut session = Self::new();
        session.finish_loading(LoadedFlashcards::loaded(cards));
        session
    }

    /// Leave `Loading` with the loader's result. Ignored once loaded.
    pub fn finish_loading(&mut self, loaded: LoadedFlashcards) -> bool {
        if self.loaded {
            return false;
        }

        let LoadedFlashcards { mut cards, failed } = loaded;
        for card in &mut cards {
            card.clear_user_answer();
        }

        self.cards = cards;
        self.current = 0;
        self.loaded = true;
        self.load_failed = failed;
        log::debug!(
            "quiz loaded with {} cards (failed: {failed})",
            self.cards.len()
        );
        true
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if !self.loaded {
            QuizPhase::Loading
        } else if self.current >= self.cards.len() {
            QuizPhase::Complete {
                revealed: self.results_revealed,
            }
        } else {
            QuizPhase::Active
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn focused_card(&self) -> Option<&Flashcard> {
        if self.phase() == QuizPhase::Active {
            self.cards.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True when the card list is empty because loading failed.
    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase(), QuizPhase::Complete { .. })
    }

    #[must_use]
    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    /// `min((current + 1) / total * 100, 100)`, or 0 without cards.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current, self.cards.len())
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score::from_cards(&self.cards)
    }

    /// Per-card breakdown, available once results have been revealed.
    #[must_use]
    pub fn summary(&self) -> Option<ScoreSummary> {
        self.results_revealed
            .then(|| ScoreSummary::from_cards(&self.cards))
    }

    /// Dispatch a user intent. Returns whether the state changed.
    pub fn apply(&mut self, intent: QuizIntent) -> bool {
        match intent {
            QuizIntent::Answer {
                card_index,
                choice_index,
            } => self.answer(card_index, choice_index),
            QuizIntent::Postpone { card_index } => self.postpone(card_index),
            QuizIntent::Advance => self.advance(),
            QuizIntent::RevealResults => {
                let was_revealed = self.results_revealed;
                self.reveal_results().is_some() && !was_revealed
            }
        }
    }

    /// Record the answer for the focused card.
    ///
    /// Ignored unless `card_index` is the focused card, that card has no
    /// answer yet, and `choice_index` names one of its choices.
    pub fn answer(&mut self, card_index: usize, choice_index: usize) -> bool {
        let Some(card) = self.focused_card_mut(card_index) else {
            return false;
        };
        if card.is_answered() || choice_index >= card.choices().len() {
            return false;
        }

        card.set_user_answer(choice_index);
        log::debug!("card {} answered with choice {choice_index}", card.id());
        true
    }

    /// Move the focused, unanswered card to the end of the list.
    ///
    /// The cursor stays put, so the following card slides into focus.
    pub fn postpone(&mut self, card_index: usize) -> bool {
        match self.focused_card_mut(card_index) {
            Some(card) if !card.is_answered() => card.mark_postponed(),
            _ => return false,
        }

        let card = self.cards.remove(card_index);
        log::debug!("card {} postponed", card.id());
        self.cards.push(card);
        true
    }

    /// Step past the focused card once it has been answered.
    pub fn advance(&mut self) -> bool {
        let answered = self
            .focused_card()
            .is_some_and(Flashcard::is_answered);
        if !answered {
            return false;
        }

        if self.current + 1 < self.cards.len() {
            self.current += 1;
        } else {
            self.current = self.cards.len();
            log::debug!("quiz complete");
        }
        true
    }

    /// Reveal the final score. Only possible once the quiz is complete;
    /// repeated calls return the same score.
    pub fn reveal_results(&mut self) -> Option<Score> {
        if !self.is_complete() {
            return None;
        }
        if !self.results_revealed {
            self.results_revealed = true;
            log::debug!("results revealed");
        }
        Some(self.score())
    }

    fn focused_card_mut(&mut self, card_index: usize) -> Option<&mut Flashcard> {
        if self.phase() != QuizPhase::Active || card_index != self.current {
            return None;
        }
        self.cards.get_mut(card_index)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("cards_len", &self.cards.len())
            .field("current", &self.current)
            .field("loaded", &self.loaded)
            .field("load_failed", &self.load_failed)
            .field("results_revealed", &self.results_revealed)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
