use serde::{Deserialize, Serialize};

use crate::model::ids::CardId;

//
// ─── WIRE RECORD ───────────────────────────────────────────────────────────────
//

/// Raw card record as published by the remote flashcard store.
///
/// The payload is trusted: `correct_index` is not checked against `choices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardRecord {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl FlashcardRecord {
    /// Attach a display ordinal and start with a clean answer state.
    #[must_use]
    pub fn into_flashcard(self, id: CardId) -> Flashcard {
        Flashcard {
            id,
            question: self.question,
            choices: self.choices,
            correct_index: self.correct_index,
            user_answer: None,
            postponed: false,
        }
    }
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// One quiz question together with the user's answer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    id: CardId,
    question: String,
    choices: Vec<String>,
    correct_index: usize,
    user_answer: Option<usize>,
    postponed: bool,
}

impl Flashcard {
    #[must_use]
    pub fn new(
        id: CardId,
        question: impl Into<String>,
        choices: Vec<String>,
        correct_index: usize,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            choices,
            correct_index,
            user_answer: None,
            postponed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_choice(&self) -> Option<&str> {
        self.choice(self.correct_index)
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<usize> {
        self.user_answer
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.user_answer == Some(self.correct_index)
    }

    #[must_use]
    pub fn is_postponed(&self) -> bool {
        self.postponed
    }

    /// Overwrites the stored answer.
    ///
    /// Once-only answering is a session rule; the card itself does not guard it.
    pub fn set_user_answer(&mut self, choice_index: usize) {
        self.user_answer = Some(choice_index);
    }

    pub fn clear_user_answer(&mut self) {
        self.user_answer = None;
    }

    pub fn mark_postponed(&mut self) {
        self.postponed = true;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
