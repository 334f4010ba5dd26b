use kartei_core::model::{CardId, Flashcard};
use services::QuizSession;

/// Depth step between stacked cards, in pixels along z.
const STACK_DEPTH_PX: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPlacement {
    /// Already answered and moved past.
    Passed,
    Focused,
    /// Waiting behind the focused card, `depth` positions back.
    Upcoming { depth: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    Open,
    Correct,
    Wrong,
    Neutral,
}

impl ChoiceState {
    fn class(self) -> &'static str {
        match self {
            ChoiceState::Open | ChoiceState::Neutral => "choice-btn",
            ChoiceState::Correct => "choice-btn correct",
            ChoiceState::Wrong => "choice-btn wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub state: ChoiceState,
}

impl ChoiceVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        self.state.class()
    }
}

/// UI-ready card for the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub index: usize,
    pub id: CardId,
    pub question: String,
    pub choices: Vec<ChoiceVm>,
    pub placement: CardPlacement,
    pub postponed: bool,
    pub answered: bool,
    stack_len: usize,
}

impl FlashcardVm {
    fn new(card: &Flashcard, index: usize, current: usize, stack_len: usize) -> Self {
        let placement = if index < current {
            CardPlacement::Passed
        } else if index == current {
            CardPlacement::Focused
        } else {
            CardPlacement::Upcoming {
                depth: index - current,
            }
        };

        let choices = card
            .choices()
            .iter()
            .enumerate()
            .map(|(choice_index, label)| ChoiceVm {
                index: choice_index,
                label: label.clone(),
                state: choice_state(card, choice_index),
            })
            .collect();

        Self {
            index,
            id: card.id(),
            question: card.question().to_string(),
            choices,
            placement,
            postponed: card.is_postponed(),
            answered: card.is_answered(),
            stack_len,
        }
    }

    /// Choices accept clicks only on the focused, unanswered card.
    #[must_use]
    pub fn accepts_answer(&self) -> bool {
        self.placement == CardPlacement::Focused && !self.answered
    }

    #[must_use]
    pub fn can_postpone(&self) -> bool {
        self.accepts_answer()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.placement == CardPlacement::Focused && self.answered
    }

    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("card");
        match self.placement {
            CardPlacement::Passed => class.push_str(" passed"),
            CardPlacement::Focused => class.push_str(" focused"),
            CardPlacement::Upcoming { .. } => class.push_str(" blurred"),
        }
        if self.postponed {
            class.push_str(" postponed");
        }
        class
    }

    #[must_use]
    pub fn style(&self) -> String {
        let depth = match self.placement {
            CardPlacement::Upcoming { depth } => depth,
            CardPlacement::Passed | CardPlacement::Focused => 0,
        };
        let z_index = self.stack_len.saturating_sub(depth);
        format!("--z: -{}px; z-index: {z_index};", depth * STACK_DEPTH_PX)
    }
}

fn choice_state(card: &Flashcard, choice_index: usize) -> ChoiceState {
    match card.user_answer() {
        None => ChoiceState::Open,
        Some(_) if choice_index == card.correct_index() => ChoiceState::Correct,
        Some(chosen) if chosen == choice_index => ChoiceState::Wrong,
        Some(_) => ChoiceState::Neutral,
    }
}

/// Map every card of the session, in stack order.
#[must_use]
pub fn map_card_stack(session: &QuizSession) -> Vec<FlashcardVm> {
    let cards = session.cards();
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| FlashcardVm::new(card, index, session.current_index(), cards.len()))
        .collect()
}
