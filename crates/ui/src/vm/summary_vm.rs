use std::f64::consts::PI;

use kartei_core::model::{CardId, Score};
use services::{CardResult, QuizPhase, QuizSession, ScoreSummary};

const RING_RADIUS: f64 = 52.0;

/// Geometry for the circular score indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRingVm {
    pub percent: u8,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl ScoreRingVm {
    #[must_use]
    pub fn new(percent: u8) -> Self {
        let circumference = 2.0 * PI * RING_RADIUS;
        let filled = f64::from(percent.min(100)) / 100.0;
        Self {
            percent,
            radius: RING_RADIUS,
            circumference,
            dash_offset: circumference * (1.0 - filled),
        }
    }

    #[must_use]
    pub fn dash_array_attr(&self) -> String {
        format!("{:.2}", self.circumference)
    }

    #[must_use]
    pub fn dash_offset_attr(&self) -> String {
        format!("{:.2}", self.dash_offset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryItemVm {
    pub id: CardId,
    pub question: String,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
    pub postponed: bool,
}

impl SummaryItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "summary-item correct"
        } else {
            "summary-item wrong"
        }
    }
}

impl From<&CardResult> for SummaryItemVm {
    fn from(result: &CardResult) -> Self {
        Self {
            id: result.id,
            question: result.question.clone(),
            chosen: result.chosen.clone().unwrap_or_else(|| "No answer".to_string()),
            correct: result.correct.clone().unwrap_or_else(|| "Unknown".to_string()),
            is_correct: result.is_correct,
            postponed: result.postponed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSummaryVm {
    pub ring: ScoreRingVm,
    pub headline: String,
    pub items: Vec<SummaryItemVm>,
}

impl From<&ScoreSummary> for ScoreSummaryVm {
    fn from(summary: &ScoreSummary) -> Self {
        Self {
            ring: ScoreRingVm::new(summary.score.percent()),
            headline: headline(summary.score),
            items: summary.results.iter().map(SummaryItemVm::from).collect(),
        }
    }
}

fn headline(score: Score) -> String {
    format!("{} of {} correct", score.correct(), score.total())
}

/// What the closing card of the stack shows.
#[derive(Clone, Debug, PartialEq)]
pub enum FinalCardVm {
    /// Quiz still loading or in progress.
    Hidden,
    /// All cards passed; results not requested yet.
    Pending { empty: bool, load_failed: bool },
    Revealed(ScoreSummaryVm),
}

#[must_use]
pub fn map_final_card(session: &QuizSession) -> FinalCardVm {
    match session.phase() {
        QuizPhase::Loading | QuizPhase::Active => FinalCardVm::Hidden,
        QuizPhase::Complete { revealed: false } => FinalCardVm::Pending {
            empty: session.total_cards() == 0,
            load_failed: session.load_failed(),
        },
        QuizPhase::Complete { revealed: true } => session
            .summary()
            .map_or(FinalCardVm::Hidden, |summary| {
                FinalCardVm::Revealed(ScoreSummaryVm::from(&summary))
            }),
    }
}
