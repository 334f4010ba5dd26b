mod card_vm;
mod summary_vm;

pub use card_vm::{CardPlacement, ChoiceState, ChoiceVm, FlashcardVm, map_card_stack};
pub use summary_vm::{
    FinalCardVm, ScoreRingVm, ScoreSummaryVm, SummaryItemVm, map_final_card,
};
