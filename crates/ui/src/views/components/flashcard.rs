use dioxus::prelude::*;
use services::QuizIntent;

use crate::vm::{CardPlacement, ChoiceVm, FlashcardVm};

#[component]
pub fn FlashcardView(card: FlashcardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let card_index = card.index;
    let enabled = card.accepts_answer();
    let hidden = card.placement != CardPlacement::Focused;

    rsx! {
        div {
            class: "{card.class()}",
            style: "{card.style()}",
            aria_hidden: "{hidden}",
            p { class: "question", "{card.question}" }
            div { class: "choices",
                for choice in card.choices.iter() {
                    ChoiceButton {
                        key: "{choice.index}",
                        card_index,
                        choice: choice.clone(),
                        enabled,
                        on_intent,
                    }
                }
            }
            if card.can_advance() {
                button {
                    class: "action-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    "Next"
                }
            } else if card.can_postpone() {
                button {
                    class: "action-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Postpone { card_index }),
                    "Later"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(
    card_index: usize,
    choice: ChoiceVm,
    enabled: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let choice_index = choice.index;
    rsx! {
        button {
            class: "{choice.class()}",
            r#type: "button",
            disabled: !enabled,
            onclick: move |_| {
                on_intent.call(QuizIntent::Answer {
                    card_index,
                    choice_index,
                });
            },
            "{choice.label}"
        }
    }
}
