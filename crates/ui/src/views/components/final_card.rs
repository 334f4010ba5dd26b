use dioxus::prelude::*;
use kartei_core::model::CardId;

use crate::vm::{FinalCardVm, ScoreRingVm, ScoreSummaryVm, SummaryItemVm};

/// Closing card of the stack: results button, then score and breakdown.
#[component]
pub fn FinalCard(card: FinalCardVm, on_reveal: EventHandler<()>) -> Element {
    match card {
        FinalCardVm::Hidden => rsx! {},
        FinalCardVm::Pending { empty, load_failed } => rsx! {
            div { class: "card final focused",
                if empty {
                    p { class: "empty-note", "No flashcards available." }
                    if load_failed {
                        p { class: "empty-note", "The flashcards could not be loaded." }
                    }
                } else {
                    h3 { "All done!" }
                }
                button {
                    class: "action-btn",
                    r#type: "button",
                    onclick: move |_| on_reveal.call(()),
                    "Show results"
                }
            }
        },
        FinalCardVm::Revealed(summary) => rsx! {
            ResultsCard { summary }
        },
    }
}

#[component]
fn ResultsCard(summary: ScoreSummaryVm) -> Element {
    let expanded = use_signal(|| None::<CardId>);

    rsx! {
        div { class: "card final focused",
            h3 { "Your score" }
            ScoreRing { ring: summary.ring.clone() }
            p { class: "score-headline", "{summary.headline}" }
            ul { class: "summary-list",
                for item in summary.items.iter() {
                    SummaryRow { key: "{item.id}", item: item.clone(), expanded }
                }
            }
        }
    }
}

#[component]
fn ScoreRing(ring: ScoreRingVm) -> Element {
    rsx! {
        svg {
            class: "circular-progress",
            width: "120",
            height: "120",
            view_box: "0 0 120 120",
            circle {
                class: "track",
                cx: "60",
                cy: "60",
                r: "{ring.radius}",
            }
            circle {
                class: "progress",
                cx: "60",
                cy: "60",
                r: "{ring.radius}",
                stroke_dasharray: "{ring.dash_array_attr()}",
                stroke_dashoffset: "{ring.dash_offset_attr()}",
            }
            text {
                class: "progress-text",
                x: "60",
                y: "60",
                "{ring.percent}%"
            }
        }
    }
}

#[component]
fn SummaryRow(item: SummaryItemVm, expanded: Signal<Option<CardId>>) -> Element {
    let id = item.id;
    let open = expanded() == Some(id);
    let details_class = if open {
        "summary-details open"
    } else {
        "summary-details"
    };

    rsx! {
        li {
            class: "{item.class()}",
            onclick: move |_| {
                let mut expanded = expanded;
                let next = if expanded() == Some(id) { None } else { Some(id) };
                expanded.set(next);
            },
            strong { "{item.question}" }
            if item.postponed {
                span { class: "summary-tag", " (postponed)" }
            }
            div { class: "{details_class}",
                p { "Your answer: {item.chosen}" }
                p { "Correct answer: {item.correct}" }
            }
        }
    }
}
