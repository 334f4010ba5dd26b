use dioxus::prelude::*;
use services::{QuizIntent, QuizPhase, QuizSession};

use crate::context::AppContext;
use crate::vm::{map_card_stack, map_final_card};

use super::components::{FinalCard, FlashcardView, ProgressBar};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let session = use_signal(QuizSession::new);

    // One fetch per mount; the session signal is only written here.
    let _load = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let mut session = session;
        async move {
            let started = quiz_loop.start_session().await;
            session.set(started);
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        if !session.write().apply(intent) {
            log::debug!("ignored quiz intent {intent:?}");
        }
    });
    let on_reveal = use_callback(move |()| dispatch_intent.call(QuizIntent::RevealResults));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let guard = session.read();
    if guard.phase() == QuizPhase::Loading {
        return rsx! {
            main { class: "quiz",
                p { class: "loading", "Loading flashcards…" }
            }
        };
    }
    let cards = map_card_stack(&guard);
    let final_card = map_final_card(&guard);
    let percent = guard.progress_percent();
    drop(guard);

    rsx! {
        main { class: "quiz",
            div { class: "card-stack",
                for card in cards.iter() {
                    FlashcardView { key: "{card.id}", card: card.clone(), on_intent: dispatch_intent }
                }
                FinalCard { card: final_card, on_reveal }
            }
            ProgressBar { percent }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, session: Signal<QuizSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
