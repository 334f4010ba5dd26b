use std::sync::Arc;

use dioxus::prelude::*;
use kartei_core::model::THEME_PREFERENCE_KEY;
use serde_json::{Value, json};
use services::{QuizIntent, QuizPhase};
use storage::repository::{PreferenceRepository, Storage};

use super::components::{AppNavbar, ProgressBar};
use super::test_harness::{
    FailingSource, GatedPreferences, StalledSource, StaticSource, setup_app_harness,
    setup_quiz_harness,
};

fn two_cards() -> Value {
    json!({
        "-first": { "question": "Capital of Austria?", "choices": ["Graz", "Vienna"], "correctIndex": 1 },
        "-second": { "question": "Largest ocean?", "choices": ["Pacific", "Indian"], "correctIndex": 0 }
    })
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_loading_text_while_fetching() {
    let mut harness = setup_quiz_harness(Arc::new(StalledSource));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Loading flashcards…"), "missing loading text in {html}");
    assert!(!html.contains("card-stack"), "stack rendered too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_stack_after_load() {
    let mut harness = setup_quiz_harness(Arc::new(StaticSource(two_cards())));
    harness.start().await;

    let html = harness.render();
    assert!(html.contains("Capital of Austria?"), "missing first card in {html}");
    assert!(html.contains("Largest ocean?"), "missing second card in {html}");
    assert!(html.contains("card focused"), "missing focused card in {html}");
    assert!(html.contains("card blurred"), "missing blurred card in {html}");
    assert!(html.contains("--z: -60px"), "missing depth offset in {html}");
    assert!(html.contains("Later"), "missing postpone button in {html}");
    assert!(html.contains("width: 50%"), "missing progress in {html}");
    assert!(!html.contains("Show results"), "final card shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_marks_choices_and_offers_next() {
    let mut harness = setup_quiz_harness(Arc::new(StaticSource(two_cards())));
    harness.start().await;

    harness.dispatch(QuizIntent::Answer {
        card_index: 0,
        choice_index: 0,
    });

    let html = harness.render();
    assert!(html.contains("choice-btn wrong"), "missing wrong mark in {html}");
    assert!(html.contains("choice-btn correct"), "missing correct mark in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(!html.contains("Later"), "postpone still offered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn postponed_card_moves_behind_the_stack() {
    let mut harness = setup_quiz_harness(Arc::new(StaticSource(two_cards())));
    harness.start().await;

    harness.dispatch(QuizIntent::Postpone { card_index: 0 });

    let session = harness.session();
    assert_eq!(session.cards()[0].question(), "Largest ocean?");
    assert_eq!(session.cards()[1].question(), "Capital of Austria?");
    let html = harness.render();
    assert!(html.contains("card blurred postponed"), "missing postponed card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_quiz_reveals_score_ring_and_breakdown() {
    let mut harness = setup_quiz_harness(Arc::new(StaticSource(two_cards())));
    harness.start().await;

    harness.dispatch(QuizIntent::Answer {
        card_index: 0,
        choice_index: 1,
    });
    harness.dispatch(QuizIntent::Advance);
    harness.dispatch(QuizIntent::Answer {
        card_index: 1,
        choice_index: 1,
    });
    harness.dispatch(QuizIntent::Advance);

    let html = harness.render();
    assert!(html.contains("Show results"), "missing results button in {html}");

    harness.dispatch(QuizIntent::RevealResults);

    assert_eq!(
        harness.session().phase(),
        QuizPhase::Complete { revealed: true }
    );
    let html = harness.render();
    assert!(html.contains("circular-progress"), "missing score ring in {html}");
    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains("1 of 2 correct"), "missing headline in {html}");
    assert!(html.contains("summary-item correct"), "missing correct row in {html}");
    assert!(html.contains("summary-item wrong"), "missing wrong row in {html}");
    assert!(!html.contains("Show results"), "results button still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_collection_shows_note_on_final_card() {
    let mut harness = setup_quiz_harness(Arc::new(StaticSource(Value::Null)));
    harness.start().await;

    let html = harness.render();
    assert!(html.contains("No flashcards available."), "missing empty note in {html}");
    assert!(html.contains("Show results"), "missing results button in {html}");
    assert!(!html.contains("could not be loaded"), "unexpected failure note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_degrades_to_empty_quiz() {
    let mut harness = setup_quiz_harness(Arc::new(FailingSource));
    harness.start().await;

    assert!(harness.session().load_failed());
    let html = harness.render();
    assert!(html.contains("No flashcards available."), "missing empty note in {html}");
    assert!(html.contains("could not be loaded"), "missing failure note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn app_applies_stored_theme_and_persists_toggle() {
    let storage = Storage::in_memory();
    storage
        .preferences
        .set_preference(THEME_PREFERENCE_KEY, "dark")
        .await
        .unwrap();
    let mut harness = setup_app_harness(storage, Arc::new(StaticSource(Value::Null)));
    harness.start().await;

    let html = harness.render();
    assert!(html.contains(r#"data-theme="dark""#), "stored theme not applied in {html}");
    assert!(!html.contains("theme-pending"), "theme still pending in {html}");

    harness.toggle_theme(false).await;

    assert_eq!(harness.stored_theme().await.as_deref(), Some("light"));
    let html = harness.render();
    assert!(html.contains(r#"data-theme="light""#), "toggle not applied in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn app_without_stored_theme_follows_os_hint() {
    let mut harness = setup_app_harness(Storage::in_memory(), Arc::new(StalledSource));
    harness.start().await;

    // No webview under SSR, so the OS hint reads as light.
    let html = harness.render();
    assert!(html.contains(r#"data-theme="light""#), "missing light theme in {html}");
    assert_eq!(harness.stored_theme().await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn app_hides_root_until_theme_resolves() {
    let preferences = GatedPreferences::default();
    let storage = Storage {
        preferences: Arc::new(preferences.clone()),
    };
    preferences
        .set_preference(THEME_PREFERENCE_KEY, "dark")
        .await
        .unwrap();
    let mut harness = setup_app_harness(storage, Arc::new(StalledSource));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("app-root theme-pending"), "root shown before resolve in {html}");

    preferences.open();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("theme-pending"), "root still hidden in {html}");
    assert!(html.contains(r#"data-theme="dark""#), "stored theme not applied in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_during_startup_is_not_overwritten() {
    let preferences = GatedPreferences::default();
    let storage = Storage {
        preferences: Arc::new(preferences.clone()),
    };
    preferences
        .set_preference(THEME_PREFERENCE_KEY, "dark")
        .await
        .unwrap();
    let mut harness = setup_app_harness(storage, Arc::new(StalledSource));
    harness.rebuild();
    harness.drive_async().await;

    // The startup read has already seen "dark".
    harness.toggle_theme(false).await;
    preferences.open();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(r#"data-theme="light""#), "user choice overwritten in {html}");
    assert_eq!(preferences.stored_theme().await.as_deref(), Some("light"));
}

#[test]
fn navbar_renders_title_and_settings_button() {
    let html = dioxus_ssr::render_element(rsx! {
        AppNavbar { dark_mode: false, on_toggle_theme: move |_| {} }
    });

    assert!(html.contains("Kartei"), "missing title in {html}");
    assert!(html.contains("settings-btn"), "missing settings button in {html}");
    assert!(!html.contains("Dark Mode"), "settings modal open by default in {html}");
}

#[test]
fn progress_bar_clamps_width() {
    let html = dioxus_ssr::render_element(rsx! {
        ProgressBar { percent: 150.0 }
    });

    assert!(html.contains("width: 100%"), "missing clamped width in {html}");
}
