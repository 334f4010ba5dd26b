use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use kartei_core::model::THEME_PREFERENCE_KEY;
use serde_json::Value;
use services::{
    AppServices, FlashcardLoader, FlashcardSource, LoadError, QuizIntent, QuizLoopService,
    QuizSession, ThemeService,
};
use storage::repository::{InMemoryRepository, PreferenceRepository, Storage, StorageError};
use tokio::sync::Notify;

use crate::app::{App, AppTestHandles};
use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

use super::quiz::QuizTestHandles;

pub struct StaticSource(pub Value);

#[async_trait]
impl FlashcardSource for StaticSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        Ok(self.0.clone())
    }
}

pub struct FailingSource;

#[async_trait]
impl FlashcardSource for FailingSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        Err(LoadError::Parse("connection reset".to_string()))
    }
}

/// Never answers, keeping the view in its loading state.
pub struct StalledSource;

#[async_trait]
impl FlashcardSource for StalledSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        std::future::pending().await
    }
}

/// Reads see the value stored at call time but only return once `open` is
/// called. Writes go straight through.
#[derive(Clone, Default)]
pub struct GatedPreferences {
    inner: InMemoryRepository,
    gate: Arc<Notify>,
}

impl GatedPreferences {
    pub fn open(&self) {
        self.gate.notify_one();
    }

    /// Read the stored theme without waiting on the gate.
    pub async fn stored_theme(&self) -> Option<String> {
        self.inner
            .get_preference(THEME_PREFERENCE_KEY)
            .await
            .expect("read theme preference")
    }
}

#[async_trait]
impl PreferenceRepository for GatedPreferences {
    async fn get_preference(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.inner.get_preference(key).await?;
        self.gate.notified().await;
        Ok(value)
    }

    async fn set_preference(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_preference(key, value).await
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
    handles: AppTestHandles,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for AppHarnessProps {}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { App {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        drive_async(&mut self.dom).await;
    }

    /// Rebuild and let the startup load settle.
    pub async fn start(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> QuizSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.read().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Full `App` mounted over caller-owned storage.
pub struct AppViewHarness {
    pub dom: VirtualDom,
    pub handles: AppTestHandles,
    pub storage: Storage,
}

impl AppViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        drive_async(&mut self.dom).await;
    }

    /// Rebuild and let the startup theme and load settle.
    pub async fn start(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Flip the settings toggle, then let the persisting task run.
    pub async fn toggle_theme(&mut self, dark: bool) {
        let toggle = self.handles.toggle_theme();
        self.dom.in_runtime(|| toggle.call(dark));
        drive_dom(&mut self.dom);
        self.drive_async().await;
    }

    pub async fn stored_theme(&self) -> Option<String> {
        self.storage
            .preferences
            .get_preference(THEME_PREFERENCE_KEY)
            .await
            .expect("read theme preference")
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub async fn drive_async(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(source: Arc<dyn FlashcardSource>) -> ViewHarness {
    let services = AppServices::from_parts(&Storage::in_memory(), FlashcardLoader::new(source));
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app: Arc::new(TestApp { services }),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        handles,
    }
}

pub fn setup_app_harness(storage: Storage, source: Arc<dyn FlashcardSource>) -> AppViewHarness {
    let services = AppServices::from_parts(&storage, FlashcardLoader::new(source));
    let handles = AppTestHandles::default();

    let dom = VirtualDom::new_with_props(
        AppHarness,
        AppHarnessProps {
            app: Arc::new(TestApp { services }),
            handles: handles.clone(),
        },
    );

    AppViewHarness {
        dom,
        handles,
        storage,
    }
}
