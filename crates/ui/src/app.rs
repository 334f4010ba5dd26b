use dioxus::prelude::*;
use kartei_core::model::Theme;

use crate::context::AppContext;
use crate::views::{AppNavbar, QuizView};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const STYLE: Asset = asset!("/assets/style.css");

const PREFERS_DARK_JS: &str = "return window.matchMedia('(prefers-color-scheme: dark)').matches;";

/// Ask the webview for the OS colour scheme. Anything unexpected reads as light.
async fn os_prefers_dark() -> bool {
    document::eval(PREFERS_DARK_JS)
        .join::<bool>()
        .await
        .unwrap_or(false)
}

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    // `None` until the startup resolve or a toggle picks a theme.
    let theme = use_signal(|| None::<Theme>);

    let theme_service = ctx.theme();
    let _initial_theme = use_resource(move || {
        let theme_service = theme_service.clone();
        let mut theme = theme;
        async move {
            let os_dark = os_prefers_dark().await;
            let resolved = match theme_service.resolve(os_dark).await {
                Ok(resolved) => resolved,
                Err(err) => {
                    log::error!("failed to resolve theme: {err}");
                    Theme::from_dark_mode(os_dark)
                }
            };
            // A toggle during startup already wrote the user's choice.
            if theme.peek().is_none() {
                theme.set(Some(resolved));
            }
        }
    });

    let theme_service = ctx.theme();
    let on_toggle_theme = use_callback(move |dark: bool| {
        let mut theme = theme;
        theme.set(Some(Theme::from_dark_mode(dark)));
        let theme_service = theme_service.clone();
        spawn(async move {
            if let Err(err) = theme_service.set_dark_mode(dark).await {
                log::error!("failed to persist theme preference: {err}");
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AppTestHandles>() {
                handles.register(on_toggle_theme);
            }
        }
    }

    let current = theme();
    let root_class = if current.is_some() {
        "app-root"
    } else {
        "app-root theme-pending"
    };
    let current = current.unwrap_or_default();

    rsx! {
        document::Stylesheet { href: STYLE }
        document::Title { "Kartei" }

        div { class: root_class, "data-theme": current.as_str(),
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                AppNavbar { dark_mode: current.is_dark(), on_toggle_theme }
                QuizView {}
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AppTestHandles {
    toggle_theme: Rc<RefCell<Option<Callback<bool>>>>,
}

#[cfg(test)]
impl AppTestHandles {
    pub(crate) fn register(&self, toggle_theme: Callback<bool>) {
        *self.toggle_theme.borrow_mut() = Some(toggle_theme);
    }

    pub(crate) fn toggle_theme(&self) -> Callback<bool> {
        (*self.toggle_theme.borrow()).expect("theme toggle registered")
    }
}
