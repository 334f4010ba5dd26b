use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/kartei-logo.svg");

const GEAR_PATH: &str = "m9.25 22l-.4-3.2q-.325-.125-.612-.3t-.563-.375L4.7 19.375l-2.75-4.75l2.575-1.95Q4.5 12.5 4.5 12.338v-.675q0-.163.025-.338L1.95 9.375l2.75-4.75l2.975 1.25q.275-.2.575-.375t.6-.3l.4-3.2h5.5l.4 3.2q.325.125.613.3t.562.375l2.975-1.25l2.75 4.75l-2.575 1.95q.025.175.025.338v.674q0 .163-.05.338l2.575 1.95l-2.75 4.75l-2.95-1.25q-.275.2-.575.375t-.6.3l-.4 3.2zm2.8-6.5q1.45 0 2.475-1.025T15.55 12t-1.025-2.475T12.05 8.5q-1.475 0-2.488 1.025T8.55 12t1.013 2.475T12.05 15.5";

/// Header with the logo and the settings modal.
///
/// `on_toggle_theme` receives the requested dark-mode state.
#[component]
pub fn AppNavbar(dark_mode: bool, on_toggle_theme: EventHandler<bool>) -> Element {
    let mut show_settings = use_signal(|| false);

    rsx! {
        header { class: "header",
            div { class: "logo",
                img { class: "kartei-logo", src: LOGO, alt: "Kartei Logo" }
                h2 { "Kartei" }
            }
            button {
                class: "settings-btn",
                r#type: "button",
                aria_label: "Settings",
                onclick: move |_| {
                    let open = show_settings();
                    show_settings.set(!open);
                },
                svg {
                    width: "28",
                    height: "28",
                    view_box: "0 0 24 24",
                    path { d: GEAR_PATH }
                }
            }
        }
        if show_settings() {
            div {
                class: "modal-backdrop",
                onclick: move |_| show_settings.set(false),
                div {
                    class: "modal",
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |evt| evt.stop_propagation(),
                    button {
                        class: "close-btn",
                        r#type: "button",
                        aria_label: "Close settings",
                        onclick: move |_| show_settings.set(false),
                        "×"
                    }
                    h3 { "Settings" }
                    label { class: "toggle-switch",
                        input {
                            r#type: "checkbox",
                            checked: dark_mode,
                            onchange: move |_| on_toggle_theme.call(!dark_mode),
                        }
                        span { class: "slider" }
                        span { "Dark Mode" }
                    }
                }
            }
        }
    }
}
