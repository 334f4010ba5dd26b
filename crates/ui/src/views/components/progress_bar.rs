use dioxus::prelude::*;

#[component]
pub fn ProgressBar(percent: f64) -> Element {
    let width = percent.clamp(0.0, 100.0);
    rsx! {
        div {
            class: "progress-container",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{width:.0}",
            div { class: "progress-bar", style: "width: {width}%;" }
        }
    }
}
