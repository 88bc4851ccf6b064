use dioxus::prelude::*;

use crate::experiment::ExperimentView;

#[component]
pub fn Experiment() -> Element {
    // Re-render when the locale changes elsewhere (e.g. while on Home).
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-experiment",
            ExperimentView {}
        }
    }
}
