//! Dropdown selector for choosing an indicator.

use dioxus::prelude::*;

/// Indicator dropdown for one chart axis.
///
/// Options come from the loaded dataset's indicator labels; the current
/// choice lives in the panel's `selection` signal so sibling charts react
/// to changes.
#[component]
pub fn IndicatorSelector(
    id: String,
    label: String,
    options: Vec<String>,
    mut selection: Signal<String>,
) -> Element {
    let selected = selection();

    rsx! {
        div {
            style: "margin: 4px 0;",
            label {
                r#for: "{id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{label} "
            }
            select {
                id: "{id}",
                style: "min-width: 260px;",
                onchange: move |evt: Event<FormData>| {
                    selection.set(evt.value());
                },
                for option_label in options.iter() {
                    option {
                        value: "{option_label}",
                        selected: *option_label == selected,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
