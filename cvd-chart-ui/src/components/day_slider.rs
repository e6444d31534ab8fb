//! Day slider for picking the snapshot day.

use dioxus::prelude::*;

/// Range slider over the dataset's day domain.
///
/// `days` is the common time axis (offset from each country's first
/// case/death), so sliding left rewinds every country toward its own
/// outbreak start.
#[component]
pub fn DaySlider(min: i64, max: i64, mut selection: Signal<i64>) -> Element {
    let current = selection();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Day: {current}"
            }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                value: "{current}",
                style: "flex: 1;",
                oninput: move |evt: Event<FormData>| {
                    if let Ok(day) = evt.value().parse::<i64>() {
                        selection.set(day.clamp(min, max));
                    }
                },
            }
            span {
                style: "font-size: 12px; color: #666;",
                "{min} – {max}"
            }
        }
    }
}
