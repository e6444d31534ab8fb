//! Linear/log radio toggle for one chart axis.

use cvd_data::AxisScale;
use dioxus::prelude::*;

/// Inline Linear/Log radio buttons.
///
/// `group` must be unique per toggle instance (it becomes the radio
/// `name`, which is what groups the two inputs in the DOM).
#[component]
pub fn AxisScaleToggle(group: String, mut selection: Signal<AxisScale>) -> Element {
    let current = selection();

    rsx! {
        div {
            style: "margin: 4px 0;",
            for scale in [AxisScale::Linear, AxisScale::Log] {
                label {
                    style: "display: inline-block; margin-right: 12px;",
                    input {
                        r#type: "radio",
                        name: "{group}",
                        value: "{scale}",
                        checked: scale == current,
                        onchange: move |_| selection.set(scale),
                    }
                    " {scale}"
                }
            }
        }
    }
}
