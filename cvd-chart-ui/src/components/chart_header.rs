//! Section header component with centered heading and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section heading ("Worldwide Cases Plots")
    pub title: String,
    /// Optional explanatory line under the heading
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for a dashboard section.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h3 {
                style: "margin: 0 0 4px 0;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
