//! Hover-event plumbing from Plotly charts back into Dioxus signals.
//!
//! The bridge JS re-dispatches `plotly_hover` as a document-level
//! `cvd-hover-{container_id}` CustomEvent whose detail is the hovered
//! country (the trace's `customdata`). This module subscribes to that
//! event through `document::eval`, which gives the listener a `dioxus.send`
//! channel back into Rust.

use dioxus::document;
use dioxus::prelude::*;

/// Subscribe `target` to hover events from the chart in `container_id`.
///
/// Call once per chart from a component body (hook rules apply). Empty
/// hover payloads — a point without `customdata` — are ignored, so the
/// signal always holds the last real country.
pub fn use_hover_country(container_id: &str, mut target: Signal<String>) {
    let container_id = container_id.to_string();
    use_future(move || {
        let container_id = container_id.clone();
        async move {
            let mut eval = document::eval(&format!(
                r#"
                document.addEventListener('cvd-hover-{container_id}', function (e) {{
                    dioxus.send(typeof e.detail === 'string' ? e.detail : '');
                }});
                "#
            ));
            loop {
                match eval.recv::<String>().await {
                    Ok(country) if !country.is_empty() => target.set(country),
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("hover channel for {} closed: {:?}", container_id, e);
                        break;
                    }
                }
            }
        }
    });
}
