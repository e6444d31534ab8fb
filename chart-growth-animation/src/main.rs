//! Corona-virus Dashboard (animated growth variant)
//!
//! Animated scatter over the outbreak built from the pivoted table: total
//! cases on x, new cases on y (both log-scaled), marker area sized by the
//! absolute growth rate, one frame per day with play/pause buttons and a
//! frame slider. The whole animation object is constructed once at
//! startup; Plotly drives the playback entirely on the client.

use cvd_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner};
use cvd_chart_ui::js_bridge;
use cvd_chart_ui::state::AppState;
use cvd_data::DatasetKind;
use cvd_db::Database;
use cvd_figures::growth_animation_figure;
use dioxus::prelude::*;

const PIVOTED_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cases_result_pivoted.csv"));

/// DOM id for the animation container div.
const CHART_ID: &str = "growth-animation-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("growth-animation-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the pivoted table, build the animation once, render it.
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_pivoted(DatasetKind::Cases, PIVOTED_CSV) {
                    log::error!("Failed to load pivoted data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load pivoted data: {}", e)));
                    state.loading.set(false);
                    return;
                }

                match db.query_animation_rows(DatasetKind::Cases) {
                    Ok(rows) if !rows.is_empty() => {
                        web_sys::console::log_1(
                            &format!("[CVD Debug] animation: {} pivoted rows", rows.len()).into(),
                        );
                        let fig = growth_animation_figure(&rows);
                        state.db.set(Some(db));
                        state.loading.set(false);

                        js_bridge::init_charts();
                        js_bridge::render_figure(CHART_ID, &fig.to_string(), false);
                    }
                    Ok(_) => {
                        state
                            .error_msg
                            .set(Some("No pivoted rows to animate.".to_string()));
                        state.loading.set(false);
                    }
                    Err(e) => {
                        state
                            .error_msg
                            .set(Some(format!("Animation query failed: {}", e)));
                        state.loading.set(false);
                    }
                }
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center;",
                "Corona-virus Dashboard"
            }
            hr {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "Outbreak Growth Animation".to_string(),
                    subtitle: "Total cases vs. new cases per country, marker area scaled by absolute growth rate. Press Play or drag the day slider.".to_string(),
                }

                ChartContainer {
                    id: CHART_ID.to_string(),
                    loading: *state.loading.read(),
                    min_height: 600,
                }
            }

            div {
                style: "text-align: center; width: 100%; font-size: 12px; color: #888; margin-top: 16px;",
                "Statistics are pre-computed upstream from the JHU CSSE COVID-19 dataset; this page only filters and plots them."
            }
        }
    }
}
