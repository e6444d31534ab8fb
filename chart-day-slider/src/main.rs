//! Corona-virus Dashboard (day-slider variant)
//!
//! Same cases panel as the crossfilter dashboard, but the snapshot day is
//! chosen with a slider instead of being pinned to the latest day. Sliding
//! rewinds every country along the common day axis (offset from each
//! country's first case); the hover-driven time series stay linked.

use cvd_chart_ui::components::{
    AxisScaleToggle, ChartContainer, DaySlider, ErrorDisplay, IndicatorSelector, LoadingSpinner,
};
use cvd_chart_ui::hover::use_hover_country;
use cvd_chart_ui::js_bridge;
use cvd_chart_ui::state::{AppState, PanelState};
use cvd_data::DatasetKind;
use cvd_db::Database;
use cvd_figures::time_series::series_title;
use cvd_figures::{country_series_figure, snapshot_figure};
use dioxus::prelude::*;

const CASES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cases_result.csv"));

/// DOM ids for the three chart containers.
const SCATTER_ID: &str = "day-slider-scatter";
const X_SERIES_ID: &str = "day-slider-x-series";
const Y_SERIES_ID: &str = "day-slider-y-series";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("day-slider-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut panel = use_hook(PanelState::new);
    let mut day_domain: Signal<(i64, i64)> = use_signal(|| (0, 0));

    // Load the cases dataset and prime the controls on mount.
    use_effect(move || {
        web_sys::console::log_1(&"[CVD Debug] day-slider: loading embedded CSV".into());
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_stacked(DatasetKind::Cases, CASES_CSV) {
                    log::error!("Failed to load cases data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load cases data: {}", e)));
                    state.loading.set(false);
                    return;
                }

                match db.query_indicators(DatasetKind::Cases) {
                    Ok(indicators) if !indicators.is_empty() => {
                        let (x_default, y_default) = DatasetKind::Cases.default_indicators();
                        let pick = |wanted: &str| {
                            indicators
                                .iter()
                                .find(|label| *label == wanted)
                                .cloned()
                                .unwrap_or_else(|| indicators[0].clone())
                        };
                        panel.x_indicator.set(pick(x_default));
                        panel.y_indicator.set(pick(y_default));
                        panel.indicators.set(indicators);
                    }
                    Ok(_) => {
                        state
                            .error_msg
                            .set(Some("No indicators in the cases data.".to_string()));
                    }
                    Err(e) => {
                        state
                            .error_msg
                            .set(Some(format!("Indicator query failed: {}", e)));
                    }
                }

                if let Ok(Some((min, max))) = db.query_day_domain(DatasetKind::Cases) {
                    day_domain.set((min, max));
                    panel.selected_day.set(max);
                }

                state.db.set(Some(db));
                state.loading.set(false);

                js_bridge::init_charts();
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    use_hover_country(SCATTER_ID, panel.hovered_country);

    // Snapshot scatter at the slider-selected day.
    use_effect(move || {
        let x_indicator = (panel.x_indicator)();
        let y_indicator = (panel.y_indicator)();
        let x_scale = (panel.x_scale)();
        let y_scale = (panel.y_scale)();
        let day = (panel.selected_day)();
        if x_indicator.is_empty() || y_indicator.is_empty() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match db.query_day_snapshot(DatasetKind::Cases, day, &x_indicator, &y_indicator) {
            Ok(points) => {
                let fig = snapshot_figure(&points, &x_indicator, &y_indicator, x_scale, y_scale);
                js_bridge::render_figure(SCATTER_ID, &fig.to_string(), true);
            }
            Err(e) => log::error!("snapshot query failed: {}", e),
        }
    });

    // Hover time series for the x indicator.
    use_effect(move || {
        let country = (panel.hovered_country)();
        let indicator = (panel.x_indicator)();
        let scale = (panel.x_scale)();
        if country.is_empty() || indicator.is_empty() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match db.query_country_series(DatasetKind::Cases, &country, &indicator) {
            Ok(series) => {
                let title = series_title(&country, &indicator);
                let fig = country_series_figure(&series, scale, &title);
                js_bridge::render_figure(X_SERIES_ID, &fig.to_string(), false);
            }
            Err(e) => log::error!("series query failed: {}", e),
        }
    });

    // Hover time series for the y indicator.
    use_effect(move || {
        let country = (panel.hovered_country)();
        let indicator = (panel.y_indicator)();
        let scale = (panel.y_scale)();
        if country.is_empty() || indicator.is_empty() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match db.query_country_series(DatasetKind::Cases, &country, &indicator) {
            Ok(series) => {
                let title = series_title(&country, &indicator);
                let fig = country_series_figure(&series, scale, &title);
                js_bridge::render_figure(Y_SERIES_ID, &fig.to_string(), false);
            }
            Err(e) => log::error!("series query failed: {}", e),
        }
    });

    let options = panel.indicators.read().clone();
    let (min_day, max_day) = day_domain();

    rsx! {
        div {
            style: "max-width: 1400px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center;",
                "Corona-virus Dashboard"
            }
            div {
                style: "text-align: center; color: #444;",
                "Worldwide cases at any day of the outbreak. Drag the slider to move along the common day axis."
            }
            hr {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; border-bottom: thin solid lightgrey; padding: 10px 5px;",
                    div {
                        style: "width: 49%;",
                        IndicatorSelector {
                            id: "slider-xaxis-column",
                            label: "X-axis indicator:".to_string(),
                            options: options.clone(),
                            selection: panel.x_indicator,
                        }
                        AxisScaleToggle {
                            group: "slider-xaxis-type",
                            selection: panel.x_scale,
                        }
                    }
                    div {
                        style: "width: 49%;",
                        IndicatorSelector {
                            id: "slider-yaxis-column",
                            label: "Y-axis indicator:".to_string(),
                            options: options,
                            selection: panel.y_indicator,
                        }
                        AxisScaleToggle {
                            group: "slider-yaxis-type",
                            selection: panel.y_scale,
                        }
                    }
                }

                DaySlider {
                    min: min_day,
                    max: max_day,
                    selection: panel.selected_day,
                }

                div {
                    style: "display: flex; gap: 8px; border-bottom: thin solid lightgrey; padding: 10px 5px;",
                    div {
                        style: "width: 49%; border-right: thin solid lightgrey;",
                        ChartContainer {
                            id: SCATTER_ID.to_string(),
                            loading: *state.loading.read(),
                            min_height: 450,
                        }
                    }
                    div {
                        style: "width: 49%;",
                        ChartContainer {
                            id: X_SERIES_ID.to_string(),
                            loading: *state.loading.read(),
                            min_height: 225,
                        }
                        ChartContainer {
                            id: Y_SERIES_ID.to_string(),
                            loading: *state.loading.read(),
                            min_height: 225,
                        }
                    }
                }
            }

            div {
                style: "text-align: center; width: 100%; font-size: 12px; color: #888; margin-top: 16px;",
                "Statistics are pre-computed upstream from the JHU CSSE COVID-19 dataset; this page only filters and plots them."
            }
        }
    }
}
