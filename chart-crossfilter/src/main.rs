//! Corona-virus Dashboard (crossfilter variant)
//!
//! Worldwide cases and deaths panels side by side. Each panel pairs two
//! indicator dropdowns and linear/log toggles with a scatter of all
//! countries at the latest common day; hovering a country fills the two
//! time-series charts on the right with that country's history for the
//! selected x and y indicators.
//!
//! Data flow:
//! 1. `build.rs` copies the pre-computed `result.csv` pair into `OUT_DIR`.
//! 2. `include_str!` embeds both CSVs into the WASM binary.
//! 3. On mount the CSVs are loaded into an in-memory SQLite database,
//!    with deaths indicator labels renamed so they never collide with
//!    the cases labels.
//! 4. Control changes re-query the snapshot/series and re-render via the
//!    Plotly bridge; hovers flow back through `cvd-hover-*` events.

use cvd_chart_ui::components::{
    AxisScaleToggle, ChartContainer, ErrorDisplay, IndicatorSelector, LoadingSpinner,
};
use cvd_chart_ui::hover::use_hover_country;
use cvd_chart_ui::js_bridge;
use cvd_chart_ui::state::{AppState, PanelState};
use cvd_data::DatasetKind;
use cvd_db::Database;
use cvd_figures::time_series::series_title;
use cvd_figures::{country_series_figure, snapshot_figure};
use dioxus::prelude::*;

/// Stacked long-format data for the cases panel.
const CASES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cases_result.csv"));
/// Stacked long-format data for the deaths panel.
const DEATHS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/deaths_result.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("crossfilter-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load both datasets into the in-memory database on mount.
    use_effect(move || {
        web_sys::console::log_1(&"[CVD Debug] crossfilter: loading embedded CSVs".into());
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
                if let Err(e) = db.load_stacked(DatasetKind::Deaths, DEATHS_CSV) {
                    log::error!("Failed to load deaths data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load deaths data: {}", e)));
                    state.loading.set(false);
                    return;
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

    rsx! {
        div {
            style: "max-width: 1400px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center;",
                "Corona-virus Dashboard"
            }
            div {
                style: "text-align: center; color: #444;",
                "A dashboard for visualising pre-computed analyses of the Johns Hopkins University (JHU) corona-virus dataset."
            }
            hr {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                DatasetPanel { kind: DatasetKind::Cases }
                hr {}
                DatasetPanel { kind: DatasetKind::Deaths }
            }

            div {
                style: "text-align: center; width: 100%; font-size: 12px; color: #888; margin-top: 16px;",
                "Statistics are pre-computed upstream from the JHU CSSE COVID-19 dataset; this page only filters and plots them."
            }
        }
    }
}

/// Props for one dataset panel (cases or deaths).
#[derive(Props, Clone, PartialEq)]
struct DatasetPanelProps {
    kind: DatasetKind,
}

/// One worldwide panel: controls, snapshot scatter, and the two
/// hover-driven time-series charts.
#[component]
fn DatasetPanel(props: DatasetPanelProps) -> Element {
    let kind = props.kind;
    let state = use_context::<AppState>();
    let mut panel = use_hook(PanelState::new);

    let key = kind.key();
    let scatter_id = format!("{}-indicator-scatter", key);
    let x_series_id = format!("{}-x-time-series", key);
    let y_series_id = format!("{}-y-time-series", key);

    // Fill dropdown options and defaults once the database is available.
    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match db.query_indicators(kind) {
            Ok(indicators) if !indicators.is_empty() => {
                let (x_default, y_default) = kind.default_indicators();
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

                if let Ok(Some(max_day)) = db.query_max_day(kind) {
                    panel.selected_day.set(max_day);
                }
            }
            Ok(_) => {
                log::warn!("{}: no indicators in stacked table", kind.key());
            }
            Err(e) => {
                log::error!("{}: indicator query failed: {}", kind.key(), e);
            }
        }
    });

    // Plotly hover events on the scatter update the hovered country.
    use_hover_country(&scatter_id, panel.hovered_country);

    // Snapshot scatter: re-renders on any dropdown/toggle change.
    {
        let scatter_id = scatter_id.clone();
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
            match db.query_day_snapshot(kind, day, &x_indicator, &y_indicator) {
                Ok(points) => {
                    web_sys::console::log_1(
                        &format!(
                            "[CVD Debug] {}: scatter day {} -> {} points",
                            kind.key(),
                            day,
                            points.len()
                        )
                        .into(),
                    );
                    let fig =
                        snapshot_figure(&points, &x_indicator, &y_indicator, x_scale, y_scale);
                    js_bridge::render_figure(&scatter_id, &fig.to_string(), true);
                }
                Err(e) => log::error!("{}: snapshot query failed: {}", kind.key(), e),
            }
        });
    }

    // X-indicator time series for the hovered country.
    {
        let x_series_id = x_series_id.clone();
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
            match db.query_country_series(kind, &country, &indicator) {
                Ok(series) => {
                    let title = series_title(&country, &indicator);
                    let fig = country_series_figure(&series, scale, &title);
                    js_bridge::render_figure(&x_series_id, &fig.to_string(), false);
                }
                Err(e) => log::error!("{}: series query failed: {}", kind.key(), e),
            }
        });
    }

    // Y-indicator time series for the hovered country.
    {
        let y_series_id = y_series_id.clone();
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
            match db.query_country_series(kind, &country, &indicator) {
                Ok(series) => {
                    let title = series_title(&country, &indicator);
                    let fig = country_series_figure(&series, scale, &title);
                    js_bridge::render_figure(&y_series_id, &fig.to_string(), false);
                }
                Err(e) => log::error!("{}: series query failed: {}", kind.key(), e),
            }
        });
    }

    let options = panel.indicators.read().clone();
    let heading = format!("Worldwide {} Plots", kind.label());

    rsx! {
        h3 {
            style: "text-align: center;",
            "{heading}"
        }

        // Controls: x-axis column on the left, y-axis column on the right.
        div {
            style: "display: flex; gap: 16px; border-bottom: thin solid lightgrey; padding: 10px 5px;",
            div {
                style: "width: 49%;",
                IndicatorSelector {
                    id: "{key}-xaxis-column",
                    label: "X-axis indicator:".to_string(),
                    options: options.clone(),
                    selection: panel.x_indicator,
                }
                AxisScaleToggle {
                    group: "{key}-xaxis-type",
                    selection: panel.x_scale,
                }
            }
            div {
                style: "width: 49%;",
                IndicatorSelector {
                    id: "{key}-yaxis-column",
                    label: "Y-axis indicator:".to_string(),
                    options: options,
                    selection: panel.y_indicator,
                }
                AxisScaleToggle {
                    group: "{key}-yaxis-type",
                    selection: panel.y_scale,
                }
            }
        }

        // Charts: snapshot scatter left, hover time series right.
        div {
            style: "display: flex; gap: 8px; border-bottom: thin solid lightgrey; padding: 10px 5px;",
            div {
                style: "width: 49%; border-right: thin solid lightgrey;",
                ChartContainer {
                    id: scatter_id,
                    loading: *state.loading.read(),
                    min_height: 450,
                }
            }
            div {
                style: "width: 49%;",
                ChartContainer {
                    id: x_series_id,
                    loading: *state.loading.read(),
                    min_height: 225,
                }
                ChartContainer {
                    id: y_series_id,
                    loading: *state.loading.read(),
                    min_height: 225,
                }
            }
        }
    }
}
