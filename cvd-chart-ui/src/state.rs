//! Application state managed via Dioxus signals.
//!
//! `AppState` bundles the app-wide signals (database handle, load/error
//! status) and is provided via `use_context_provider`; child components
//! retrieve it with `use_context::<AppState>()`.
//!
//! `PanelState` bundles the controls of ONE dataset panel (the cases and
//! deaths sections each own an instance, so it is a plain `Copy` value
//! created with `use_hook` and passed down, not a context).

use cvd_data::AxisScale;
use cvd_db::Database;
use dioxus::prelude::*;

/// Country whose time series shows before the first real hover arrives.
pub const DEFAULT_HOVER_COUNTRY: &str = "Netherlands";

/// App-wide state shared by all CVD dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until the embedded CSVs are loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

/// Controls of one dataset panel: indicator dropdowns, axis toggles,
/// the hovered country, and (in the slider variant) the snapshot day.
#[derive(Clone, Copy)]
pub struct PanelState {
    /// Dropdown options, filled once the database is loaded
    pub indicators: Signal<Vec<String>>,
    /// Selected x-axis indicator label
    pub x_indicator: Signal<String>,
    /// Selected y-axis indicator label
    pub y_indicator: Signal<String>,
    /// Linear/log toggle for the x axis
    pub x_scale: Signal<AxisScale>,
    /// Linear/log toggle for the y axis
    pub y_scale: Signal<AxisScale>,
    /// Country under the cursor on the snapshot scatter
    pub hovered_country: Signal<String>,
    /// Snapshot day; tracks the dataset's latest day unless a slider moves it
    pub selected_day: Signal<i64>,
}

impl PanelState {
    /// Create a new PanelState with default signal values.
    pub fn new() -> Self {
        Self {
            indicators: Signal::new(Vec::new()),
            x_indicator: Signal::new(String::new()),
            y_indicator: Signal::new(String::new()),
            x_scale: Signal::new(AxisScale::Linear),
            y_scale: Signal::new(AxisScale::Linear),
            hovered_country: Signal::new(DEFAULT_HOVER_COUNTRY.to_string()),
            selected_day: Signal::new(0),
        }
    }
}
