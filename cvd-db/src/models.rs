//! Query result model structs for the dashboard charts.
//!
//! All structs derive `Serialize` so the figure builders can embed them
//! in Plotly figure JSON from the Dioxus WASM frontend.

use serde::Serialize;

/// One country's marker in a day-snapshot scatter.
///
/// `x` and `y` are the values of the two selected indicators for this
/// country at the snapshot day.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub continent: String,
    pub x: f64,
    pub y: f64,
}

/// A single (date, days, value) observation in a country's indicator
/// time series, ordered by `days`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub days: i64,
    pub value: f64,
}

/// One pivoted row feeding the animated scatter.
///
/// Total/new cases become x/y, growth rate sizes the marker. Values are
/// NOT clipped here; the figure builder applies the log-scale floor.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameRow {
    pub country: String,
    pub continent: String,
    pub date: String,
    pub days: i64,
    pub total_cases: f64,
    pub new_cases: f64,
    pub growth_rate: f64,
}

/// A (country, date) pair present in the stacked table but missing from
/// the pivoted table; reported by the pivot-coverage check.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PivotGap {
    pub country: String,
    pub date: String,
}
