//! Record types matching the upstream CSV columns.
//!
//! Field names deserialize by header, so the quirky upstream headers
//! ("Country/Region", lowercase "indicator") are pinned with serde renames.

use serde::Deserialize;

/// One row of the stacked long-format file (`result.csv`).
///
/// One row per (country, date, indicator); `days` counts from the
/// country's first recorded case/death.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StackedRecord {
    #[serde(rename = "Country/Region")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Days")]
    pub days: i64,
    #[serde(rename = "indicator")]
    pub indicator: String,
    #[serde(rename = "value")]
    pub value: f64,
}

/// One row of the pivoted wide-format file (`result_pivoted.csv`).
///
/// One row per (country, date), metrics as columns. Only the metrics the
/// animation consumes are modeled; extra columns are ignored by serde.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PivotedRecord {
    #[serde(rename = "Country/Region")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Days")]
    pub days: i64,
    #[serde(rename = "total_cases")]
    pub total_cases: f64,
    #[serde(rename = "new_cases")]
    pub new_cases: f64,
    #[serde(rename = "growth_rate")]
    pub growth_rate: f64,
    #[serde(rename = "doubling_time")]
    pub doubling_time: Option<f64>,
}
