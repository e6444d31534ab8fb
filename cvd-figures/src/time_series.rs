//! Hover-driven country time-series figure.

use cvd_data::AxisScale;
use cvd_db::models::SeriesPoint;
use serde_json::{json, Value};

/// Build the compact line chart shown beside the snapshot scatter.
///
/// `title` is HTML (Plotly annotation text), conventionally
/// `<b>{country}</b><br>{indicator}`. An empty series produces an empty
/// line chart, mirroring how a hover on a country with no data renders.
pub fn country_series_figure(series: &[SeriesPoint], scale: AxisScale, title: &str) -> Value {
    json!({
        "data": [{
            "x": series.iter().map(|p| p.date.as_str()).collect::<Vec<&str>>(),
            "y": series.iter().map(|p| p.value).collect::<Vec<f64>>(),
            "mode": "lines+markers",
        }],
        "layout": {
            "height": 225,
            "margin": { "l": 40, "b": 30, "r": 10, "t": 10 },
            "annotations": [{
                "x": 0, "y": 0.85, "xanchor": "left", "yanchor": "bottom",
                "xref": "paper", "yref": "paper", "showarrow": false,
                "align": "left", "bgcolor": "rgba(255, 255, 255, 0.5)",
                "text": title,
            }],
            "yaxis": { "type": scale.plotly_type() },
            "xaxis": { "showgrid": false },
        }
    })
}

/// Annotation title for a hover time series.
pub fn series_title(country: &str, indicator: &str) -> String {
    format!("<b>{}</b><br>{}", country, indicator)
}
