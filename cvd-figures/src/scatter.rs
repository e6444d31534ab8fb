//! Day-snapshot scatter figure: one marker series per continent.

use crate::continents_in_order;
use cvd_data::AxisScale;
use cvd_db::models::ScatterPoint;
use serde_json::{json, Value};

/// Build the snapshot scatter figure for one dataset panel.
///
/// One `markers` trace per continent (first-appearance order); x/y are the
/// selected indicator values, `text`/`customdata` carry the country so
/// hovering can drive the side time-series charts. A continent with no
/// points for the selected indicators yields no trace; an empty `points`
/// slice yields a figure with no traces, which Plotly renders as an empty
/// chart.
pub fn snapshot_figure(
    points: &[ScatterPoint],
    x_label: &str,
    y_label: &str,
    x_scale: AxisScale,
    y_scale: AxisScale,
) -> Value {
    let traces: Vec<Value> = continents_in_order(points, |p| p.continent.as_str())
        .into_iter()
        .map(|continent| {
            let members: Vec<&ScatterPoint> =
                points.iter().filter(|p| p.continent == continent).collect();
            let countries: Vec<&str> = members.iter().map(|p| p.country.as_str()).collect();
            json!({
                "x": members.iter().map(|p| p.x).collect::<Vec<f64>>(),
                "y": members.iter().map(|p| p.y).collect::<Vec<f64>>(),
                "text": countries.clone(),
                "customdata": countries,
                "mode": "markers",
                "marker": {
                    "size": 15,
                    "opacity": 0.5,
                    "line": { "width": 0.5, "color": "white" }
                },
                "name": continent,
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "xaxis": { "title": x_label, "type": x_scale.plotly_type() },
            "yaxis": { "title": y_label, "type": y_scale.plotly_type() },
            "margin": { "l": 40, "b": 30, "t": 10, "r": 0 },
            "height": 450,
            "hovermode": "closest",
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<ScatterPoint> {
        vec![
            ScatterPoint {
                country: "Netherlands".into(),
                continent: "Europe".into(),
                x: 30.0,
                y: 12.0,
            },
            ScatterPoint {
                country: "China".into(),
                continent: "Asia".into(),
                x: 920.0,
                y: 277.0,
            },
            ScatterPoint {
                country: "Germany".into(),
                continent: "Europe".into(),
                x: 57.0,
                y: 9.0,
            },
        ]
    }

    #[test]
    fn one_trace_per_continent() {
        let fig = snapshot_figure(
            &sample_points(),
            "Total cases",
            "New cases",
            AxisScale::Linear,
            AxisScale::Linear,
        );
        let traces = fig["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Europe");
        assert_eq!(traces[1]["name"], "Asia");

        // Europe trace holds both European countries, in input order.
        assert_eq!(
            traces[0]["customdata"],
            json!(["Netherlands", "Germany"])
        );
        assert_eq!(traces[0]["x"], json!([30.0, 57.0]));
        assert_eq!(traces[0]["y"], json!([12.0, 9.0]));
    }

    #[test]
    fn axis_types_follow_toggles() {
        let fig = snapshot_figure(
            &sample_points(),
            "Total cases",
            "New cases",
            AxisScale::Log,
            AxisScale::Linear,
        );
        assert_eq!(fig["layout"]["xaxis"]["type"], "log");
        assert_eq!(fig["layout"]["yaxis"]["type"], "linear");
        assert_eq!(fig["layout"]["xaxis"]["title"], "Total cases");
        assert_eq!(fig["layout"]["yaxis"]["title"], "New cases");
    }

    #[test]
    fn marker_styling_matches_dashboard() {
        let fig = snapshot_figure(
            &sample_points(),
            "x",
            "y",
            AxisScale::Linear,
            AxisScale::Linear,
        );
        let marker = &fig["data"][0]["marker"];
        assert_eq!(marker["size"], 15);
        assert_eq!(marker["opacity"], 0.5);
        assert_eq!(marker["line"]["color"], "white");
        assert_eq!(fig["layout"]["height"], 450);
        assert_eq!(fig["layout"]["hovermode"], "closest");
    }

    #[test]
    fn empty_points_yield_empty_data() {
        let fig = snapshot_figure(&[], "x", "y", AxisScale::Linear, AxisScale::Log);
        assert_eq!(fig["data"].as_array().unwrap().len(), 0);
        // Layout still present so the empty chart renders with axes.
        assert_eq!(fig["layout"]["yaxis"]["type"], "log");
    }
}
