//! Animated scatter-over-time figure built from the pivoted table.
//!
//! Plotly.js has no express-style frame grouping, so the animation schema
//! is constructed by hand: one frame per distinct day, one trace per
//! continent within each frame, plus the play/pause buttons and the
//! day slider whose steps activate frames by name.

use crate::{clip_floor, continents_in_order};
use cvd_db::models::FrameRow;
use serde_json::{json, Value};

/// Marker diameter (px) given to the day's largest |growth rate|.
const MAX_MARKER_PX: f64 = 40.0;

/// Build the animated growth scatter from day-ordered pivoted rows.
///
/// x = total cases, y = new cases (both log-scaled), marker area scaled by
/// absolute growth rate. All three are floored at 1.0 so the log axes and
/// the area sizing never see non-positive values. `rows` must be ordered
/// by day (as [`query_animation_rows`](cvd_db::Database::query_animation_rows)
/// returns them); the first day becomes the initial `data`.
pub fn growth_animation_figure(rows: &[FrameRow]) -> Value {
    let mut days: Vec<i64> = Vec::new();
    for row in rows {
        if days.last() != Some(&row.days) {
            days.push(row.days);
        }
    }

    // One sizeref across all frames keeps marker areas comparable over time.
    let max_growth = rows
        .iter()
        .map(|r| clip_floor(r.growth_rate.abs()))
        .fold(1.0_f64, f64::max);
    let sizeref = 2.0 * max_growth / (MAX_MARKER_PX * MAX_MARKER_PX);

    let frames: Vec<Value> = days
        .iter()
        .map(|&day| {
            let day_rows: Vec<&FrameRow> = rows.iter().filter(|r| r.days == day).collect();
            json!({
                "name": day.to_string(),
                "data": frame_traces(&day_rows, sizeref),
            })
        })
        .collect();

    let steps: Vec<Value> = days
        .iter()
        .map(|&day| {
            json!({
                "args": [
                    [day.to_string()],
                    {
                        "frame": { "duration": 0, "redraw": false },
                        "mode": "immediate",
                        "transition": { "duration": 0 },
                    }
                ],
                "label": day.to_string(),
                "method": "animate",
            })
        })
        .collect();

    let initial_data = frames
        .first()
        .map(|f| f["data"].clone())
        .unwrap_or_else(|| json!([]));

    log::info!(
        "[CVD Debug] figures: animation built {} frames from {} rows",
        frames.len(),
        rows.len()
    );

    json!({
        "data": initial_data,
        "layout": {
            "xaxis": { "title": "Total cases", "type": "log" },
            "yaxis": { "title": "New cases", "type": "log" },
            "margin": { "l": 50, "b": 40, "t": 10, "r": 10 },
            "height": 600,
            "hovermode": "closest",
            "updatemenus": [{
                "type": "buttons",
                "showactive": false,
                "x": 0.05, "y": 1.1, "xanchor": "right", "yanchor": "top",
                "buttons": [
                    {
                        "label": "Play",
                        "method": "animate",
                        "args": [null, {
                            "frame": { "duration": 300, "redraw": false },
                            "fromcurrent": true,
                            "transition": { "duration": 200, "easing": "quadratic-in-out" },
                        }],
                    },
                    {
                        "label": "Pause",
                        "method": "animate",
                        "args": [[null], {
                            "frame": { "duration": 0, "redraw": false },
                            "mode": "immediate",
                            "transition": { "duration": 0 },
                        }],
                    }
                ],
            }],
            "sliders": [{
                "active": 0,
                "currentvalue": { "prefix": "Day: ", "visible": true },
                "pad": { "t": 30 },
                "steps": steps,
            }],
        },
        "frames": frames,
    })
}

/// One trace per continent for a single day's rows.
fn frame_traces(day_rows: &[&FrameRow], sizeref: f64) -> Vec<Value> {
    continents_in_order(day_rows, |r| r.continent.as_str())
        .into_iter()
        .map(|continent| {
            let members: Vec<&&FrameRow> = day_rows
                .iter()
                .filter(|r| r.continent == continent)
                .collect();
            let countries: Vec<&str> = members.iter().map(|r| r.country.as_str()).collect();
            json!({
                "x": members.iter().map(|r| clip_floor(r.total_cases)).collect::<Vec<f64>>(),
                "y": members.iter().map(|r| clip_floor(r.new_cases)).collect::<Vec<f64>>(),
                "text": countries.clone(),
                "customdata": countries,
                "mode": "markers",
                "marker": {
                    "size": members.iter()
                        .map(|r| clip_floor(r.growth_rate.abs()))
                        .collect::<Vec<f64>>(),
                    "sizemode": "area",
                    "sizeref": sizeref,
                    "sizemin": 4,
                    "opacity": 0.6,
                    "line": { "width": 0.5, "color": "white" },
                },
                "name": continent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, continent: &str, days: i64, total: f64, new: f64, growth: f64) -> FrameRow {
        FrameRow {
            country: country.into(),
            continent: continent.into(),
            date: format!("2020-03-{:02}", days + 1),
            days,
            total_cases: total,
            new_cases: new,
            growth_rate: growth,
        }
    }

    fn sample_rows() -> Vec<FrameRow> {
        vec![
            row("China", "Asia", 0, 548.0, 548.0, 1.0),
            row("Netherlands", "Europe", 0, 10.0, 10.0, 0.0),
            row("China", "Asia", 1, 643.0, 95.0, 1.2),
            row("Netherlands", "Europe", 1, 18.0, 8.0, 1.8),
            row("China", "Asia", 2, 920.0, 277.0, -1.4),
            row("Netherlands", "Europe", 2, 30.0, 12.0, 1.7),
        ]
    }

    #[test]
    fn one_frame_per_day_with_matching_slider_steps() {
        let fig = growth_animation_figure(&sample_rows());
        let frames = fig["frames"].as_array().unwrap();
        let steps = fig["layout"]["sliders"][0]["steps"].as_array().unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(steps.len(), frames.len());

        for (frame, step) in frames.iter().zip(steps) {
            // Each step's first animate arg names exactly its frame.
            assert_eq!(step["args"][0][0], frame["name"]);
            assert_eq!(step["label"], frame["name"]);
            assert_eq!(step["method"], "animate");
        }
    }

    #[test]
    fn initial_data_is_first_frame() {
        let fig = growth_animation_figure(&sample_rows());
        assert_eq!(fig["data"], fig["frames"][0]["data"]);
    }

    #[test]
    fn traces_split_by_continent_within_frame() {
        let fig = growth_animation_figure(&sample_rows());
        let day0 = fig["frames"][0]["data"].as_array().unwrap();
        assert_eq!(day0.len(), 2);
        assert_eq!(day0[0]["name"], "Asia");
        assert_eq!(day0[1]["name"], "Europe");
        assert_eq!(day0[0]["customdata"], json!(["China"]));
    }

    #[test]
    fn all_plotted_values_are_log_safe() {
        // Netherlands day 0 has growth 0.0; China day 2 has growth -1.4.
        let fig = growth_animation_figure(&sample_rows());
        for frame in fig["frames"].as_array().unwrap() {
            for trace in frame["data"].as_array().unwrap() {
                for field in ["x", "y"] {
                    for v in trace[field].as_array().unwrap() {
                        assert!(v.as_f64().unwrap() >= 1.0, "{} below clip floor", field);
                    }
                }
                for v in trace["marker"]["size"].as_array().unwrap() {
                    assert!(v.as_f64().unwrap() >= 1.0, "marker size below clip floor");
                }
            }
        }
    }

    #[test]
    fn negative_growth_sizes_by_magnitude() {
        let fig = growth_animation_figure(&sample_rows());
        // China day 2 growth is -1.4; its marker size must be 1.4.
        let asia_day2 = &fig["frames"][2]["data"][0];
        assert_eq!(asia_day2["customdata"], json!(["China"]));
        let size = asia_day2["marker"]["size"][0].as_f64().unwrap();
        assert!((size - 1.4).abs() < 1e-9);
    }

    #[test]
    fn axes_are_log_scaled() {
        let fig = growth_animation_figure(&sample_rows());
        assert_eq!(fig["layout"]["xaxis"]["type"], "log");
        assert_eq!(fig["layout"]["yaxis"]["type"], "log");
    }

    #[test]
    fn play_and_pause_buttons_present() {
        let fig = growth_animation_figure(&sample_rows());
        let buttons = fig["layout"]["updatemenus"][0]["buttons"].as_array().unwrap();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0]["label"], "Play");
        assert_eq!(buttons[1]["label"], "Pause");
    }

    #[test]
    fn empty_input_builds_empty_animation() {
        let fig = growth_animation_figure(&[]);
        assert_eq!(fig["frames"].as_array().unwrap().len(), 0);
        assert_eq!(fig["data"].as_array().unwrap().len(), 0);
        assert_eq!(
            fig["layout"]["sliders"][0]["steps"].as_array().unwrap().len(),
            0
        );
    }

    #[test]
    fn sizeref_scales_largest_marker_to_cap() {
        let fig = growth_animation_figure(&sample_rows());
        // Largest |growth| is 1.8; with sizemode area the pixel diameter is
        // sqrt(size / sizeref * 2)... Plotly's area formula gives
        // MAX_MARKER_PX for the max when sizeref = 2*max/px^2.
        let sizeref = fig["frames"][0]["data"][0]["marker"]["sizeref"]
            .as_f64()
            .unwrap();
        let expected = 2.0 * 1.8 / (MAX_MARKER_PX * MAX_MARKER_PX);
        assert!((sizeref - expected).abs() < 1e-12);
    }
}
