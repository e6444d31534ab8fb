//! Typed query methods for the dashboard charts.
//!
//! All queries return typed structs from [`crate::models`] that the figure
//! builders turn into Plotly figure JSON. Every query is a read-only filter
//! over the loaded tables; nothing here mutates state.
//!
//! # Day Axis Convention
//!
//! `days` is an integer offset from each country's first recorded
//! case/death, which puts all countries on a common time axis regardless
//! of when their outbreak started. "The latest day" therefore means the
//! maximum offset any country has reached, and a snapshot at that day only
//! contains countries whose history is that long.

use crate::models::{FrameRow, PivotGap, ScatterPoint, SeriesPoint};
use crate::Database;
use cvd_data::DatasetKind;
use rusqlite::params;

impl Database {
    /// Distinct indicator labels for one dataset, in first-appearance
    /// (file) order. Feeds the x/y dropdown options.
    pub fn query_indicators(&self, kind: DatasetKind) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT indicator FROM stacked
             WHERE dataset = ?1
             GROUP BY indicator
             ORDER BY MIN(rowid)",
        )?;
        let rows = stmt
            .query_map(params![kind.key()], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[CVD Debug] query: query_indicators({}) returned {} labels",
            kind.key(),
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct continents across both datasets, in first-appearance order.
    pub fn query_continents(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT continent FROM stacked
             GROUP BY continent
             ORDER BY MIN(rowid)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[CVD Debug] query: query_continents returned {} continents",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct countries for one dataset, alphabetical.
    pub fn query_countries(&self, kind: DatasetKind) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT country FROM stacked
             WHERE dataset = ?1
             ORDER BY country",
        )?;
        let rows = stmt
            .query_map(params![kind.key()], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// The latest day offset present in one dataset, or `None` when the
    /// dataset is empty. The default snapshot day for the scatter charts.
    pub fn query_max_day(&self, kind: DatasetKind) -> anyhow::Result<Option<i64>> {
        let conn = self.conn.borrow();
        let max: Option<i64> = conn.query_row(
            "SELECT MAX(days) FROM stacked WHERE dataset = ?1",
            params![kind.key()],
            |row| row.get(0),
        )?;
        Ok(max)
    }

    /// The (min, max) day domain for one dataset, or `None` when empty.
    /// Bounds the day slider.
    pub fn query_day_domain(&self, kind: DatasetKind) -> anyhow::Result<Option<(i64, i64)>> {
        let conn = self.conn.borrow();
        let (min, max): (Option<i64>, Option<i64>) = conn.query_row(
            "SELECT MIN(days), MAX(days) FROM stacked WHERE dataset = ?1",
            params![kind.key()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(min.zip(max))
    }

    /// All distinct day offsets for one dataset, ascending.
    pub fn query_days(&self, kind: DatasetKind) -> anyhow::Result<Vec<i64>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT days FROM stacked
             WHERE dataset = ?1
             ORDER BY days",
        )?;
        let rows = stmt
            .query_map(params![kind.key()], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(rows)
    }

    /// Day-snapshot scatter points: one per country that has BOTH the x
    /// and y indicator at the given day, x/y paired by joining the stacked
    /// table against itself on (country, day).
    ///
    /// Countries missing either indicator at that day simply drop out;
    /// an unknown indicator yields an empty set, not an error.
    pub fn query_day_snapshot(
        &self,
        kind: DatasetKind,
        day: i64,
        x_indicator: &str,
        y_indicator: &str,
    ) -> anyhow::Result<Vec<ScatterPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT x.country, x.continent, x.value, y.value
             FROM stacked x
             JOIN stacked y
               ON y.dataset = x.dataset
              AND y.country = x.country
              AND y.days = x.days
              AND y.indicator = ?4
             WHERE x.dataset = ?1 AND x.days = ?2 AND x.indicator = ?3
             ORDER BY x.rowid",
        )?;
        let rows = stmt
            .query_map(
                params![kind.key(), day, x_indicator, y_indicator],
                |row| {
                    Ok(ScatterPoint {
                        country: row.get(0)?,
                        continent: row.get(1)?,
                        x: row.get(2)?,
                        y: row.get(3)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[CVD Debug] query: query_day_snapshot({}, day {}) returned {} points",
            kind.key(),
            day,
            rows.len()
        );
        Ok(rows)
    }

    /// One country's time series for one indicator, ordered by day offset.
    /// Feeds the hover-driven line charts.
    pub fn query_country_series(
        &self,
        kind: DatasetKind,
        country: &str,
        indicator: &str,
    ) -> anyhow::Result<Vec<SeriesPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, days, value FROM stacked
             WHERE dataset = ?1 AND country = ?2 AND indicator = ?3
             ORDER BY days",
        )?;
        let rows = stmt
            .query_map(params![kind.key(), country, indicator], |row| {
                Ok(SeriesPoint {
                    date: row.get(0)?,
                    days: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[CVD Debug] query: query_country_series({}, {}) returned {} points",
            country,
            indicator,
            rows.len()
        );
        Ok(rows)
    }

    /// All pivoted rows for one dataset ordered by (day, continent,
    /// country) — the input for the animated scatter builder.
    pub fn query_animation_rows(&self, kind: DatasetKind) -> anyhow::Result<Vec<FrameRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, continent, date, days, total_cases, new_cases, growth_rate
             FROM pivoted
             WHERE dataset = ?1
             ORDER BY days, continent, country",
        )?;
        let rows = stmt
            .query_map(params![kind.key()], |row| {
                Ok(FrameRow {
                    country: row.get(0)?,
                    continent: row.get(1)?,
                    date: row.get(2)?,
                    days: row.get(3)?,
                    total_cases: row.get(4)?,
                    new_cases: row.get(5)?,
                    growth_rate: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[CVD Debug] query: query_animation_rows({}) returned {} rows",
            kind.key(),
            rows.len()
        );
        Ok(rows)
    }

    /// (country, date) pairs that appear in the stacked table under the
    /// given reference indicator but have no pivoted row. An empty result
    /// means the animation can render every point the long table knows.
    pub fn query_pivot_gaps(
        &self,
        kind: DatasetKind,
        reference_indicator: &str,
    ) -> anyhow::Result<Vec<PivotGap>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT s.country, s.date
             FROM stacked s
             LEFT JOIN pivoted p
               ON p.dataset = s.dataset
              AND p.country = s.country
              AND p.date = s.date
             WHERE s.dataset = ?1 AND s.indicator = ?2 AND p.country IS NULL
             ORDER BY s.country, s.date",
        )?;
        let rows = stmt
            .query_map(params![kind.key(), reference_indicator], |row| {
                Ok(PivotGap {
                    country: row.get(0)?,
                    date: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[CVD Debug] query: query_pivot_gaps({}) returned {} gaps",
            kind.key(),
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    /// Two countries, three days, two indicators, plus a matching pivoted
    /// table — the smallest fixture exercising every query.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();

        let stacked_csv = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,10
Netherlands,Europe,2020-03-02,1,Total cases,18
Netherlands,Europe,2020-03-03,2,Total cases,30
China,Asia,2020-01-22,0,Total cases,548
China,Asia,2020-01-23,1,Total cases,643
China,Asia,2020-01-24,2,Total cases,920
Netherlands,Europe,2020-03-01,0,New cases,10
Netherlands,Europe,2020-03-02,1,New cases,8
Netherlands,Europe,2020-03-03,2,New cases,12
China,Asia,2020-01-22,0,New cases,548
China,Asia,2020-01-23,1,New cases,95
China,Asia,2020-01-24,2,New cases,277
";
        db.load_stacked(cvd_data::DatasetKind::Cases, stacked_csv)
            .unwrap();

        let pivoted_csv = "\
Country/Region,Continent,Date,Days,total_cases,new_cases,growth_rate,doubling_time
Netherlands,Europe,2020-03-01,0,10,10,1.0,
Netherlands,Europe,2020-03-02,1,18,8,1.8,2.3
Netherlands,Europe,2020-03-03,2,30,12,1.7,1.9
China,Asia,2020-01-22,0,548,548,1.0,
China,Asia,2020-01-23,1,643,95,1.2,4.0
China,Asia,2020-01-24,2,920,277,1.4,2.1
";
        db.load_pivoted(cvd_data::DatasetKind::Cases, pivoted_csv)
            .unwrap();

        db
    }

    use cvd_data::DatasetKind;

    // ───────────────────── Domain Queries ─────────────────────

    #[test]
    fn two_countries_three_days_fixture_shape() {
        // Spec end-to-end property: 2 countries x 3 days must yield exactly
        // six stacked rows per indicator and six pivoted rows.
        let db = sample_db();
        let conn = db.conn.borrow();

        for indicator in ["Total cases", "New cases"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM stacked WHERE indicator = ?1",
                    params![indicator],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 6, "indicator {:?}", indicator);
        }

        let pivoted: i64 = conn
            .query_row("SELECT COUNT(*) FROM pivoted", [], |row| row.get(0))
            .unwrap();
        assert_eq!(pivoted, 6);
    }

    #[test]
    fn query_indicators_in_file_order() {
        let db = sample_db();
        let indicators = db.query_indicators(DatasetKind::Cases).unwrap();
        assert_eq!(indicators, vec!["Total cases", "New cases"]);
    }

    #[test]
    fn query_indicators_empty_for_unloaded_dataset() {
        let db = sample_db();
        let indicators = db.query_indicators(DatasetKind::Deaths).unwrap();
        assert!(indicators.is_empty());
    }

    #[test]
    fn query_continents_in_file_order() {
        let db = sample_db();
        let continents = db.query_continents().unwrap();
        assert_eq!(continents, vec!["Europe", "Asia"]);
    }

    #[test]
    fn query_countries_alphabetical() {
        let db = sample_db();
        let countries = db.query_countries(DatasetKind::Cases).unwrap();
        assert_eq!(countries, vec!["China", "Netherlands"]);
    }

    #[test]
    fn query_day_domain_and_max() {
        let db = sample_db();
        assert_eq!(
            db.query_day_domain(DatasetKind::Cases).unwrap(),
            Some((0, 2))
        );
        assert_eq!(db.query_max_day(DatasetKind::Cases).unwrap(), Some(2));
        assert_eq!(db.query_max_day(DatasetKind::Deaths).unwrap(), None);
    }

    #[test]
    fn every_day_in_domain_has_rows() {
        // Spec property: filtering by any day present in the day domain
        // returns a non-empty set.
        let db = sample_db();
        for day in db.query_days(DatasetKind::Cases).unwrap() {
            let points = db
                .query_day_snapshot(DatasetKind::Cases, day, "Total cases", "New cases")
                .unwrap();
            assert!(!points.is_empty(), "day {} should have rows", day);
        }
    }

    // ───────────────────── Snapshot Queries ─────────────────────

    #[test]
    fn query_day_snapshot_pairs_x_and_y_by_country() {
        let db = sample_db();
        let points = db
            .query_day_snapshot(DatasetKind::Cases, 2, "Total cases", "New cases")
            .unwrap();
        assert_eq!(points.len(), 2);

        let nl = points.iter().find(|p| p.country == "Netherlands").unwrap();
        assert!((nl.x - 30.0).abs() < 0.01);
        assert!((nl.y - 12.0).abs() < 0.01);
        assert_eq!(nl.continent, "Europe");

        let cn = points.iter().find(|p| p.country == "China").unwrap();
        assert!((cn.x - 920.0).abs() < 0.01);
        assert!((cn.y - 277.0).abs() < 0.01);
    }

    #[test]
    fn query_day_snapshot_unknown_indicator_is_empty() {
        let db = sample_db();
        let points = db
            .query_day_snapshot(DatasetKind::Cases, 2, "Total cases", "No such metric")
            .unwrap();
        assert!(points.is_empty(), "Unknown indicator renders empty, not an error");
    }

    #[test]
    fn query_day_snapshot_drops_countries_missing_one_indicator() {
        let db = sample_db();
        // France only has Total cases, no New cases row at day 0.
        let extra = "\
Country/Region,Continent,Date,Days,indicator,value
France,Europe,2020-03-01,0,Total cases,100
";
        db.load_stacked(DatasetKind::Cases, extra).unwrap();

        let points = db
            .query_day_snapshot(DatasetKind::Cases, 0, "Total cases", "New cases")
            .unwrap();
        assert_eq!(points.len(), 2, "France lacks a y value and drops out");
        assert!(points.iter().all(|p| p.country != "France"));
    }

    // ───────────────────── Time Series Queries ─────────────────────

    #[test]
    fn query_country_series_ordered_by_days() {
        let db = sample_db();
        let series = db
            .query_country_series(DatasetKind::Cases, "Netherlands", "Total cases")
            .unwrap();
        assert_eq!(series.len(), 3);
        let days: Vec<i64> = series.iter().map(|p| p.days).collect();
        assert_eq!(days, vec![0, 1, 2]);
        assert_eq!(series[0].date, "2020-03-01");
        assert!((series[2].value - 30.0).abs() < 0.01);
    }

    #[test]
    fn query_country_series_unknown_country_is_empty() {
        let db = sample_db();
        let series = db
            .query_country_series(DatasetKind::Cases, "Atlantis", "Total cases")
            .unwrap();
        assert!(series.is_empty());
    }

    // ───────────────────── Animation Queries ─────────────────────

    #[test]
    fn query_animation_rows_ordered_by_day() {
        let db = sample_db();
        let rows = db.query_animation_rows(DatasetKind::Cases).unwrap();
        assert_eq!(rows.len(), 6);

        let days: Vec<i64> = rows.iter().map(|r| r.days).collect();
        let mut sorted = days.clone();
        sorted.sort();
        assert_eq!(days, sorted, "rows must arrive day-ascending");

        // Within day 0: Asia (China) sorts before Europe (Netherlands)
        assert_eq!(rows[0].country, "China");
        assert_eq!(rows[1].country, "Netherlands");
    }

    #[test]
    fn query_pivot_gaps_clean_fixture() {
        let db = sample_db();
        let gaps = db
            .query_pivot_gaps(DatasetKind::Cases, "Total cases")
            .unwrap();
        assert!(gaps.is_empty(), "fixture pivot covers every (country, date)");
    }

    #[test]
    fn query_pivot_gaps_detects_missing_row() {
        let db = sample_db();
        let extra = "\
Country/Region,Continent,Date,Days,indicator,value
Brazil,South America,2020-03-10,0,Total cases,77
";
        db.load_stacked(DatasetKind::Cases, extra).unwrap();

        let gaps = db
            .query_pivot_gaps(DatasetKind::Cases, "Total cases")
            .unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].country, "Brazil");
        assert_eq!(gaps[0].date, "2020-03-10");
    }

    // ───────────────────── Integration ─────────────────────

    #[test]
    fn full_dashboard_workflow() {
        let db = sample_db();

        // 1. Dropdown options
        let indicators = db.query_indicators(DatasetKind::Cases).unwrap();
        assert!(!indicators.is_empty());

        // 2. Snapshot at the latest day
        let max_day = db.query_max_day(DatasetKind::Cases).unwrap().unwrap();
        let points = db
            .query_day_snapshot(DatasetKind::Cases, max_day, &indicators[0], &indicators[1])
            .unwrap();
        assert!(!points.is_empty());

        // 3. Hover a country, pull its series
        let series = db
            .query_country_series(DatasetKind::Cases, &points[0].country, &indicators[0])
            .unwrap();
        assert_eq!(series.len(), 3);

        // 4. Animation input covers the same countries
        let rows = db.query_animation_rows(DatasetKind::Cases).unwrap();
        assert_eq!(rows.len(), 6);
    }
}
