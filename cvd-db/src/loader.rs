//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses one upstream CSV from a string slice and inserts rows
//! into the corresponding table. Indicator labels are canonicalized through
//! the dataset's rename map while loading, so the stored tables never
//! contain colliding cases/deaths labels.
//!
//! # CSV Formats (header row required)
//!
//! - **Stacked** (`result.csv`): `Country/Region,Continent,Date,Days,indicator,value`
//! - **Pivoted** (`result_pivoted.csv`): `Country/Region,Continent,Date,Days,total_cases,new_cases,growth_rate,doubling_time`
//!
//! Rows that fail to parse (missing columns, non-numeric values from
//! upstream NaNs) are skipped and counted, not fatal.

use crate::Database;
use cvd_data::{DatasetKind, PivotedRecord, StackedRecord};
use rusqlite::params;

impl Database {
    /// Load a stacked long-format CSV for one dataset.
    ///
    /// Applies the dataset's indicator rename map to every row before
    /// insert, so e.g. a deaths-file "Total cases" row is stored as
    /// "Total deaths".
    ///
    /// # Example CSV
    /// ```text
    /// Country/Region,Continent,Date,Days,indicator,value
    /// Netherlands,Europe,2020-03-01,0,Total cases,10
    /// ```
    pub fn load_stacked(&self, kind: DatasetKind, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.deserialize::<StackedRecord>() {
            let record = match result {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if record.country.is_empty() || record.indicator.is_empty() {
                skipped += 1;
                continue;
            }
            let indicator = kind.canonical_label(&record.indicator);

            conn.execute(
                "INSERT OR REPLACE INTO stacked
                 (dataset, country, continent, date, days, indicator, value)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    kind.key(),
                    record.country,
                    record.continent,
                    record.date,
                    record.days,
                    indicator,
                    record.value
                ],
            )?;
            count += 1;
        }
        log::info!(
            "[CVD Debug] loader: Loaded {} stacked {} rows, skipped {}",
            count,
            kind.key(),
            skipped
        );
        Ok(())
    }

    /// Load a pivoted wide-format CSV for one dataset.
    ///
    /// # Example CSV
    /// ```text
    /// Country/Region,Continent,Date,Days,total_cases,new_cases,growth_rate,doubling_time
    /// Netherlands,Europe,2020-03-01,0,10,10,1.0,
    /// ```
    pub fn load_pivoted(&self, kind: DatasetKind, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.deserialize::<PivotedRecord>() {
            let record = match result {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if record.country.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO pivoted
                 (dataset, country, continent, date, days,
                  total_cases, new_cases, growth_rate, doubling_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    kind.key(),
                    record.country,
                    record.continent,
                    record.date,
                    record.days,
                    record.total_cases,
                    record.new_cases,
                    record.growth_rate,
                    record.doubling_time
                ],
            )?;
            count += 1;
        }
        log::info!(
            "[CVD Debug] loader: Loaded {} pivoted {} rows, skipped {}",
            count,
            kind.key(),
            skipped
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use cvd_data::DatasetKind;

    #[test]
    fn load_stacked_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,10
Netherlands,Europe,2020-03-02,1,Total cases,18
Germany,Europe,2020-03-01,0,Total cases,25
";
        db.load_stacked(DatasetKind::Cases, csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM stacked", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let value: f64 = conn
            .query_row(
                "SELECT value FROM stacked
                 WHERE country = 'Netherlands' AND date = '2020-03-02'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((value - 18.0).abs() < 0.01);
    }

    #[test]
    fn load_stacked_canonicalizes_indicator_labels() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Growth Rate,1.5
Netherlands,Europe,2020-03-01,0,Total cases,10
";
        db.load_stacked(DatasetKind::Deaths, csv).unwrap();

        let conn = db.conn.borrow();
        let mut stmt = conn
            .prepare("SELECT indicator FROM stacked ORDER BY indicator")
            .unwrap();
        let labels: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(labels, vec!["Growth Rate (deaths)", "Total deaths"]);
    }

    #[test]
    fn load_stacked_replaces_on_conflict() {
        let db = Database::new().unwrap();
        let csv1 = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,10
";
        let csv2 = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,11
";
        db.load_stacked(DatasetKind::Cases, csv1).unwrap();
        db.load_stacked(DatasetKind::Cases, csv2).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM stacked", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Should have 1 row after upsert");

        let value: f64 = conn
            .query_row("SELECT value FROM stacked", [], |row| row.get(0))
            .unwrap();
        assert!((value - 11.0).abs() < 0.01);
    }

    #[test]
    fn load_stacked_skips_malformed_rows() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,10
Germany,Europe,2020-03-01,0,Total cases,
France,Europe,2020-03-01,zero,Total cases,12
Spain,Europe,2020-03-01,0,Total cases,40
";
        db.load_stacked(DatasetKind::Cases, csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM stacked", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2, "Should only load rows with numeric values");
    }

    #[test]
    fn load_pivoted_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Region,Continent,Date,Days,total_cases,new_cases,growth_rate,doubling_time
Netherlands,Europe,2020-03-01,0,10,10,1.0,
Netherlands,Europe,2020-03-02,1,18,8,1.8,2.3
";
        db.load_pivoted(DatasetKind::Cases, csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM pivoted", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let doubling: Option<f64> = conn
            .query_row(
                "SELECT doubling_time FROM pivoted WHERE date = '2020-03-01'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(doubling.is_none(), "Empty doubling_time should be NULL");
    }

    #[test]
    fn datasets_do_not_clobber_each_other() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Region,Continent,Date,Days,indicator,value
Netherlands,Europe,2020-03-01,0,Total cases,10
";
        db.load_stacked(DatasetKind::Cases, csv).unwrap();
        db.load_stacked(DatasetKind::Deaths, csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM stacked", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2, "Same (country, date) in both datasets must coexist");
    }
}
