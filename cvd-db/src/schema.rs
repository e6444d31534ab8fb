//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the stacked (long-format) and
//! pivoted (wide-format) tables. The schema is applied as a single batch
//! when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `stacked` - long format: one row per (dataset, country, date,
///   indicator), indicator labels already canonicalized
/// - `pivoted` - wide format: one row per (dataset, country, date),
///   metrics as columns
///
/// Day snapshots, per-country time series, and animation frames are all
/// derived on-the-fly via filtered SELECTs against these two tables.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stacked (
        dataset TEXT NOT NULL,
        country TEXT NOT NULL,
        continent TEXT NOT NULL,
        date TEXT NOT NULL,
        days INTEGER NOT NULL,
        indicator TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (dataset, country, date, indicator)
    );
    CREATE INDEX IF NOT EXISTS idx_stacked_days ON stacked(dataset, days);
    CREATE INDEX IF NOT EXISTS idx_stacked_indicator ON stacked(dataset, indicator);
    CREATE INDEX IF NOT EXISTS idx_stacked_country ON stacked(dataset, country);

    CREATE TABLE IF NOT EXISTS pivoted (
        dataset TEXT NOT NULL,
        country TEXT NOT NULL,
        continent TEXT NOT NULL,
        date TEXT NOT NULL,
        days INTEGER NOT NULL,
        total_cases REAL NOT NULL,
        new_cases REAL NOT NULL,
        growth_rate REAL NOT NULL,
        doubling_time REAL,
        PRIMARY KEY (dataset, country, date)
    );
    CREATE INDEX IF NOT EXISTS idx_pivoted_days ON pivoted(dataset, days);

    "#
}
