//! In-memory SQLite database layer for COVID case/death statistics.
//!
//! This crate loads the pre-computed upstream CSV pairs (stacked
//! `result.csv` and pivoted `result_pivoted.csv`, one pair per dataset)
//! into an in-memory SQLite database and exposes typed query methods for
//! consumption by the Dioxus/Plotly dashboard apps compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//! - Indicator labels canonicalized at ingest through the per-dataset
//!   rename maps in `cvd-data`
//! - Typed query methods returning serializable structs for the figure
//!   builders
//!
//! # Usage
//!
//! ```rust
//! use cvd_data::DatasetKind;
//! use cvd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_stacked(
//!     DatasetKind::Cases,
//!     "Country/Region,Continent,Date,Days,indicator,value\n\
//!      Netherlands,Europe,2020-03-01,0,Total cases,10\n",
//! )
//! .unwrap();
//!
//! let indicators = db.query_indicators(DatasetKind::Cases).unwrap();
//! assert_eq!(indicators, vec!["Total cases".to_string()]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. Both tables carry a `dataset` column so
//! cases and deaths coexist after the dashboards concatenate them; the
//! rename maps guarantee indicator labels stay unique across datasets.
//!
//! Tables are loaded once at startup and never mutated afterwards; every
//! query produces a transient result set.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the stacked and pivoted tables.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
