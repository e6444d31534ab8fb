//! Domain types for the COVID dashboard toolkit.
//!
//! The upstream analysis pipeline emits, per dataset (cases and deaths),
//! a stacked long-format CSV (`result.csv`) and a pivoted wide-format CSV
//! (`result_pivoted.csv`). This crate owns the shared vocabulary for those
//! files: dataset kinds with their indicator rename maps, the record types
//! matching the CSV columns, the linear/log axis scale, and date helpers.

pub mod axis;
pub mod dataset;
pub mod dates;
pub mod records;

pub use axis::AxisScale;
pub use dataset::DatasetKind;
pub use records::{PivotedRecord, StackedRecord};
