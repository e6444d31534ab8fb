//! Validate a cases/deaths CSV pair against the dashboard data contract.
//!
//! Loads both pairs into a fresh in-memory database exactly the way the
//! WASM apps do, then checks the properties the charts rely on:
//!
//! 1. indicator labels stay unique across datasets after renaming
//! 2. the day domain has no gaps (every day between min and max has rows)
//! 3. every stacked (country, date) has a pivoted row (animation coverage)

use anyhow::{bail, Context};
use cvd_data::DatasetKind;
use cvd_db::Database;
use std::collections::HashSet;
use std::path::Path;

/// Reference indicator used for the pivot-coverage check, per dataset.
fn reference_indicator(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Cases => "Total cases",
        DatasetKind::Deaths => "Total deaths",
    }
}

/// Load one dataset's CSV pair from `dir` into `db`.
fn load_pair(db: &Database, kind: DatasetKind, dir: &str) -> anyhow::Result<()> {
    let stacked_path = Path::new(dir).join("result.csv");
    let stacked = std::fs::read_to_string(&stacked_path)
        .with_context(|| format!("reading {}", stacked_path.display()))?;
    db.load_stacked(kind, &stacked)?;

    let pivoted_path = Path::new(dir).join("result_pivoted.csv");
    let pivoted = std::fs::read_to_string(&pivoted_path)
        .with_context(|| format!("reading {}", pivoted_path.display()))?;
    db.load_pivoted(kind, &pivoted)?;

    Ok(())
}

/// Days between min and max that have no rows at all.
fn missing_days(days: &[i64]) -> Vec<i64> {
    match (days.first(), days.last()) {
        (Some(&min), Some(&max)) => {
            let present: HashSet<i64> = days.iter().copied().collect();
            (min..=max).filter(|d| !present.contains(d)).collect()
        }
        _ => Vec::new(),
    }
}

/// Labels appearing in both datasets; must be empty.
fn label_overlap(cases: &[String], deaths: &[String]) -> Vec<String> {
    let deaths_set: HashSet<&String> = deaths.iter().collect();
    cases
        .iter()
        .filter(|label| deaths_set.contains(label))
        .cloned()
        .collect()
}

/// Run all contract checks over the pair of dataset directories.
pub fn run_validate(cases_dir: &str, deaths_dir: &str) -> anyhow::Result<()> {
    let db = Database::new()?;
    load_pair(&db, DatasetKind::Cases, cases_dir)?;
    load_pair(&db, DatasetKind::Deaths, deaths_dir)?;

    let mut failures: Vec<String> = Vec::new();

    // 1. Label uniqueness across datasets
    let cases_labels = db.query_indicators(DatasetKind::Cases)?;
    let deaths_labels = db.query_indicators(DatasetKind::Deaths)?;
    let overlap = label_overlap(&cases_labels, &deaths_labels);
    if !overlap.is_empty() {
        failures.push(format!(
            "indicator labels present in both datasets: {}",
            overlap.join(", ")
        ));
    }

    for kind in [DatasetKind::Cases, DatasetKind::Deaths] {
        // 2. Day-domain gaps
        let days = db.query_days(kind)?;
        if days.is_empty() {
            failures.push(format!("{}: stacked table is empty", kind.key()));
            continue;
        }
        let gaps = missing_days(&days);
        if !gaps.is_empty() {
            failures.push(format!(
                "{}: day domain has {} gap(s), first at day {}",
                kind.key(),
                gaps.len(),
                gaps[0]
            ));
        }

        // 3. Pivot coverage
        let pivot_gaps = db.query_pivot_gaps(kind, reference_indicator(kind))?;
        if !pivot_gaps.is_empty() {
            failures.push(format!(
                "{}: {} stacked (country, date) pair(s) missing from the pivoted table, first: {} {}",
                kind.key(),
                pivot_gaps.len(),
                pivot_gaps[0].country,
                pivot_gaps[0].date
            ));
        }

        println!(
            "{}: {} indicators, {} countries, days {}..{}",
            kind.key(),
            db.query_indicators(kind)?.len(),
            db.query_countries(kind)?.len(),
            days.first().unwrap(),
            days.last().unwrap()
        );
    }

    if !failures.is_empty() {
        for failure in &failures {
            log::error!("validate: {}", failure);
        }
        bail!("data contract violated:\n  {}", failures.join("\n  "));
    }

    println!("ok: data contract satisfied");
    Ok(())
}
