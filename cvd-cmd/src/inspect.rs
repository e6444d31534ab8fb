//! Print a summary of a stacked result.csv.

use anyhow::{bail, Context};
use cvd_data::DatasetKind;
use cvd_db::Database;

fn parse_dataset(name: &str) -> anyhow::Result<DatasetKind> {
    match name {
        "cases" => Ok(DatasetKind::Cases),
        "deaths" => Ok(DatasetKind::Deaths),
        other => bail!("unknown dataset {:?}, expected 'cases' or 'deaths'", other),
    }
}

/// Load one stacked CSV and print its indicator list, day domain, and
/// country/continent counts.
pub fn run_inspect(stacked_csv: &str, dataset: &str) -> anyhow::Result<()> {
    let kind = parse_dataset(dataset)?;

    let csv_data = std::fs::read_to_string(stacked_csv)
        .with_context(|| format!("reading {}", stacked_csv))?;

    let db = Database::new()?;
    db.load_stacked(kind, &csv_data)?;

    let indicators = db.query_indicators(kind)?;
    println!("indicators ({}):", indicators.len());
    for label in &indicators {
        println!("  {}", label);
    }

    match db.query_day_domain(kind)? {
        Some((min, max)) => println!("day domain: {}..{}", min, max),
        None => println!("day domain: empty"),
    }

    println!("countries: {}", db.query_countries(kind)?.len());
    println!("continents: {}", db.query_continents()?.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dataset_accepts_both_kinds() {
        assert_eq!(parse_dataset("cases").unwrap(), DatasetKind::Cases);
        assert_eq!(parse_dataset("deaths").unwrap(), DatasetKind::Deaths);
    }

    #[test]
    fn parse_dataset_rejects_unknown() {
        assert!(parse_dataset("recoveries").is_err());
        assert!(parse_dataset("").is_err());
    }
}
