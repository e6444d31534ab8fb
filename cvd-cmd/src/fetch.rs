//! Download the upstream JHU CSSE time-series CSVs.
//!
//! These are the raw inputs of the analysis pipeline that produces the
//! `result.csv` / `result_pivoted.csv` pairs the dashboards embed. The
//! dashboards never read these files directly.

use anyhow::Context;
use std::path::Path;

const JHU_BASE: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series";

const UPSTREAM_FILES: &[&str] = &[
    "time_series_covid19_confirmed_global.csv",
    "time_series_covid19_deaths_global.csv",
];

/// Fetch both global time-series files into `out_dir`.
pub async fn run_fetch(out_dir: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir))?;

    for name in UPSTREAM_FILES {
        let url = format!("{}/{}", JHU_BASE, name);
        log::info!("fetching {}", url);

        let body = reqwest::get(&url)
            .await
            .with_context(|| format!("requesting {}", url))?
            .error_for_status()
            .with_context(|| format!("server rejected {}", url))?
            .text()
            .await
            .with_context(|| format!("reading body of {}", url))?;

        let dest = Path::new(out_dir).join(name);
        std::fs::write(&dest, &body)
            .with_context(|| format!("writing {}", dest.display()))?;
        println!("fetched {} ({} bytes)", dest.display(), body.len());
    }

    Ok(())
}
