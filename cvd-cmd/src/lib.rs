//! Command implementations for the CVD CLI.
//!
//! Provides subcommands for fetching the upstream Johns Hopkins CSVs,
//! validating a local cases/deaths CSV pair against the dashboard data
//! contract, and inspecting a stacked file.

use clap::Subcommand;

pub mod fetch;
pub mod inspect;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Download the upstream JHU CSSE global time-series CSVs
    Fetch {
        /// Directory to write the downloaded CSVs into
        #[arg(short = 'o', long, default_value = "data/upstream")]
        out_dir: String,
    },

    /// Validate a cases/deaths CSV pair against the dashboard data contract
    Validate {
        /// Directory holding the cases result.csv and result_pivoted.csv
        #[arg(long, default_value = "data/cases")]
        cases_dir: String,

        /// Directory holding the deaths result.csv and result_pivoted.csv
        #[arg(long, default_value = "data/deaths")]
        deaths_dir: String,
    },

    /// Print indicators, day domain, and country counts for a stacked CSV
    Inspect {
        /// Path to a stacked result.csv
        #[arg(short = 's', long)]
        stacked_csv: String,

        /// Dataset the file belongs to (cases or deaths)
        #[arg(long, default_value = "cases")]
        dataset: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { out_dir } => fetch::run_fetch(&out_dir).await,
        Command::Validate {
            cases_dir,
            deaths_dir,
        } => validate::run_validate(&cases_dir, &deaths_dir),
        Command::Inspect {
            stacked_csv,
            dataset,
        } => inspect::run_inspect(&stacked_csv, &dataset),
    }
}
