//! CVD CLI - Command line tool for the COVID dashboard data contract.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cvd-cli",
    version,
    about = "COVID dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cvd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cvd_cmd::run(cli.command).await
}
