use clap::Parser;
use inbound_planner::cli::{self, Cli};
use inbound_planner::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Cli::parse();
    let summary = cli::run(&args)?;

    tracing::info!(
        "需補貨 {} / {} 列，建議補貨量合計 {}",
        summary.rows_needing_inbound,
        summary.rows,
        summary.total_suggested_units
    );
    Ok(())
}
