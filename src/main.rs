use anyhow::Result;
use clap::Parser;
use tracing::info;

use prime_days::utils::{resolve_year, setup_logging};
use prime_days::{print_report, Args, Report};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let year = resolve_year(&args);
    info!(
        action = "resolve",
        component = "year",
        year,
        defaulted = args.year.is_none(),
        "Year resolved"
    );

    let report = Report::for_year(year);
    print_report(&report);
    Ok(())
}
