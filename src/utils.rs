use chrono::Datelike;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries only the report.
pub fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "prime_days=info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Resolves the year to report on, falling back to the system clock.
pub fn resolve_year(args: &crate::args::Args) -> i32 {
    args.year.unwrap_or_else(current_year)
}
