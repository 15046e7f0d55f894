use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "prime-days",
    about = "Count the days of a year whose day-number is prime",
    version,
    long_about = None
)]
pub struct Args {
    /// Year to analyze (e.g. 2025). Defaults to the current year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
