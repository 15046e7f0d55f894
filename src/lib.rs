pub mod args;
pub mod calendar;
pub mod fibonacci;
pub mod primes;
pub mod report;
pub mod utils;

pub use args::Args;
pub use calendar::{days_in_year, is_leap};
pub use fibonacci::{fibonacci_upto, primes_in_fibonacci};
pub use primes::{count_prime_days, is_prime, primes_of_year};
pub use report::{print_report, Report, SAMPLE_SIZE};
