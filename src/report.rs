use std::fmt;
use std::time::Instant;
use tracing::info;

use crate::fibonacci::primes_in_fibonacci;
use crate::primes::primes_of_year;

/// How many prime days the report lists in its sample line.
pub const SAMPLE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub year: i32,
    pub prime_day_count: usize,
    pub sample: Vec<u32>,
    pub fibonacci_count: usize,
    pub fibonacci_primes: Vec<u32>,
}

impl Report {
    pub fn for_year(year: i32) -> Self {
        let start_time = Instant::now();
        info!(action = "start", component = "report", year, "Building prime day report");

        let primes = primes_of_year(year);
        info!(
            action = "enumerate",
            component = "prime_days",
            prime_day_count = primes.len(),
            "Enumerated prime day-numbers"
        );

        let (fibonacci_count, fibonacci_primes) = primes_in_fibonacci(year);
        info!(
            action = "intersect",
            component = "fibonacci",
            fibonacci_count,
            "Intersected prime days with Fibonacci numbers"
        );

        let report = Report {
            year,
            prime_day_count: primes.len(),
            sample: primes.into_iter().take(SAMPLE_SIZE).collect(),
            fibonacci_count,
            fibonacci_primes,
        };

        info!(
            action = "complete",
            component = "report",
            duration_ms = start_time.elapsed().as_millis(),
            "Report built"
        );
        report
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ano: {}", self.year)?;
        writeln!(f, "Dias no ano com número primo: {}", self.prime_day_count)?;
        writeln!(f, "Primeiros (até {}): {:?}", SAMPLE_SIZE, self.sample)?;
        writeln!(
            f,
            "Primos que também aparecem na sequência de Fibonacci: {}",
            self.fibonacci_count
        )?;
        writeln!(f, "Lista: {:?}", self.fibonacci_primes)
    }
}

pub fn print_report(report: &Report) {
    print!("{}", report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_capped() {
        let report = Report::for_year(2023);
        assert_eq!(report.prime_day_count, 72);
        assert_eq!(report.sample.len(), SAMPLE_SIZE);
        assert_eq!(report.sample.first(), Some(&2));
        assert_eq!(report.sample.last(), Some(&71));
    }

    #[test]
    fn sample_shorter_than_cap_is_kept_whole() {
        let report = Report {
            year: 1,
            prime_day_count: 3,
            sample: vec![2, 3, 5],
            fibonacci_count: 0,
            fibonacci_primes: vec![],
        };
        let rendered = report.to_string();
        assert!(rendered.contains("Primeiros (até 20): [2, 3, 5]\n"));
        assert!(rendered.ends_with("Lista: []\n"));
    }

    #[test]
    fn renders_five_lines() {
        let rendered = Report::for_year(2025).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Ano: 2025",
                "Dias no ano com número primo: 72",
                "Primeiros (até 20): [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71]",
                "Primos que também aparecem na sequência de Fibonacci: 6",
                "Lista: [2, 3, 5, 13, 89, 233]",
            ]
        );
    }

    #[test]
    fn subset_invariants() {
        let report = Report::for_year(2024);
        assert!(report.sample.iter().all(|&d| (1..=366).contains(&d)));
        assert_eq!(report.fibonacci_count, report.fibonacci_primes.len());
        let primes = primes_of_year(2024);
        assert!(report.fibonacci_primes.iter().all(|d| primes.contains(d)));
    }
}
