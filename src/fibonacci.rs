use std::collections::HashSet;

use crate::calendar::days_in_year;
use crate::primes::primes_of_year;

/// Fibonacci numbers `1, 1, 2, 3, 5, ...` not exceeding `bound`.
///
/// The leading `1` appears twice. Callers that only need membership should
/// collect into a set. Generation also stops if the next term would overflow.
pub fn fibonacci_upto(bound: i64) -> Vec<i64> {
    if bound < 1 {
        return Vec::new();
    }

    let mut fibs: Vec<i64> = vec![1, 1];
    loop {
        let next = match fibs[fibs.len() - 1].checked_add(fibs[fibs.len() - 2]) {
            Some(next) if next <= bound => next,
            _ => break,
        };
        fibs.push(next);
    }
    fibs
}

/// Prime day-numbers of `year` that are also Fibonacci numbers, with their count.
pub fn primes_in_fibonacci(year: i32) -> (usize, Vec<u32>) {
    let days = days_in_year(year);
    let fibs: HashSet<i64> = fibonacci_upto(i64::from(days)).into_iter().collect();

    let common: Vec<u32> = primes_of_year(year)
        .into_iter()
        .filter(|&day| fibs.contains(&i64::from(day)))
        .collect();
    (common.len(), common)
}
