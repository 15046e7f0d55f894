use crate::calendar::days_in_year;

/// Trial division over odd divisors up to `isqrt(n)`.
///
/// Any integer is accepted; everything below 2 (negatives included) is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let n = n as u64;
    (3..=n.isqrt()).step_by(2).all(|d| n % d != 0)
}

/// Day-numbers in `1..=days_in_year(year)` that are prime, ascending.
pub fn primes_of_year(year: i32) -> Vec<u32> {
    (1..=days_in_year(year))
        .filter(|&day| is_prime(i64::from(day)))
        .collect()
}

pub fn count_prime_days(year: i32) -> usize {
    primes_of_year(year).len()
}
