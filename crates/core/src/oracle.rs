//! Trial-division primality oracle and the sequential reference scan.
//!
//! Everything here is pure; workers call [`is_prime_natural`] concurrently
//! without any synchronization.

use crate::error::PrimeError;

/// Checks whether `number` is prime.
///
/// Negative input is not a natural number and is rejected.
pub fn is_prime(number: i64) -> Result<bool, PrimeError> {
    if number < 0 {
        return Err(PrimeError::NegativeCandidate(number));
    }
    Ok(is_prime_natural(number as u64))
}

/// Trial division over odd divisors up to `floor(sqrt(n))`.
pub fn is_prime_natural(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let limit = isqrt(n);
    let mut divisor = 3;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Exact integer square root. The float estimate is off by one for large `n`.
pub(crate) fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// Primes in `[1, max)`, computed sequentially on the calling thread.
///
/// This is the baseline the parallel engine is checked against.
pub fn sequential_primes(max: i64) -> Result<Vec<u64>, PrimeError> {
    if max < 0 {
        return Err(PrimeError::NegativeCandidate(max));
    }
    Ok((1..max as u64).filter(|&c| is_prime_natural(c)).collect())
}
