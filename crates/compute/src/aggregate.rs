use std::ops::Deref;

use serde::Serialize;

use crate::error::ComputeError;
use crate::executor::ChunkResult;

/// Ascending, duplicate-free primes below a bound. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeList {
    primes: Vec<u64>,
}

impl PrimeList {
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u64>> {
        self.primes.iter().copied()
    }

    /// Binary search; the list is sorted.
    pub fn contains(&self, n: u64) -> bool {
        self.primes.binary_search(&n).is_ok()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.primes
    }
}

impl Deref for PrimeList {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.primes
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PrimeList {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.into_iter()
    }
}

impl From<PrimeList> for Vec<u64> {
    fn from(list: PrimeList) -> Self {
        list.primes
    }
}

/// Concatenate chunk results in chunk-index order.
///
/// Indices must be exactly `0..n`. Each result must be ascending and lie
/// entirely above the previous one; anything else means a worker produced
/// a wrong result, and the whole computation fails rather than returning it.
pub fn aggregate(mut results: Vec<ChunkResult>) -> Result<PrimeList, ComputeError> {
    results.sort_unstable_by_key(|r| r.index);

    for (expected, result) in results.iter().enumerate() {
        if result.index != expected {
            return Err(ComputeError::Aggregation(format!(
                "expected chunk {} but found chunk {} (missing or duplicate result)",
                expected, result.index
            )));
        }
    }

    let total = results.iter().map(|r| r.primes.len()).sum();
    let mut primes: Vec<u64> = Vec::with_capacity(total);

    for result in results {
        let ascending = result.primes.windows(2).all(|w| w[0] < w[1]);
        let above_previous = match (primes.last(), result.primes.first()) {
            (Some(last), Some(first)) => last < first,
            _ => true,
        };
        if !ascending || !above_previous {
            return Err(ComputeError::Aggregation(format!(
                "chunk {} is out of order",
                result.index
            )));
        }
        primes.extend(result.primes);
    }

    Ok(PrimeList { primes })
}
