//! Cost-balanced partitioning of the candidate domain `[1, max)`.
//!
//! Trial division gets more expensive as candidates grow, so equal-width
//! chunks would leave the workers holding small numbers idle. Instead every
//! candidate gets an estimated cost and boundaries are cut where the
//! cumulative cost crosses each multiple of `total / chunk_count`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;

/// A contiguous range `[start, end)` of candidates, tagged with its position
/// in the final concatenation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chunk {
    pub index: usize,
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, candidate: u64) -> bool {
        (self.start..self.end).contains(&candidate)
    }
}

/// Estimated per-candidate cost used to balance chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// `cost(i) = 1`: equal-width chunks.
    Uniform,
    /// `cost(i) = i`.
    Linear,
    /// `cost(i) = sqrt(i)`, proportional to the number of trial divisors.
    #[default]
    SquareRoot,
}

impl CostModel {
    /// Estimated cost of scanning `[1, x)`. Non-decreasing in `x`.
    fn cumulative(self, x: u64) -> f64 {
        let x = x.max(1) as f64;
        match self {
            CostModel::Uniform => x - 1.0,
            CostModel::Linear => (x - 1.0) * x / 2.0,
            // Integral of sqrt(t) from 1 to x.
            CostModel::SquareRoot => 2.0 / 3.0 * (x * x.sqrt() - 1.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostModel::Uniform => "uniform",
            CostModel::Linear => "linear",
            CostModel::SquareRoot => "square_root",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "uniform" => Ok(CostModel::Uniform),
            "linear" => Ok(CostModel::Linear),
            "square_root" | "sqrt" => Ok(CostModel::SquareRoot),
            other => Err(format!(
                "unknown cost model '{other}' (expected uniform, linear or square_root)"
            )),
        }
    }
}

/// How many chunks to cut and how to weigh candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    pub workers: usize,
    /// Chunks per worker. More chunks let early finishers pick up extra work.
    pub oversubscription: usize,
    pub cost_model: CostModel,
}

impl PartitionPlan {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            oversubscription: crate::config::DEFAULT_OVERSUBSCRIPTION,
            cost_model: CostModel::default(),
        }
    }

    fn validate(&self) -> Result<(), ComputeError> {
        if self.workers == 0 {
            return Err(ComputeError::InvalidInput(
                "worker count must be positive".to_string(),
            ));
        }
        if self.oversubscription == 0 {
            return Err(ComputeError::InvalidInput(
                "oversubscription must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split `[1, max)` into ordered, non-empty, non-overlapping chunks.
///
/// The last chunk always ends at `max`. Returns no chunks when `max <= 1`.
pub fn partition(max: u64, plan: &PartitionPlan) -> Result<Vec<Chunk>, ComputeError> {
    plan.validate()?;
    if max <= 1 {
        return Ok(Vec::new());
    }

    let candidates = max - 1;
    let wanted = plan.workers.saturating_mul(plan.oversubscription) as u64;
    let chunk_count = wanted.min(candidates);

    let model = plan.cost_model;
    let total = model.cumulative(max);
    let mut chunks = Vec::with_capacity(chunk_count as usize);
    let mut start = 1u64;

    for k in 1..chunk_count {
        let target = total * k as f64 / chunk_count as f64;
        let end = first_reaching(model, start + 1, max, target);
        if end >= max {
            break;
        }
        chunks.push(Chunk {
            index: chunks.len(),
            start,
            end,
        });
        start = end;
    }

    chunks.push(Chunk {
        index: chunks.len(),
        start,
        end: max,
    });
    Ok(chunks)
}

/// Smallest `x` in `[lo, hi]` with `cumulative(x) >= target`, or `hi`.
fn first_reaching(model: CostModel, mut lo: u64, mut hi: u64, target: f64) -> u64 {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if model.cumulative(mid) >= target {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
