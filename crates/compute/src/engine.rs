use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::aggregate::{aggregate, PrimeList};
use crate::config::{EngineConfig, DEFAULT_OVERSUBSCRIPTION};
use crate::error::ComputeError;
use crate::executor::run_all;
use crate::hook::{NoopHook, ProgressHook};
use crate::partition::{partition, CostModel, PartitionPlan};

/// Parallel trial-division prime engine.
///
/// Holds settings only. Every [`compute`](Self::compute) call builds its own
/// worker pool and joins it before returning.
#[derive(Clone)]
pub struct PrimeEngine {
    workers: usize,
    oversubscription: usize,
    cost_model: CostModel,
    hook: Arc<dyn ProgressHook>,
}

impl std::fmt::Debug for PrimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimeEngine")
            .field("workers", &self.workers)
            .field("oversubscription", &self.oversubscription)
            .field("cost_model", &self.cost_model)
            .finish_non_exhaustive()
    }
}

impl PrimeEngine {
    /// Create an engine with an explicit worker count.
    pub fn new(workers: usize) -> Result<Self, ComputeError> {
        if workers == 0 {
            return Err(ComputeError::InvalidInput(
                "worker count must be positive".to_string(),
            ));
        }
        Ok(Self {
            workers,
            oversubscription: DEFAULT_OVERSUBSCRIPTION,
            cost_model: CostModel::default(),
            hook: Arc::new(NoopHook),
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ComputeError> {
        Self::new(config.resolved_worker_threads())?
            .with_oversubscription(config.oversubscription)
            .map(|e| e.with_cost_model(config.cost_model))
    }

    pub fn with_oversubscription(mut self, oversubscription: usize) -> Result<Self, ComputeError> {
        if oversubscription == 0 {
            return Err(ComputeError::InvalidInput(
                "oversubscription must be positive".to_string(),
            ));
        }
        self.oversubscription = oversubscription;
        Ok(self)
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn with_hook(mut self, hook: Arc<dyn ProgressHook>) -> Self {
        self.hook = hook;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn plan(&self) -> PartitionPlan {
        PartitionPlan {
            workers: self.workers,
            oversubscription: self.oversubscription,
            cost_model: self.cost_model,
        }
    }

    /// Primes strictly below `max`, ascending.
    ///
    /// Negative bounds are rejected. `max <= 1` returns an empty list
    /// without starting any thread.
    pub fn compute(&self, max: i64) -> Result<PrimeList, ComputeError> {
        if max < 0 {
            return Err(ComputeError::InvalidInput(format!(
                "bound must be a natural number, got {}",
                max
            )));
        }
        let max = max as u64;
        if max <= 1 {
            return Ok(PrimeList::default());
        }

        let start = Instant::now();
        let chunks = partition(max, &self.plan())?;
        debug!(
            max,
            chunks = chunks.len(),
            cost_model = %self.cost_model,
            "domain partitioned"
        );

        let chunk_count = chunks.len();
        let results = run_all(chunks, self.workers, self.hook.as_ref())?;
        let primes = aggregate(results)?;

        info!(
            max,
            workers = self.workers,
            chunks = chunk_count,
            primes = primes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "prime computation complete"
        );
        Ok(primes)
    }
}

/// Primes strictly below `max`, using one worker per available core.
pub fn compute_primes(max: i64) -> Result<PrimeList, ComputeError> {
    PrimeEngine::from_config(&EngineConfig::default())?.compute(max)
}
