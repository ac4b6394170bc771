//! Fixed-size worker pool that scans every chunk exactly once.
//!
//! The pool is a `rayon` pool built with `build_scoped`, so its threads live
//! inside a `std::thread::scope` and are all joined before [`run_all`]
//! returns, whether the tasks succeeded or not.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

use parprime_core::is_prime_natural;
use rayon::ThreadPool;
use serde::Serialize;
use tracing::warn;

use crate::error::ComputeError;
use crate::hook::ProgressHook;
use crate::partition::Chunk;

/// Ascending primes found in one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkResult {
    pub index: usize,
    pub primes: Vec<u64>,
}

/// Outcome of one task, keyed by the chunk's position in the input.
type TaskOutcome = (usize, Result<Vec<u64>, String>);

/// Scan a chunk in ascending order with the trial-division oracle.
pub fn scan_chunk(chunk: &Chunk) -> Vec<u64> {
    (chunk.start..chunk.end)
        .filter(|&candidate| is_prime_natural(candidate))
        .collect()
}

/// Run one task per chunk on a pool of `workers` threads.
///
/// Results come back index-aligned with `chunks`. Any task failure fails the
/// whole call; the pool is torn down first either way.
pub fn run_all(
    chunks: Vec<Chunk>,
    workers: usize,
    hook: &dyn ProgressHook,
) -> Result<Vec<ChunkResult>, ComputeError> {
    run_with(chunks, workers, hook, scan_chunk)
}

pub(crate) fn run_with<S>(
    chunks: Vec<Chunk>,
    workers: usize,
    hook: &dyn ProgressHook,
    scan: S,
) -> Result<Vec<ChunkResult>, ComputeError>
where
    S: Fn(&Chunk) -> Vec<u64> + Sync,
{
    if workers == 0 {
        return Err(ComputeError::InvalidInput(
            "worker count must be positive".to_string(),
        ));
    }
    if chunks.is_empty() {
        return Ok(Vec::new());
    }

    let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();

    let outcomes = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("parprime-worker-{}", i))
        .build_scoped(
            |thread| {
                let worker = thread.index();
                hook.worker_started(worker);
                thread.run();
                hook.worker_stopped(worker);
            },
            |pool| dispatch(pool, chunks, hook, &scan),
        )
        .map_err(|e| ComputeError::PoolBuild(e.to_string()))?;

    gather(outcomes, &indices)
}

/// Spawn every task into one rayon scope and wait for all of them.
fn dispatch<S>(
    pool: &ThreadPool,
    chunks: Vec<Chunk>,
    hook: &dyn ProgressHook,
    scan: &S,
) -> Vec<TaskOutcome>
where
    S: Fn(&Chunk) -> Vec<u64> + Sync,
{
    let (tx, rx) = mpsc::channel::<TaskOutcome>();

    pool.scope(move |s| {
        for (position, chunk) in chunks.into_iter().enumerate() {
            let tx = tx.clone();
            s.spawn(move |_| {
                // The hook runs under the same guard; a panicking hook fails its chunk.
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    let primes = scan(&chunk);
                    hook.chunk_completed(&chunk, primes.len());
                    primes
                }))
                .map_err(panic_message);
                // The receiver outlives the scope; a lost send shows up as a missing result.
                tx.send((position, outcome)).ok();
            });
        }
    });

    // Every sender is gone once the scope has waited for its tasks.
    rx.into_iter().collect()
}

/// Place outcomes back in input order. Completion order is irrelevant.
fn gather(outcomes: Vec<TaskOutcome>, indices: &[usize]) -> Result<Vec<ChunkResult>, ComputeError> {
    let mut slots: Vec<Option<Vec<u64>>> = vec![None; indices.len()];
    let mut fault: Option<(usize, String)> = None;

    for (position, outcome) in outcomes {
        match outcome {
            Ok(primes) => slots[position] = Some(primes),
            Err(message) => {
                let chunk = indices[position];
                warn!(chunk, error = %message, "chunk task panicked");
                // Report the lowest failing chunk so repeated runs fail the same way.
                if fault.as_ref().map_or(true, |(c, _)| chunk < *c) {
                    fault = Some((chunk, message));
                }
            }
        }
    }

    if let Some((chunk, message)) = fault {
        return Err(ComputeError::WorkerFault { chunk, message });
    }

    slots
        .into_iter()
        .zip(indices)
        .map(|(slot, &index)| match slot {
            Some(primes) => Ok(ChunkResult { index, primes }),
            None => Err(ComputeError::WorkerFault {
                chunk: index,
                message: "task produced no result".to_string(),
            }),
        })
        .collect()
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
