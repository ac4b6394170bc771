use tracing::debug;

use crate::partition::Chunk;

/// Optional observer for engine progress. The engine never depends on it.
///
/// Worker callbacks run on the pool threads themselves: `worker_stopped`
/// fires after a thread has left the pool loop, just before it exits.
pub trait ProgressHook: Send + Sync {
    fn worker_started(&self, _worker: usize) {}

    fn worker_stopped(&self, _worker: usize) {}

    fn chunk_completed(&self, _chunk: &Chunk, _primes_found: usize) {}
}

/// Does nothing. The default hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl ProgressHook for NoopHook {}

/// Emits a `debug!` event per worker transition and per finished chunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHook;

impl ProgressHook for TracingHook {
    fn worker_started(&self, worker: usize) {
        debug!(worker, "worker started");
    }

    fn worker_stopped(&self, worker: usize) {
        debug!(worker, "worker stopped");
    }

    fn chunk_completed(&self, chunk: &Chunk, primes_found: usize) {
        debug!(
            chunk = chunk.index,
            start = chunk.start,
            end = chunk.end,
            primes = primes_found,
            "chunk completed"
        );
    }
}
