use std::sync::atomic::{AtomicUsize, Ordering};

use parprime_compute::{Chunk, ProgressHook};

/// Tracks pool threads through the engine's progress hook.
#[derive(Default)]
pub struct LifecycleHook {
    pub started: AtomicUsize,
    pub stopped: AtomicUsize,
    pub chunks: AtomicUsize,
}

impl LifecycleHook {
    pub fn alive(&self) -> usize {
        self.started.load(Ordering::SeqCst) - self.stopped.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn chunks(&self) -> usize {
        self.chunks.load(Ordering::SeqCst)
    }
}

impl ProgressHook for LifecycleHook {
    fn worker_started(&self, _worker: usize) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn worker_stopped(&self, _worker: usize) {
        self.stopped.fetch_add(1, Ordering::SeqCst);
    }

    fn chunk_completed(&self, _chunk: &Chunk, _primes_found: usize) {
        self.chunks.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn is_strictly_ascending(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
