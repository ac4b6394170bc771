use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

/// Primes produced by the last iteration of one method, plus total time.
#[derive(Debug, Clone)]
pub struct TestRun {
    pub label: String,
    pub primes: Vec<u64>,
    pub elapsed: Duration,
}

/// Call `method(max)` `iterations` times and time the whole batch.
pub fn perform_test<F>(label: &str, max: i64, iterations: u32, method: F) -> Result<TestRun>
where
    F: Fn(i64) -> Result<Vec<u64>>,
{
    info!("testing {}...", label);

    let start = Instant::now();
    let mut primes = Vec::new();
    for i in 0..iterations {
        info!("- iteration #{}", i);
        primes = method(max).with_context(|| format!("{} failed on iteration {}", label, i))?;
    }
    let elapsed = start.elapsed();

    info!(primes = primes.len(), elapsed_ms = elapsed.as_millis() as u64, "{} done", label);
    Ok(TestRun {
        label: label.to_string(),
        primes,
        elapsed,
    })
}
