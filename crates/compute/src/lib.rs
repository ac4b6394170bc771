//! Parallel prime computation: partition `[1, max)` by estimated cost, scan
//! the chunks on a per-call worker pool, and concatenate the results in
//! chunk order.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod executor;
pub mod hook;
pub mod partition;

pub use aggregate::{aggregate, PrimeList};
pub use config::EngineConfig;
pub use engine::{compute_primes, PrimeEngine};
pub use error::ComputeError;
pub use executor::{run_all, ChunkResult};
pub use hook::{NoopHook, ProgressHook, TracingHook};
pub use parprime_core::{is_prime, PrimeError};
pub use partition::{partition, Chunk, CostModel, PartitionPlan};
