/// Error type for a prime computation.
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Worker failed on chunk {chunk}: {message}")]
    WorkerFault { chunk: usize, message: String },
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(String),
    #[error("Aggregation failed: {0}")]
    Aggregation(String),
}
