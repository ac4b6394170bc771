use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PrimeError {
    #[error("number is not natural: {0}")]
    NegativeCandidate(i64),
}
