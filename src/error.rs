use ndarray_linalg::error::LinalgError;
use thiserror::Error;

///Failures surfaced by distribution construction, density evaluation and sampling.
///None of these are retried: they are deterministic in the inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("invalid distribution parameters: {0}")]
    InvalidParameter(String),

    #[error("matrix is {rows}x{cols}, but the distribution has dimension {expected}")]
    DimensionMismatch {
        expected : usize,
        rows : usize,
        cols : usize
    },

    #[error("matrix decomposition failed: {0}")]
    DecompositionFailure(String)
}

impl From<LinalgError> for DistributionError {
    fn from(err : LinalgError) -> DistributionError {
        DistributionError::DecompositionFailure(err.to_string())
    }
}
