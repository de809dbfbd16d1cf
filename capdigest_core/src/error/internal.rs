//! Internal library error types

use thiserror::Error;

/// Internal library errors
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure reported by a concrete algorithm implementation
    #[error("Algorithm '{algorithm}' failed: {message}")]
    AlgorithmFailure { algorithm: String, message: String },

    /// Entropy source failure
    #[error("Random source '{source_name}' failed: {message}")]
    RandomSource {
        source_name: String,
        message: String,
    },
}

impl InternalError {
    /// Create an algorithm failure error
    pub fn algorithm_failure(algorithm: &str, message: impl Into<String>) -> Self {
        Self::AlgorithmFailure {
            algorithm: algorithm.to_string(),
            message: message.into(),
        }
    }

    /// Create a random source error
    pub fn random_source(source_name: &str, message: impl Into<String>) -> Self {
        Self::RandomSource {
            source_name: source_name.to_string(),
            message: message.into(),
        }
    }

    /// Check if this error is recoverable
    ///
    /// An entropy source may come back; a failing digest will not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RandomSource { .. })
    }
}
