//! Error types for the capdigest core library
//!
//! Capability absence is not an error: it is reported through `bool` and
//! `Option` results. Contract violations (a mismatched table, an undersized
//! output buffer) are programmer errors and panic. What remains here are the
//! recoverable failures.

use thiserror::Error;

pub mod internal;
pub mod validation;

pub use self::validation::ValidationError;
pub use internal::InternalError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the capdigest core library
///
/// Errors are categorized into two main types:
/// - Validation errors: configuration, registration and checked-capacity errors
/// - Internal errors: failures passed through from concrete implementations
#[derive(Error, Debug)]
pub enum Error {
    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Validation(ValidationError::invalid_configuration(&err.to_string()))
    }
}
