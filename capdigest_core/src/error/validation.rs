//! Validation related error types

use thiserror::Error;

/// Validation and configuration errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Output buffer cannot hold the result
    #[error("Insufficient output capacity: {required} bytes required, {available} bytes available")]
    InsufficientCapacity { required: usize, available: usize },

    /// An implementation with the same tag is already registered
    #[error("Implementation '{tag}' is already registered")]
    DuplicateImplementation { tag: String },

    /// No implementation is registered under the given name
    #[error("Unknown implementation: {name}")]
    UnknownImplementation { name: String },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create an insufficient capacity error
    pub fn insufficient_capacity(required: usize, available: usize) -> Self {
        Self::InsufficientCapacity {
            required,
            available,
        }
    }

    /// Create a duplicate implementation error
    pub fn duplicate_implementation(tag: impl std::fmt::Display) -> Self {
        Self::DuplicateImplementation {
            tag: tag.to_string(),
        }
    }

    /// Create an unknown implementation error
    pub fn unknown_implementation(name: &str) -> Self {
        Self::UnknownImplementation {
            name: name.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
