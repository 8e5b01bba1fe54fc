//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The supply-chain core only ever fails validation: a constructor or mutator
/// received a value that breaks one of its documented constraints. Not-found,
/// conflict and infrastructure failures belong to the layers calling into it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {message}")]
    Validation {
        /// Name of the offending field or value type.
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    /// The field (or value type) that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => *field,
        }
    }

    /// Human-readable description of the violated constraint.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
        }
    }
}
