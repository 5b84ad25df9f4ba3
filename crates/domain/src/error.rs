//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects and catalogue codes)
    #[error("Parse error: {0}")]
    Parse(String),

    /// No rules module is registered for this system id
    #[error("Unsupported rule system: {0}")]
    UnsupportedSystem(i64),
}

impl DomainError {
    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type or code-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl TryFrom<i64> for ModifierType {
    ///     type Error = DomainError;
    ///     fn try_from(id: i64) -> Result<Self, Self::Error> {
    ///         Self::from_id(id)
    ///             .ok_or_else(|| DomainError::parse(format!("Unknown modifier type: {id}")))
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
