//! Unified error types for the domain layer
//!
//! Every failure the pure normalization pipeline can produce. The engine
//! folds these into its use-case error so callers see one taxonomy.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A nested upstream field required by a mapping rule is missing or mis-shaped
    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    /// The equipment list does not have the slot count the kungfu requires
    #[error("Equipment slot count {actual} invalid for {kungfu}: expected {expected}")]
    SlotCount {
        kungfu: String,
        expected: usize,
        actual: usize,
    },
}

impl DomainError {
    /// Creates a malformed-data error naming the upstream path that failed.
    ///
    /// # Example
    /// ```ignore
    /// let stone = raw.color_stone.as_ref()
    ///     .ok_or_else(|| DomainError::malformed("Equips[].ColorStone"))?;
    /// ```
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedUpstreamData(msg.into())
    }

    /// Create a slot count error
    pub fn slot_count(kungfu: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::SlotCount {
            kungfu: kungfu.into(),
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedUpstreamData(err.to_string())
    }
}
