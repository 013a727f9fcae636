//! Correlation IDs tying together the log lines of one calculation request.

use std::fmt;

use tracing::Span;
use uuid::Uuid;

/// Identifies one submission from trigger to calculator reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 characters, enough to grep a log.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Span carrying the short id for everything logged inside a request.
    pub fn span(&self, operation: &'static str) -> Span {
        tracing::info_span!("request", correlation_id = %self.short(), operation)
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
