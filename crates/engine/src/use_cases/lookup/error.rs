//! Failure taxonomy of a rendered-view lookup.

use crate::infrastructure::ports::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// `alias` is the server token the caller typed, if any.
    #[error("Server could not be resolved")]
    ServerUnresolved { alias: Option<String> },

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] FetchError),

    #[error("No guide listed for {0}")]
    GuideNotFound(String),
}
