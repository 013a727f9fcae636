//! Error types for port operations.

/// Failure of an upstream game-data fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure talking to the calculator endpoint.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission failed: {0}")]
    RequestFailed(String),
    #[error("Calculator returned status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    pub fn request(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn invalid(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}

impl SubmitError {
    pub fn request(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn invalid(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}
