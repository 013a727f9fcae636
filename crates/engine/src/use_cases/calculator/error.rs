//! Failure taxonomy of a calculation request.

use jx3calc_domain::DomainError;

use crate::infrastructure::ports::{FetchError, SubmitError};

/// Why a snapshot could not be built or submitted.
///
/// Every variant is a closed failure: no partial snapshot accompanies it.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] FetchError),

    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    #[error("Structural precondition failed: {0}")]
    StructuralPrecondition(String),

    #[error("School mismatch: expected {expected}, found {actual}")]
    SchoolMismatch { expected: String, actual: String },

    #[error("Server could not be resolved")]
    ServerUnresolved,

    #[error("Role {name} not found on {server}")]
    RoleNotFound { server: String, name: String },

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmitError),
}

impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedUpstreamData(msg) => Self::MalformedUpstreamData(msg),
            slot @ DomainError::SlotCount { .. } => Self::StructuralPrecondition(slot.to_string()),
        }
    }
}

impl CalculatorError {
    pub fn structural(message: impl Into<String>) -> Self {
        Self::StructuralPrecondition(message.into())
    }

    pub fn role_not_found(server: impl Into<String>, name: impl Into<String>) -> Self {
        Self::RoleNotFound {
            server: server.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_count_is_structural() {
        let err: CalculatorError = DomainError::slot_count("无方", 12, 13).into();
        assert!(matches!(err, CalculatorError::StructuralPrecondition(ref m) if m.contains("无方")));
    }

    #[test]
    fn malformed_keeps_its_message() {
        let err: CalculatorError = DomainError::malformed("Equips[3]: missing FiveStone").into();
        assert!(matches!(
            err,
            CalculatorError::MalformedUpstreamData(ref m) if m == "Equips[3]: missing FiveStone"
        ));
    }
}
