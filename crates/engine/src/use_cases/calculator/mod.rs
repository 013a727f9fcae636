//! DPS calculator use cases.

mod assemble;
mod error;
mod submit;

use std::sync::Arc;

pub use assemble::{AssembleSnapshot, SnapshotRequest};
pub use error::CalculatorError;
pub use submit::{CalculationRequest, SubmitCalculation};

/// Container for calculator use cases.
pub struct CalculatorUseCases {
    pub assemble: Arc<AssembleSnapshot>,
    pub submit: Arc<SubmitCalculation>,
}

impl CalculatorUseCases {
    pub fn new(assemble: Arc<AssembleSnapshot>, submit: Arc<SubmitCalculation>) -> Self {
        Self { assemble, submit }
    }
}
