//! Submission of a player's snapshot to the DPS calculator.

use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;

use super::assemble::{AssembleSnapshot, SnapshotRequest};
use super::error::CalculatorError;
use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::{CalculatorPort, EquipmentSource, RoleDirectory, ServerResolver};

/// What the caller asked to have calculated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    /// Server name or nickname; the group's bound server is used when absent.
    pub server: Option<String>,
    pub name: String,
    pub group: Option<String>,
    /// Kungfu display name the caller expects the character to be playing.
    pub school: String,
}

/// Resolve -> look up role -> fetch equipment -> assemble -> check school -> submit.
pub struct SubmitCalculation {
    servers: Arc<dyn ServerResolver>,
    roles: Arc<dyn RoleDirectory>,
    equipment: Arc<dyn EquipmentSource>,
    assemble: Arc<AssembleSnapshot>,
    calculator: Arc<dyn CalculatorPort>,
}

impl SubmitCalculation {
    pub fn new(
        servers: Arc<dyn ServerResolver>,
        roles: Arc<dyn RoleDirectory>,
        equipment: Arc<dyn EquipmentSource>,
        assemble: Arc<AssembleSnapshot>,
        calculator: Arc<dyn CalculatorPort>,
    ) -> Self {
        Self {
            servers,
            roles,
            equipment,
            assemble,
            calculator,
        }
    }

    pub async fn execute(&self, request: CalculationRequest) -> Result<Value, CalculatorError> {
        let span = CorrelationId::new().span("calculate");
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: CalculationRequest) -> Result<Value, CalculatorError> {
        let Some(server) = self
            .servers
            .resolve(request.server.as_deref(), request.group.as_deref())
        else {
            tracing::warn!(
                alias = ?request.server,
                group = ?request.group,
                "Server could not be resolved"
            );
            return Err(CalculatorError::ServerUnresolved);
        };

        let Some(role) = self
            .roles
            .fetch_role_summary(&server.server, &request.name)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Role lookup failed"))?
        else {
            tracing::warn!(server = %server.server, name = %request.name, "Role not found");
            return Err(CalculatorError::role_not_found(&server.server, &request.name));
        };

        let Some(role_id) = role.role_id() else {
            tracing::warn!(server = %server.server, name = %request.name, "Role summary has no roleId");
            return Err(CalculatorError::role_not_found(&server.server, &request.name));
        };

        let raw = self
            .equipment
            .fetch_raw_equipment(&server.zone, &server.server, &role_id)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Equipment fetch failed"))?;

        let envelope = self
            .assemble
            .execute(SnapshotRequest {
                server: server.clone(),
                role,
                raw: Some(raw),
            })
            .await?;

        if envelope.data.kungfu_name != request.school {
            tracing::warn!(
                expected = %request.school,
                actual = %envelope.data.kungfu_name,
                "School mismatch, not submitting"
            );
            return Err(CalculatorError::SchoolMismatch {
                expected: request.school,
                actual: envelope.data.kungfu_name,
            });
        }

        let reply = self
            .calculator
            .submit(&envelope)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Calculator submission failed"))?;

        tracing::info!(
            server = %server.server,
            name = %request.name,
            school = %request.school,
            "Calculation submitted"
        );
        Ok(reply)
    }
}
