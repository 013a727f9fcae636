//! Player snapshot assembly.
//!
//! Fetch (unless supplied) -> validate slot count -> map and sequence ->
//! enrich with kungfu name and panel -> prune blank enchants.

use std::sync::Arc;

use jx3calc_domain::{
    normalize_equipment, validate_slot_count, EnchantNaming, Equipment, PlayerSnapshot,
    RawRoleEquip, RoleSummary, SnapshotEnvelope, BASE_SLOT_COUNT,
};
use serde_json::Value;

use super::error::CalculatorError;
use crate::infrastructure::ports::{ClockPort, EquipmentSource, KungfuLookup, ResolvedServer};

/// Input of one assembly.
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    pub server: ResolvedServer,
    pub role: RoleSummary,
    /// Role-equip blob already in hand; fetched when `None`.
    pub raw: Option<Value>,
}

/// Builds the calculator-ready snapshot for one character.
pub struct AssembleSnapshot {
    equipment: Arc<dyn EquipmentSource>,
    kungfu: Arc<dyn KungfuLookup>,
    enchants: Arc<dyn EnchantNaming>,
    clock: Arc<dyn ClockPort>,
}

impl AssembleSnapshot {
    pub fn new(
        equipment: Arc<dyn EquipmentSource>,
        kungfu: Arc<dyn KungfuLookup>,
        enchants: Arc<dyn EnchantNaming>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            equipment,
            kungfu,
            enchants,
            clock,
        }
    }

    pub async fn execute(&self, request: SnapshotRequest) -> Result<SnapshotEnvelope, CalculatorError> {
        let SnapshotRequest { server, role, raw } = request;

        let raw = match raw {
            Some(raw) => raw,
            None => self.fetch(&server, &role).await?,
        };

        let response = RawRoleEquip::from_value(&raw)?;
        let data = response.data;

        let slots = data.equips.len();
        if slots < BASE_SLOT_COUNT {
            tracing::warn!(slots, "Equipment list too short");
            return Err(CalculatorError::structural(format!(
                "expected at least {BASE_SLOT_COUNT} equipment slots, found {slots}"
            )));
        }

        let kungfu_id = data.kungfu.kungfu_id.as_str();
        let Some(kungfu_name) = self.kungfu.kungfu_name(kungfu_id).await else {
            tracing::warn!(kungfu_id, "Unknown kungfu id");
            return Err(CalculatorError::MalformedUpstreamData(format!(
                "unknown kungfu id {kungfu_id}"
            )));
        };

        if let Err(e) = validate_slot_count(&kungfu_name, slots) {
            tracing::warn!(error = %e, "Slot count rejected");
            return Err(e.into());
        }

        let equip_list: Vec<Equipment> = normalize_equipment(&data, self.enchants.as_ref())
            .inspect_err(|e| tracing::warn!(error = %e, "Equipment mapping failed"))?
            .into_iter()
            .map(Equipment::pruned)
            .collect();

        let snapshot = PlayerSnapshot::new(role, kungfu_name, equip_list, data.panel_summary());
        tracing::debug!(
            kungfu = %snapshot.kungfu_name,
            slots = snapshot.equip_list.len(),
            "Snapshot assembled"
        );

        Ok(SnapshotEnvelope::success(snapshot, self.clock.now().timestamp()))
    }

    async fn fetch(&self, server: &ResolvedServer, role: &RoleSummary) -> Result<Value, CalculatorError> {
        let Some(role_id) = role.role_id() else {
            return Err(CalculatorError::role_not_found(&server.server, "<no roleId>"));
        };

        self.equipment
            .fetch_raw_equipment(&server.zone, &server.server, &role_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, server = %server.server, "Equipment fetch failed");
                CalculatorError::from(e)
            })
    }
}
