//! Player snapshot - the canonical payload submitted to the DPS calculator

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::equipment::Equipment;
use crate::common::check_key_empty;

/// Keys owned by [`PlayerSnapshot`] that a role summary must not shadow.
const RESERVED_KEYS: [&str; 3] = ["kungfuName", "equipList", "panelList"];

/// Role identity fields as returned by the role summary API.
///
/// The shape is owned upstream; fields pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSummary(Map<String, Value>);

impl RoleSummary {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The game role id, when present and non-blank.
    pub fn role_id(&self) -> Option<String> {
        if check_key_empty(&self.0, "roleId") {
            return None;
        }
        match self.0.get("roleId")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn without_reserved(mut self) -> Self {
        for key in RESERVED_KEYS {
            self.0.remove(key);
        }
        self
    }
}

/// Equipment score and character panel, passed through from the equip blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanelSummary {
    pub score: Value,
    pub panel: Value,
}

/// Role identity, kungfu, ordered equipment and panel for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    #[serde(flatten)]
    pub role: RoleSummary,
    pub kungfu_name: String,
    pub equip_list: Vec<Equipment>,
    pub panel_list: PanelSummary,
}

impl PlayerSnapshot {
    pub fn new(
        role: RoleSummary,
        kungfu_name: impl Into<String>,
        equip_list: Vec<Equipment>,
        panel_list: PanelSummary,
    ) -> Self {
        Self {
            role: role.without_reserved(),
            kungfu_name: kungfu_name.into(),
            equip_list,
            panel_list,
        }
    }
}

/// API-style envelope the calculator endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEnvelope {
    pub code: u16,
    pub msg: String,
    pub data: PlayerSnapshot,
    /// Unix timestamp (seconds) of assembly.
    pub time: i64,
}

impl SnapshotEnvelope {
    pub fn success(data: PlayerSnapshot, time: i64) -> Self {
        Self {
            code: 200,
            msg: "success".to_string(),
            data,
            time,
        }
    }
}
