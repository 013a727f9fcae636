//! Shared fixtures for engine tests.
//!
//! Upstream JSON shapes come from `jx3calc_domain::test_support`; this module
//! adds the engine-side pieces (role summaries, server tables).

use std::collections::HashMap;

use jx3calc_domain::test_support::{equip_blob, standard_loadout};
use jx3calc_domain::RoleSummary;
use serde_json::{json, Value};

use crate::infrastructure::ports::ResolvedServer;
use crate::infrastructure::server_directory::ServerDirectory;

/// Role summary as the role API returns it.
pub fn role_summary() -> RoleSummary {
    let fields = json!({
        "zoneName": "电信区",
        "serverName": "梦江南",
        "roleName": "秦墨",
        "roleId": "4219832",
        "globalRoleId": "2199023680231",
        "forceName": "药宗",
        "campName": "浩气盟"
    });
    RoleSummary::new(fields.as_object().cloned().unwrap_or_default())
}

pub fn meng_jiang_nan() -> ResolvedServer {
    ResolvedServer {
        server: "梦江南".to_string(),
        zone: "电信区".to_string(),
    }
}

/// Server directory where group `114514` is bound to 梦江南.
pub fn group_directory() -> ServerDirectory {
    ServerDirectory::new(HashMap::from([(
        "114514".to_string(),
        "梦江南".to_string(),
    )]))
}

/// Twelve-slot 药宗 loadout: one weapon with a color stone and rings
/// carrying five-stone data upstream.
pub fn yaozong_blob() -> Value {
    equip_blob("10627", standard_loadout())
}
