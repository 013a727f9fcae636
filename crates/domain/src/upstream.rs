//! Raw records of the upstream role-equip API.
//!
//! Always-present fields are typed and required, so a missing one fails the
//! parse. Blocks whose presence depends on the slot (`FiveStone`,
//! `WPermanentEnchant`, `ColorStone`) stay as raw JSON and are decoded by the
//! mapper only when its rule for that slot applies. Anything else upstream
//! sends, `ModifyType` included, is ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::common::{lenient_string, lenient_string_or_default};
use crate::entities::PanelSummary;
use crate::DomainError;

/// Decodes `value` into `T`, naming `path` in the error.
pub(crate) fn decode_block<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T, DomainError> {
    T::deserialize(value).map_err(|e| DomainError::malformed(format!("{path}: {e}")))
}

/// Top-level response of the equip endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoleEquip {
    pub data: RawEquipData,
}

impl RawRoleEquip {
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        decode_block(value, "role equip response")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEquipData {
    #[serde(rename = "Equips")]
    pub equips: Vec<RawEquip>,
    #[serde(rename = "Kungfu")]
    pub kungfu: RawKungfu,
    #[serde(rename = "TotalEquipsScore", default)]
    pub total_equips_score: Value,
    #[serde(rename = "PersonalPanel", default)]
    pub personal_panel: Value,
}

impl RawEquipData {
    /// Equipment score and character panel, passed through untouched.
    pub fn panel_summary(&self) -> PanelSummary {
        PanelSummary {
            score: self.total_equips_score.clone(),
            panel: self.personal_panel.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawKungfu {
    #[serde(rename = "KungfuID", deserialize_with = "lenient_string")]
    pub kungfu_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawIcon {
    #[serde(deserialize_with = "lenient_string")]
    pub file_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sub_kind: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAttrib {
    #[serde(deserialize_with = "lenient_string")]
    pub generated_magic: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEquipType {
    #[serde(default, deserialize_with = "lenient_string_or_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "lenient_string_or_default")]
    pub equip_usage: String,
    #[serde(default, deserialize_with = "lenient_string_or_default")]
    pub icon: String,
}

/// One equipment slot as reported upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEquip {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    pub icon: RawIcon,
    #[serde(deserialize_with = "lenient_string")]
    pub quality: String,
    #[serde(deserialize_with = "lenient_string")]
    pub strength_level: String,
    #[serde(deserialize_with = "lenient_string")]
    pub max_equip_box_strength_level: String,
    #[serde(deserialize_with = "lenient_string")]
    pub color: String,
    #[serde(deserialize_with = "lenient_string")]
    pub desc: String,
    #[serde(deserialize_with = "lenient_string")]
    pub detail_type: String,
    #[serde(rename = "ID", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "UID", deserialize_with = "lenient_string")]
    pub uid: String,
    #[serde(default)]
    pub equip_type: RawEquipType,
    #[serde(default)]
    pub five_stone: Option<Value>,
    #[serde(rename = "WPermanentEnchant", default)]
    pub permanent_enchant: Option<Value>,
    #[serde(default)]
    pub color_stone: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFiveStone {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(deserialize_with = "lenient_string")]
    pub param1_max: String,
    #[serde(deserialize_with = "lenient_string")]
    pub param1_min: String,
    pub icon: RawIcon,
    pub attrib: RawAttrib,
}

/// Value range shared by permanent enchant and color stone attributes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRangeAttribute {
    #[serde(deserialize_with = "lenient_string")]
    pub attribute1_value1: String,
    #[serde(deserialize_with = "lenient_string")]
    pub attribute1_value2: String,
    pub attrib: RawAttrib,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPermanentEnchant {
    #[serde(rename = "ID", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub level: String,
    pub attributes: Vec<RawRangeAttribute>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawColorStone {
    #[serde(rename = "ID", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(rename = "Type", deserialize_with = "lenient_string")]
    pub class_name: String,
    pub icon: RawIcon,
    pub attributes: Vec<RawRangeAttribute>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_equip() -> Value {
        json!({
            "Name": "岚江·帽",
            "Icon": {"FileName": "https://icon/1.png", "Kind": "防具", "SubKind": "帽子"},
            "Quality": 12450,
            "StrengthLevel": "6",
            "MaxEquipBoxStrengthLevel": "8",
            "Color": "4",
            "Desc": "",
            "DetailType": "帽子",
            "ID": "98541",
            "UID": "1234567"
        })
    }

    #[test]
    fn parses_minimal_equip_with_lenient_scalars() {
        let equip: RawEquip = decode_block(&raw_equip(), "Equips[0]").unwrap();
        assert_eq!(equip.quality, "12450");
        assert_eq!(equip.icon.sub_kind, "帽子");
        assert!(equip.five_stone.is_none());
        assert!(equip.permanent_enchant.is_none());
        assert_eq!(equip.equip_type.equip_usage, "");
    }

    #[test]
    fn null_optional_block_is_absent() {
        let mut value = raw_equip();
        value["WPermanentEnchant"] = Value::Null;
        let equip: RawEquip = decode_block(&value, "Equips[0]").unwrap();
        assert!(equip.permanent_enchant.is_none());
    }

    #[test]
    fn missing_icon_is_malformed() {
        let mut value = raw_equip();
        value.as_object_mut().unwrap().remove("Icon");
        let err = decode_block::<RawEquip>(&value, "Equips[0]").unwrap_err();
        assert!(matches!(err, DomainError::MalformedUpstreamData(_)));
        assert!(err.to_string().contains("Equips[0]"));
    }

    #[test]
    fn panel_summary_passes_through() {
        let value = json!({"data": {
            "Equips": [],
            "Kungfu": {"KungfuID": 10627},
            "TotalEquipsScore": 312345,
            "PersonalPanel": [{"name": "会心", "value": 0.31}]
        }});
        let response = RawRoleEquip::from_value(&value).unwrap();
        assert_eq!(response.data.kungfu.kungfu_id, "10627");
        let panel = response.data.panel_summary();
        assert_eq!(panel.score, json!(312345));
        assert_eq!(panel.panel[0]["name"], json!("会心"));
    }

    #[test]
    fn response_requires_kungfu() {
        let value = json!({"data": {"Equips": []}});
        assert!(RawRoleEquip::from_value(&value).is_err());
    }
}
