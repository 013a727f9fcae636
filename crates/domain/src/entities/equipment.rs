//! Equipment entity - one gear slot in the canonical calculator schema
//!
//! Field names on the wire follow the schema the DPS calculator service
//! accepts, which mixes camelCase with a few upstream PascalCase keys
//! (`EquipType`, `ID`, `UID`).

use serde::{Serialize, Serializer};

use crate::value_objects::{CLASS_THROWING, KIND_WEAPON, SUB_KIND_THROWING_POUCH};

/// One stat roll on an equipment item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyType {
    pub name: String,
    pub max: String,
    pub min: String,
    pub desc: String,
    pub percent: bool,
}

/// A five-elemental stone socketed into a non-ring item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveStone {
    pub name: String,
    pub level: String,
    pub max: String,
    pub min: String,
    pub icon: String,
    pub kind: String,
    pub sub_kind: String,
    pub desc: String,
    pub percent: bool,
}

/// Equip-type descriptor copied verbatim from upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipType {
    pub desc: String,
    pub equip_usage: String,
    pub icon: String,
}

/// One stat range granted by a color stone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorStoneAttribute {
    pub max: String,
    pub min: String,
    pub desc: String,
    pub percent: bool,
}

/// Weapon-only color stone socket. Blank for every other slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStone {
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: String,
    pub icon: String,
    pub kind: String,
    pub sub_kind: String,
    pub attribute: Vec<ColorStoneAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermanentEnchantDetail {
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermanentEnchantAttribute {
    pub max: String,
    pub min: String,
    pub attrib: Vec<PermanentEnchantDetail>,
}

/// Weapon permanent enchant.
///
/// `PermanentEnchant::default()` is the canonical "absent" value; pruning
/// compares against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermanentEnchant {
    pub id: String,
    pub name: String,
    pub level: String,
    pub icon: String,
    pub attributes: Vec<PermanentEnchantAttribute>,
}

/// Synthesized common enchant label for the five enchantable armor slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommonEnchant {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub desc: String,
}

/// One equipment slot in canonical form.
///
/// Built once by the mapper; the only later transformation is
/// [`Equipment::pruned`], which drops blank enchant records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub icon: String,
    pub kind: String,
    pub sub_kind: String,
    pub quality: String,
    pub strength_level: String,
    pub max_strength_level: String,
    pub color: String,
    pub desc: String,
    /// Always blank; the calculator schema requires the key.
    pub source: String,
    /// Always empty; upstream modifiers are not carried.
    pub modify_type: Vec<ModifyType>,
    pub five_stone: Vec<FiveStone>,
    #[serde(rename = "EquipType")]
    pub equip_type: EquipType,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_as_list"
    )]
    pub permanent_enchant: Option<PermanentEnchant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_enchant: Option<CommonEnchant>,
    pub color_stone: ColorStone,
}

impl Equipment {
    /// Weapon slot other than the throwing pouch.
    pub fn is_primary_weapon(&self) -> bool {
        self.kind == KIND_WEAPON && self.sub_kind != SUB_KIND_THROWING_POUCH
    }

    /// Throwing pouch, identified by its display class.
    pub fn is_throwing_pouch(&self) -> bool {
        self.class_name == CLASS_THROWING
    }

    /// Drops enchant records that equal their canonical blank default.
    pub fn pruned(mut self) -> Self {
        if self.permanent_enchant.as_ref() == Some(&PermanentEnchant::default()) {
            self.permanent_enchant = None;
        }
        if self.common_enchant.as_ref() == Some(&CommonEnchant::default()) {
            self.common_enchant = None;
        }
        self
    }
}

/// The calculator expects the permanent enchant as a one-element list.
fn serialize_as_list<S>(value: &Option<PermanentEnchant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(enchant) => std::slice::from_ref(enchant).serialize(serializer),
        None => serializer.serialize_none(),
    }
}
