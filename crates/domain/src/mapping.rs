//! Raw equipment record mapper.
//!
//! Converts one upstream [`RawEquip`] into a canonical [`Equipment`]. Every
//! conditional block is derived by its own function so each slot rule reads
//! on its own:
//!
//! | block               | populated when                                  |
//! |---------------------|-------------------------------------------------|
//! | `fiveStone`         | sub-kind is not a ring                          |
//! | `permanentEnchant`  | upstream carries `WPermanentEnchant`            |
//! | `commonEnchant`     | sub-kind is one of the five [`ArmorSlot`]s      |
//! | `colorStone`        | kind is weapon and sub-kind is not the pouch    |

use crate::entities::{
    ColorStone, ColorStoneAttribute, CommonEnchant, EquipType, Equipment, FiveStone,
    PermanentEnchant, PermanentEnchantAttribute, PermanentEnchantDetail,
};
use crate::upstream::{decode_block, RawColorStone, RawEquip, RawFiveStone, RawPermanentEnchant};
use crate::value_objects::{ArmorSlot, KIND_WEAPON, SUB_KIND_RING, SUB_KIND_THROWING_POUCH};
use crate::DomainError;

/// Infix between the quality prefix and the slot suffix of a common enchant.
pub const COMMON_ENCHANT_INFIX: &str = "·伤·";

/// Resolves the quality-dependent prefix of common enchant names.
pub trait EnchantNaming: Send + Sync {
    fn prefix(&self, quality: &str) -> String;
}

/// Maps one upstream equipment record into canonical form.
///
/// Fails with [`DomainError::MalformedUpstreamData`] when a block that the
/// slot's rules require is missing or mis-shaped.
pub fn map_equipment(
    raw: &RawEquip,
    enchants: &dyn EnchantNaming,
) -> Result<Equipment, DomainError> {
    Ok(Equipment {
        name: raw.name.clone(),
        class_name: raw.detail_type.clone(),
        icon: raw.icon.file_name.clone(),
        kind: raw.icon.kind.clone(),
        sub_kind: raw.icon.sub_kind.clone(),
        quality: raw.quality.clone(),
        strength_level: raw.strength_level.clone(),
        max_strength_level: raw.max_equip_box_strength_level.clone(),
        color: raw.color.clone(),
        desc: raw.desc.clone(),
        source: String::new(),
        modify_type: Vec::new(),
        five_stone: map_five_stones(raw)?,
        equip_type: EquipType {
            desc: raw.equip_type.desc.clone(),
            equip_usage: raw.equip_type.equip_usage.clone(),
            icon: raw.equip_type.icon.clone(),
        },
        id: raw.id.clone(),
        uid: raw.uid.clone(),
        permanent_enchant: Some(map_permanent_enchant(raw)?),
        common_enchant: Some(map_common_enchant(raw, enchants)),
        color_stone: map_color_stone(raw)?,
    })
}

fn map_five_stones(raw: &RawEquip) -> Result<Vec<FiveStone>, DomainError> {
    if raw.icon.sub_kind == SUB_KIND_RING {
        return Ok(Vec::new());
    }
    let block = raw
        .five_stone
        .as_ref()
        .ok_or_else(|| DomainError::malformed(format!("{}: missing FiveStone", raw.name)))?;
    let stones: Vec<RawFiveStone> = decode_block(block, "FiveStone")?;
    Ok(stones
        .into_iter()
        .map(|stone| FiveStone {
            name: stone.name,
            level: stone.level,
            max: stone.param1_max,
            min: stone.param1_min,
            icon: stone.icon.file_name,
            kind: stone.icon.kind,
            sub_kind: stone.icon.sub_kind,
            desc: stone.attrib.generated_magic,
            percent: false,
        })
        .collect())
}

fn map_permanent_enchant(raw: &RawEquip) -> Result<PermanentEnchant, DomainError> {
    let Some(block) = &raw.permanent_enchant else {
        return Ok(PermanentEnchant::default());
    };
    let enchant: RawPermanentEnchant = decode_block(block, "WPermanentEnchant")?;
    let first = enchant.attributes.into_iter().next().ok_or_else(|| {
        DomainError::malformed(format!("{}: WPermanentEnchant has no Attributes", raw.name))
    })?;

    Ok(PermanentEnchant {
        id: enchant.id,
        name: enchant.name,
        level: enchant.level,
        icon: String::new(),
        attributes: vec![PermanentEnchantAttribute {
            max: first.attribute1_value1,
            min: first.attribute1_value2,
            attrib: vec![PermanentEnchantDetail {
                desc: first.attrib.generated_magic,
            }],
        }],
    })
}

fn map_common_enchant(raw: &RawEquip, enchants: &dyn EnchantNaming) -> CommonEnchant {
    match ArmorSlot::from_sub_kind(&raw.icon.sub_kind) {
        Some(slot) => CommonEnchant {
            name: format!(
                "{}{}{}",
                enchants.prefix(&raw.quality),
                COMMON_ENCHANT_INFIX,
                slot.enchant_suffix()
            ),
            ..CommonEnchant::default()
        },
        None => CommonEnchant::default(),
    }
}

fn map_color_stone(raw: &RawEquip) -> Result<ColorStone, DomainError> {
    if raw.icon.kind != KIND_WEAPON || raw.icon.sub_kind == SUB_KIND_THROWING_POUCH {
        return Ok(ColorStone::default());
    }
    let block = raw
        .color_stone
        .as_ref()
        .ok_or_else(|| DomainError::malformed(format!("{}: missing ColorStone", raw.name)))?;
    let stone: RawColorStone = decode_block(block, "ColorStone")?;

    Ok(ColorStone {
        id: stone.id,
        name: stone.name,
        class_name: stone.class_name,
        level: stone.level,
        icon: stone.icon.file_name,
        kind: stone.icon.kind,
        sub_kind: stone.icon.sub_kind,
        attribute: stone
            .attributes
            .into_iter()
            .map(|attribute| ColorStoneAttribute {
                max: attribute.attribute1_value1,
                min: attribute.attribute1_value2,
                desc: attribute.attrib.generated_magic,
                percent: false,
            })
            .collect(),
    })
}
