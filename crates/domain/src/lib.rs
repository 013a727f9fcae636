//! Pure normalization pipeline for JX3 role equipment.
//!
//! Turns the upstream role-equip response into the canonical equipment list
//! the DPS calculator accepts. Nothing here performs I/O; lookups that need
//! the network are injected by the engine.

pub mod common;
pub mod entities;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod sequence;
pub mod upstream;
pub mod value_objects;

#[cfg(any(test, feature = "testing"))]
pub mod test_support;

pub use entities::{
    ColorStone, ColorStoneAttribute, CommonEnchant, EquipType, Equipment, FiveStone, ModifyType,
    PanelSummary, PermanentEnchant, PermanentEnchantAttribute, PermanentEnchantDetail,
    PlayerSnapshot, RoleSummary, SnapshotEnvelope,
};
pub use error::DomainError;
pub use mapping::{map_equipment, EnchantNaming, COMMON_ENCHANT_INFIX};
pub use normalize::normalize_equipment;
pub use sequence::sequence_equipment;
pub use upstream::{RawEquip, RawEquipData, RawRoleEquip};
pub use value_objects::{
    required_slot_count, validate_slot_count, Accessory, ArmorSlot, BASE_SLOT_COUNT,
    EXTENDED_SLOT_COUNT, EXTENDED_SLOT_KUNGFUS,
};
