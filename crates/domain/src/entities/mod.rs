//! Domain entities - canonical records produced by the pipeline

mod equipment;
mod snapshot;

pub use equipment::{
    ColorStone, ColorStoneAttribute, CommonEnchant, EquipType, Equipment, FiveStone, ModifyType,
    PermanentEnchant, PermanentEnchantAttribute, PermanentEnchantDetail,
};
pub use snapshot::{PanelSummary, PlayerSnapshot, RoleSummary, SnapshotEnvelope};
