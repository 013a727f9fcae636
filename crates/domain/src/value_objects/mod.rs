//! Value objects - immutable vocabulary shared by the pipeline stages

mod kungfu;
mod slot;

pub use kungfu::{
    required_slot_count, validate_slot_count, BASE_SLOT_COUNT, EXTENDED_SLOT_COUNT,
    EXTENDED_SLOT_KUNGFUS,
};
pub use slot::{
    Accessory, ArmorSlot, CLASS_THROWING, KIND_WEAPON, SUB_KIND_NECKLACE, SUB_KIND_PENDANT,
    SUB_KIND_RING, SUB_KIND_THROWING_POUCH,
};
