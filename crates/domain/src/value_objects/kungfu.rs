//! Kungfu-dependent equipment slot rules.

use crate::DomainError;

/// Slot count for every kungfu that wields a single weapon.
pub const BASE_SLOT_COUNT: usize = 12;

/// Slot count for the dual-weapon Cangjian kungfus (light + heavy sword).
pub const EXTENDED_SLOT_COUNT: usize = 13;

/// Kungfus whose equipment list carries a secondary weapon slot.
pub const EXTENDED_SLOT_KUNGFUS: [&str; 2] = ["问水诀", "山居剑意"];

/// Exact number of equipment slots a player of `kungfu_name` must report.
pub fn required_slot_count(kungfu_name: &str) -> usize {
    if EXTENDED_SLOT_KUNGFUS.contains(&kungfu_name) {
        EXTENDED_SLOT_COUNT
    } else {
        BASE_SLOT_COUNT
    }
}

/// Fails unless `actual` equals the slot count required for `kungfu_name`.
pub fn validate_slot_count(kungfu_name: &str, actual: usize) -> Result<(), DomainError> {
    let expected = required_slot_count(kungfu_name);
    if actual == expected {
        Ok(())
    } else {
        Err(DomainError::slot_count(kungfu_name, expected, actual))
    }
}
