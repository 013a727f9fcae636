//! Map-then-sequence over every slot of an equip response.

use crate::entities::Equipment;
use crate::mapping::{map_equipment, EnchantNaming};
use crate::sequence::sequence_equipment;
use crate::upstream::RawEquipData;
use crate::DomainError;

/// Maps every upstream slot and returns them in calculator order.
///
/// Any malformed slot aborts the whole list; no partial result is returned.
pub fn normalize_equipment(
    data: &RawEquipData,
    enchants: &dyn EnchantNaming,
) -> Result<Vec<Equipment>, DomainError> {
    let mapped = data
        .equips
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            map_equipment(raw, enchants).map_err(|e| match e {
                DomainError::MalformedUpstreamData(msg) => {
                    DomainError::malformed(format!("Equips[{index}] {msg}"))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sequence_equipment(mapped))
}
