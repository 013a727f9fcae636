//! Equipment list sequencer.
//!
//! Orders a normalized equipment list the way the calculator reads it:
//! weapons, then the throwing pouch, then the remaining gear with the last
//! four slots arranged as necklace, pendant, ring.

use std::cmp::Reverse;

use crate::entities::Equipment;
use crate::value_objects::Accessory;

/// Number of trailing gear slots rearranged into canonical accessory order.
pub const FINAL_BLOCK_LEN: usize = 4;

/// Reorders `equipment` into calculator order.
///
/// The result is a permutation of the input. Weapons and pouches keep
/// their relative input order.
pub fn sequence_equipment(equipment: Vec<Equipment>) -> Vec<Equipment> {
    let mut weapons = Vec::new();
    let mut pouches = Vec::new();
    let mut others = Vec::new();

    for item in equipment {
        if item.is_primary_weapon() {
            weapons.push(item);
        } else if item.is_throwing_pouch() {
            pouches.push(item);
        } else {
            others.push(item);
        }
    }

    // Stable: equal priorities keep input order.
    others.sort_by_key(|item| Reverse(Accessory::priority(&item.sub_kind)));

    let split = others.len().saturating_sub(FINAL_BLOCK_LEN);
    let mut final_block = others.split_off(split);
    final_block.sort_by_key(|item| Accessory::tail_position(&item.sub_kind));

    let mut ordered = weapons;
    ordered.append(&mut pouches);
    ordered.append(&mut others);
    ordered.append(&mut final_block);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{
        CLASS_THROWING, KIND_WEAPON, SUB_KIND_NECKLACE, SUB_KIND_PENDANT, SUB_KIND_RING,
        SUB_KIND_THROWING_POUCH,
    };

    fn gear(sub_kind: &str, uid: &str) -> Equipment {
        Equipment {
            kind: "防具".into(),
            sub_kind: sub_kind.into(),
            class_name: sub_kind.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    fn weapon(uid: &str) -> Equipment {
        Equipment {
            kind: KIND_WEAPON.into(),
            sub_kind: "近身武器".into(),
            class_name: "笔".into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    fn pouch(uid: &str) -> Equipment {
        Equipment {
            kind: KIND_WEAPON.into(),
            sub_kind: SUB_KIND_THROWING_POUCH.into(),
            class_name: CLASS_THROWING.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    fn uids(list: &[Equipment]) -> Vec<&str> {
        list.iter().map(|e| e.uid.as_str()).collect()
    }

    fn sorted_uids(list: &[Equipment]) -> Vec<String> {
        let mut ids: Vec<String> = list.iter().map(|e| e.uid.clone()).collect();
        ids.sort();
        ids
    }

    fn standard() -> Vec<Equipment> {
        vec![
            gear("帽子", "hat"),
            gear("上衣", "top"),
            gear("腰带", "belt"),
            gear("护臂", "bracer"),
            gear("下装", "pants"),
            gear("鞋", "shoes"),
            gear(SUB_KIND_RING, "ring1"),
            gear(SUB_KIND_NECKLACE, "necklace"),
            gear(SUB_KIND_PENDANT, "pendant"),
            gear(SUB_KIND_RING, "ring2"),
            pouch("pouch"),
            weapon("weapon"),
        ]
    }

    #[test]
    fn standard_loadout_order() {
        let ordered = sequence_equipment(standard());
        assert_eq!(
            uids(&ordered),
            vec![
                "weapon", "pouch", "necklace", "pendant", "ring1", "ring2", "hat", "top", "belt",
                "bracer", "pants", "shoes",
            ]
        );
    }

    #[test]
    fn is_a_permutation() {
        let input = standard();
        let ordered = sequence_equipment(input.clone());
        assert_eq!(ordered.len(), input.len());
        assert_eq!(sorted_uids(&ordered), sorted_uids(&input));
    }

    #[test]
    fn weapons_and_pouches_keep_relative_order() {
        let mut input = standard();
        input.insert(0, weapon("heavy"));
        input.insert(3, pouch("pouch2"));
        let ordered = sequence_equipment(input);
        assert_eq!(
            uids(&ordered[..4]),
            vec!["heavy", "weapon", "pouch2", "pouch"]
        );
    }

    #[test]
    fn final_block_uses_canonical_accessory_order() {
        let input = vec![
            gear("帽子", "hat"),
            gear(SUB_KIND_RING, "ring"),
            gear(SUB_KIND_PENDANT, "pendant"),
            gear(SUB_KIND_NECKLACE, "necklace"),
        ];
        let ordered = sequence_equipment(input);
        assert_eq!(uids(&ordered), vec!["necklace", "pendant", "ring", "hat"]);
    }

    #[test]
    fn short_gear_list_does_not_panic() {
        let input = vec![
            weapon("weapon"),
            gear(SUB_KIND_RING, "ring"),
            gear(SUB_KIND_NECKLACE, "necklace"),
        ];
        let ordered = sequence_equipment(input);
        assert_eq!(uids(&ordered), vec!["weapon", "necklace", "ring"]);
    }

    #[test]
    fn empty_list() {
        assert!(sequence_equipment(Vec::new()).is_empty());
    }

    #[test]
    fn identical_items_are_not_dropped() {
        let input = vec![
            gear(SUB_KIND_RING, "same"),
            gear(SUB_KIND_RING, "same"),
            gear("帽子", "hat"),
            gear("上衣", "top"),
            gear("鞋", "shoes"),
        ];
        let ordered = sequence_equipment(input);
        assert_eq!(ordered.len(), 5);
        assert_eq!(uids(&ordered), vec!["same", "same", "hat", "top", "shoes"]);
    }
}
