//! Item bonus collection - aggregating script contributions
//!
//! One collection pass walks every equipped item, resolves each of
//! its script entries against that slot's refine level and the
//! build-wide context, and accumulates the numeric results into a
//! single [`BonusMap`]. Autocast keys become [`AutocastEntry`]
//! registrations instead of numbers. A fresh pass starts from an
//! empty map; nothing carries over between passes.

use crate::item::EquippedItem;
use crate::script::{autocast_skill_name, resolve, AutocastEntry, EncodedValue, EvalContext};
use crate::types::BaseStats;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Aggregated bonus mapping: bonus key to accumulated value
///
/// Keys are created at zero on first touch; addition is the only
/// mutation. A `BTreeMap` keeps iteration order stable for display
/// and debugging - the totals themselves are order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusMap {
    totals: BTreeMap<String, f64>,
}

impl BonusMap {
    pub fn new() -> Self {
        BonusMap::default()
    }

    /// Add a contribution to a key, creating it at 0 if first seen
    pub fn add(&mut self, key: &str, value: f64) {
        *self.totals.entry(key.to_string()).or_insert(0.0) += value;
    }

    /// Accumulated value for a key, 0 when the key never appeared
    pub fn get(&self, key: &str) -> f64 {
        self.totals.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.totals.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// A script entry that matched no known form
///
/// Zero contribution, but kept so imperfect game data stays visible
/// to callers instead of silently vanishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnparsedValue {
    pub item_id: u32,
    pub bonus_key: String,
    pub raw: String,
}

/// Result of one collection pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BonusCollection {
    pub totals: BonusMap,
    pub autocasts: Vec<AutocastEntry>,
    pub unparsed: Vec<UnparsedValue>,
}

/// Resolve and aggregate every script entry of every equipped item
///
/// The equipped-name set handed to `EQUIP[..]` resolution covers all
/// slots, cards included, and contains each item's own name - a set
/// piece may reference itself. Traversal order cannot affect the
/// totals; addition is commutative.
pub fn collect(equipped: &[EquippedItem], stats: &BaseStats) -> BonusCollection {
    let equipped_names: HashSet<String> =
        equipped.iter().map(|e| e.item.name.clone()).collect();

    let mut collection = BonusCollection::default();

    for entry in equipped {
        let ctx = EvalContext {
            refine: entry.effective_refine(),
            stats,
            equipped_names: &equipped_names,
        };

        for (key, values) in &entry.item.script {
            if let Some(skill) = autocast_skill_name(key) {
                for raw in values {
                    collection.autocasts.push(AutocastEntry::parse(skill, raw));
                }
                continue;
            }

            for raw in values {
                let parsed = EncodedValue::parse(raw);
                if let EncodedValue::Unrecognized(_) = parsed {
                    collection.unparsed.push(UnparsedValue {
                        item_id: entry.item.id,
                        bonus_key: key.clone(),
                        raw: raw.clone(),
                    });
                }
                collection.totals.add(key, resolve(&parsed, &ctx));
            }
        }
    }

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemType};
    use crate::types::EquipSlot;

    fn equip(slot: EquipSlot, item: &Item, refine: u32) -> EquippedItem {
        EquippedItem { slot, item, refine }
    }

    #[test]
    fn test_plain_values_sum_across_items() {
        let weapon = Item::new(1, "Weapon", ItemType::Weapon).with_bonus("atk", "10");
        let card = Item::new(2, "Card", ItemType::Card).with_bonus("atk", "15");
        let stats = BaseStats::uniform(1);

        let result = collect(
            &[
                equip(EquipSlot::Weapon, &weapon, 0),
                equip(EquipSlot::WeaponCard, &card, 0),
            ],
            &stats,
        );
        assert_eq!(result.totals.get("atk"), 25.0);
    }

    #[test]
    fn test_refine_applies_per_slot() {
        // Same script on two slots at different refines
        let garment = Item::new(1, "Garment", ItemType::Armor).with_bonus("matk", "2---10");
        let armor = Item::new(2, "Armor", ItemType::Armor).with_bonus("matk", "2---10");
        let stats = BaseStats::uniform(1);

        let result = collect(
            &[
                equip(EquipSlot::Garment, &garment, 8),
                equip(EquipSlot::Armor, &armor, 4),
            ],
            &stats,
        );
        // floor(8/2)*10 + floor(4/2)*10 = 40 + 20
        assert_eq!(result.totals.get("matk"), 60.0);
    }

    #[test]
    fn test_card_slot_refine_is_ignored() {
        let card = Item::new(1, "Card", ItemType::Card).with_bonus("atk", "2---10");
        let stats = BaseStats::uniform(1);

        // Refine 10 in the build data, but cards never refine
        let result = collect(&[equip(EquipSlot::ArmorCard, &card, 10)], &stats);
        assert_eq!(result.totals.get("atk"), 0.0);
    }

    #[test]
    fn test_set_bonus_sees_all_slots() {
        let shield =
            Item::new(1, "Escudo Ilusión B [1]", ItemType::Armor).with_bonus("atk", "EQUIP[Turbina Ilusión B]===30");
        let garment = Item::new(2, "Turbina Ilusión B", ItemType::Armor);
        let stats = BaseStats::uniform(1);

        let with_pair = collect(
            &[
                equip(EquipSlot::Shield, &shield, 0),
                equip(EquipSlot::Garment, &garment, 0),
            ],
            &stats,
        );
        assert_eq!(with_pair.totals.get("atk"), 30.0);

        let without_pair = collect(&[equip(EquipSlot::Shield, &shield, 0)], &stats);
        assert_eq!(without_pair.totals.get("atk"), 0.0);
    }

    #[test]
    fn test_set_bonus_self_reference() {
        let boots = Item::new(1, "Temporal Boots", ItemType::Armor)
            .with_bonus("hp", "EQUIP[Temporal Boots]===300");
        let stats = BaseStats::uniform(1);

        let result = collect(&[equip(EquipSlot::Boots, &boots, 0)], &stats);
        assert_eq!(result.totals.get("hp"), 300.0);
    }

    #[test]
    fn test_multiple_values_one_key() {
        let item = Item::new(1, "Shield", ItemType::Armor)
            .with_bonus("p_class_boss", "5")
            .with_bonus("p_class_boss", "2---2");
        let stats = BaseStats::uniform(1);

        let result = collect(&[equip(EquipSlot::Shield, &item, 10)], &stats);
        // 5 + floor(10/2)*2 = 15
        assert_eq!(result.totals.get("p_class_boss"), 15.0);
    }

    #[test]
    fn test_autocast_entries_collected() {
        let glove = Item::new(1, "Glove", ItemType::Armor)
            .with_bonus("hp", "500")
            .with_bonus("autocast__Frost Nova", "10,1,onhit")
            .with_bonus("autocast__Psychic Wave", "1,1,onhit");
        let stats = BaseStats::uniform(1);

        let result = collect(&[equip(EquipSlot::AccLeft, &glove, 0)], &stats);
        assert_eq!(result.totals.get("hp"), 500.0);
        assert!(!result.totals.contains("autocast__Frost Nova"));
        assert_eq!(result.autocasts.len(), 2);

        let frost = result
            .autocasts
            .iter()
            .find(|a| a.skill_name == "Frost Nova")
            .unwrap();
        assert_eq!(frost.skill_level, 10);
        assert!((frost.chance_percent - 1.0).abs() < f64::EPSILON);
        assert_eq!(frost.trigger, "onhit");
    }

    #[test]
    fn test_malformed_entry_does_not_poison_siblings() {
        let item = Item::new(7, "Odd Item", ItemType::Armor)
            .with_bonus("atk", "10")
            .with_bonus("atk", "R>=7===3")
            .with_bonus("matk", "20");
        let stats = BaseStats::uniform(1);

        let result = collect(&[equip(EquipSlot::Armor, &item, 0)], &stats);
        assert_eq!(result.totals.get("atk"), 10.0);
        assert_eq!(result.totals.get("matk"), 20.0);
        assert_eq!(result.unparsed.len(), 1);
        assert_eq!(result.unparsed[0].item_id, 7);
        assert_eq!(result.unparsed[0].bonus_key, "atk");
        assert_eq!(result.unparsed[0].raw, "R>=7===3");
    }

    #[test]
    fn test_empty_slot_list() {
        let stats = BaseStats::uniform(1);
        let result = collect(&[], &stats);
        assert!(result.totals.is_empty());
        assert!(result.autocasts.is_empty());
        assert!(result.unparsed.is_empty());
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use crate::item::{Item, ItemType};
    use crate::types::EquipSlot;
    use proptest::prelude::*;

    proptest! {
        /// Slot traversal order never changes the totals.
        #[test]
        fn prop_totals_are_order_invariant(values in prop::collection::vec(-1000i32..1000, 1..12)) {
            let slots = EquipSlot::all();
            let items: Vec<Item> = values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    Item::new(i as u32 + 1, format!("Item {}", i), ItemType::Armor)
                        .with_bonus("atk", v.to_string())
                })
                .collect();
            let stats = BaseStats::uniform(50);

            let forward: Vec<EquippedItem> = items
                .iter()
                .enumerate()
                .map(|(i, item)| EquippedItem { slot: slots[i], item, refine: 0 })
                .collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            let a = collect(&forward, &stats);
            let b = collect(&reversed, &stats);
            prop_assert_eq!(&a.totals, &b.totals);

            let expected: f64 = values.iter().map(|v| *v as f64).sum();
            prop_assert!((a.totals.get("atk") - expected).abs() < 1e-9);
        }

        /// Collecting twice from the same inputs is bit-identical.
        #[test]
        fn prop_collect_is_pure(refine in 0u32..20, stat in 1u32..200) {
            let item = Item::new(1, "Manto", ItemType::Armor)
                .with_bonus("matk", "2---10")
                .with_bonus("matkPercent", "9===10")
                .with_bonus("m_my_element_fire", "SUM[int==12]---2");
            let stats = BaseStats::uniform(stat);
            let equipped = [EquippedItem { slot: EquipSlot::Garment, item: &item, refine }];

            let a = collect(&equipped, &stats);
            let b = collect(&equipped, &stats);
            prop_assert_eq!(a.totals, b.totals);
        }
    }
}
