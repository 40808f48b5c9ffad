//! Item model and master item table

use crate::types::EquipSlot;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Broad item category from the master table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Armor,
    Card,
    Costume,
    Shadow,
    Pet,
}

/// An item's bonus script: bonus key to encoded value strings
///
/// Insertion order within a key is irrelevant; every value resolves
/// independently and contributions under the same key are summed.
pub type BonusScript = BTreeMap<String, Vec<String>>;

/// One item from the master table. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub item_type: ItemType,
    /// Flat weapon attack, if any
    #[serde(default)]
    pub attack: u32,
    /// Flat defense, if any
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub script: BonusScript,
}

impl Item {
    /// Minimal constructor used by tests and the demo
    pub fn new(id: u32, name: impl Into<String>, item_type: ItemType) -> Self {
        Item {
            id,
            name: name.into(),
            item_type,
            attack: 0,
            defense: 0,
            script: BonusScript::new(),
        }
    }

    /// Add one encoded value under a bonus key (builder style)
    pub fn with_bonus(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.script.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }
}

/// Master item table: id to item definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemTable {
    items: HashMap<u32, Item>,
}

impl ItemTable {
    pub fn new() -> Self {
        ItemTable::default()
    }

    /// Build a table from a list of items
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        ItemTable {
            items: items.into_iter().map(|i| (i.id, i)).collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An item placed on a build, with the refine level of its slot
#[derive(Debug, Clone, Copy)]
pub struct EquippedItem<'a> {
    pub slot: EquipSlot,
    pub item: &'a Item,
    pub refine: u32,
}

impl<'a> EquippedItem<'a> {
    /// Refine level as seen by script resolution
    ///
    /// Non-refinable slot types always evaluate at 0, whatever the
    /// build data says.
    pub fn effective_refine(&self) -> u32 {
        if self.slot.is_refinable() {
            self.refine
        } else {
            0
        }
    }
}
