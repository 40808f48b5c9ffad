//! Build model - what the character has equipped
//!
//! A build is the UI-edited slot to item-id mapping plus a parallel
//! slot to refine-level mapping. It is created fresh per calculation
//! request and owns no item data itself; id translation happens when
//! the calculator loads it against the master table.

use crate::types::EquipSlot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot to item-id and slot to refine-level maps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    items: HashMap<EquipSlot, u32>,
    #[serde(default)]
    refines: HashMap<EquipSlot, u32>,
}

impl Build {
    pub fn new() -> Self {
        Build::default()
    }

    /// Place an item id in a slot (builder style)
    pub fn with_item(mut self, slot: EquipSlot, item_id: u32) -> Self {
        self.items.insert(slot, item_id);
        self
    }

    /// Set a slot's refine level (builder style)
    pub fn with_refine(mut self, slot: EquipSlot, refine: u32) -> Self {
        self.refines.insert(slot, refine);
        self
    }

    pub fn set_item(&mut self, slot: EquipSlot, item_id: u32) {
        self.items.insert(slot, item_id);
    }

    pub fn clear_slot(&mut self, slot: EquipSlot) {
        self.items.remove(&slot);
        self.refines.remove(&slot);
    }

    pub fn set_refine(&mut self, slot: EquipSlot, refine: u32) {
        self.refines.insert(slot, refine);
    }

    pub fn item_id(&self, slot: EquipSlot) -> Option<u32> {
        self.items.get(&slot).copied()
    }

    pub fn refine(&self, slot: EquipSlot) -> u32 {
        self.refines.get(&slot).copied().unwrap_or(0)
    }

    /// Iterate occupied slots with their item ids
    pub fn occupied_slots(&self) -> impl Iterator<Item = (EquipSlot, u32)> + '_ {
        self.items.iter().map(|(slot, id)| (*slot, *id))
    }
}
