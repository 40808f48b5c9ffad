//! Calculator - the evaluation orchestrator
//!
//! Owns the master item table, job, target monster and the currently
//! loaded build, and turns them into an aggregated bonus map plus
//! summary metrics. Every `prepare_bonuses` call starts from an empty
//! aggregate; repeated calls with an unchanged build produce identical
//! results.

use crate::bonus::{collect, BonusCollection, BonusMap, UnparsedValue};
use crate::script::AutocastEntry;
use crate::build::Build;
use crate::error::CalcError;
use crate::item::{EquippedItem, Item, ItemTable};
use crate::job::Job;
use crate::monster::Monster;
use crate::types::{BaseStats, EquipSlot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ATK granted per weapon refine level (level 4 weapon rate)
const WEAPON_REFINE_ATK: f64 = 7.0;

/// Derived metrics for display and DPS estimation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Final stats: base + job bonus + flat stat bonuses from items
    pub stats: BaseStats,
    pub atk: f64,
    pub matk: f64,
    pub max_hp: f64,
    pub max_sp: f64,
    pub hit: f64,
    pub flee: f64,
    pub aspd: f64,
    /// Expected physical damage of one hit against the loaded target
    pub expected_hit: f64,
}

/// Build calculator
#[derive(Debug, Default)]
pub struct Calculator {
    master_items: Option<ItemTable>,
    job: Option<Job>,
    monster: Option<Monster>,
    level: u32,
    raw_stats: BaseStats,
    equipped: HashMap<EquipSlot, Item>,
    refines: HashMap<EquipSlot, u32>,
    collection: BonusCollection,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Load the master item table
    pub fn set_master_items(&mut self, items: ItemTable) -> &mut Self {
        self.master_items = Some(items);
        self
    }

    /// Set the character class
    pub fn set_job(&mut self, job: Job) -> &mut Self {
        self.job = Some(job);
        self
    }

    /// Set the target monster
    pub fn set_monster(&mut self, monster: Monster) -> &mut Self {
        self.monster = Some(monster);
        self
    }

    /// Set character level and raw (pre-equipment) base stats
    pub fn set_character(&mut self, level: u32, stats: BaseStats) -> &mut Self {
        self.level = level;
        self.raw_stats = stats;
        self
    }

    /// Translate a build's item ids into equipped item records
    ///
    /// Ids missing from the master table leave their slot empty; the
    /// game-data corpus routinely references items that were removed.
    /// Requires the master table, which is a structural precondition.
    pub fn load_build(&mut self, build: &Build) -> Result<&mut Self, CalcError> {
        let master = self.master_items.as_ref().ok_or(CalcError::MasterItemsNotLoaded)?;

        self.equipped.clear();
        self.refines.clear();
        for (slot, item_id) in build.occupied_slots() {
            if let Some(item) = master.get(item_id) {
                self.equipped.insert(slot, item.clone());
                self.refines.insert(slot, build.refine(slot));
            }
        }
        Ok(self)
    }

    /// Base stats as seen by script resolution: raw + job bonus
    ///
    /// Item stat bonuses are deliberately excluded here - `SUM[..]`
    /// forms scale on the character's base stats, not on equipment.
    fn base_stats(&self) -> BaseStats {
        match &self.job {
            Some(job) => self.raw_stats.plus(&job.bonus),
            None => self.raw_stats,
        }
    }

    /// Run one full collection pass over the equipped items
    ///
    /// Resets the working aggregate first, so repeated calls cannot
    /// accumulate across passes.
    pub fn prepare_bonuses(&mut self) -> Result<&BonusCollection, CalcError> {
        if self.master_items.is_none() {
            return Err(CalcError::MasterItemsNotLoaded);
        }

        let stats = self.base_stats();
        let equipped: Vec<EquippedItem> = self
            .equipped
            .iter()
            .map(|(slot, item)| EquippedItem {
                slot: *slot,
                item,
                refine: self.refines.get(slot).copied().unwrap_or(0),
            })
            .collect();

        self.collection = collect(&equipped, &stats);
        Ok(&self.collection)
    }

    /// Aggregated bonus totals from the last pass
    pub fn total_bonus(&self) -> &BonusMap {
        &self.collection.totals
    }

    /// Autocast registrations from the last pass
    pub fn autocast_entries(&self) -> &[AutocastEntry] {
        &self.collection.autocasts
    }

    /// Script entries the last pass could not parse
    pub fn unparsed_scripts(&self) -> &[UnparsedValue] {
        &self.collection.unparsed
    }

    /// Flat attack printed on equipped items, plus weapon refine ATK
    fn equipment_atk(&self) -> f64 {
        let flat: u32 = self.equipped.values().map(|i| i.attack).sum();
        let refine = self.refines.get(&EquipSlot::Weapon).copied().unwrap_or(0);
        flat as f64 + refine as f64 * WEAPON_REFINE_ATK
    }

    /// Derived metrics from the last prepared pass
    ///
    /// Plain arithmetic over the totals. Status ATK/MATK follow the
    /// renewal shape `floor(level/4) + main stat + dex/5 + luk/3`;
    /// hard defense reduces by `def / (def + 400)` with soft defense
    /// subtracted flat afterwards.
    pub fn summary(&self) -> BuildSummary {
        let totals = &self.collection.totals;
        let base = self.base_stats();

        // Items grant flat stats through plain keys (str, vit, ...)
        let stats = base.plus(&BaseStats::new(
            totals.get("str").max(0.0) as u32,
            totals.get("agi").max(0.0) as u32,
            totals.get("vit").max(0.0) as u32,
            totals.get("int").max(0.0) as u32,
            totals.get("dex").max(0.0) as u32,
            totals.get("luk").max(0.0) as u32,
        ));

        let level = self.level as f64;
        let status_atk = (self.level / 4 + stats.strength + stats.dexterity / 5 + stats.luck / 3) as f64;
        let status_matk =
            (self.level / 4 + stats.intelligence + stats.dexterity / 5 + stats.luck / 3) as f64;

        let atk = (status_atk + self.equipment_atk() + totals.get("atk"))
            * (1.0 + totals.get("atkPercent") / 100.0);
        let matk = (status_matk + totals.get("matk")) * (1.0 + totals.get("matkPercent") / 100.0);

        let max_hp = ((1000.0 + level * 45.0) * (1.0 + stats.vitality as f64 / 100.0)
            + totals.get("hp"))
            * (1.0 + totals.get("hpPercent") / 100.0);
        let max_sp = ((100.0 + level * 9.0) * (1.0 + stats.intelligence as f64 / 100.0)
            + totals.get("sp"))
            * (1.0 + totals.get("spPercent") / 100.0);

        let hit = 175.0 + level + stats.dexterity as f64 + totals.get("hit");
        let flee = 100.0 + level + stats.agility as f64 + totals.get("flee");
        let aspd = (156.0 + (stats.agility * 4 + stats.dexterity) as f64 / 10.0 + totals.get("aspd"))
            .min(193.0);

        let expected_hit = match &self.monster {
            Some(monster) => {
                let mut damage = atk;
                if monster.is_boss {
                    damage *= 1.0 + totals.get("p_class_boss") / 100.0;
                }
                let def = monster.def as f64;
                damage *= 1.0 - def / (def + 400.0);
                (damage - monster.soft_def as f64).max(1.0)
            }
            None => atk,
        };

        BuildSummary {
            stats,
            atk,
            matk,
            max_hp,
            max_sp,
            hit,
            flee,
            aspd,
            expected_hit,
        }
    }
}
