//! calc_core - equipment bonus-script evaluation engine
//!
//! This library provides:
//! - Script grammar: parsing of encoded bonus value strings
//! - Resolver: pure evaluation of parsed values against a build context
//! - Bonus collector: aggregation across all equipped items
//! - Calculator: the orchestrator tying master tables, job, target and
//!   build together into totals and summary metrics

pub mod bonus;
pub mod build;
pub mod calculator;
pub mod config;
pub mod error;
pub mod item;
pub mod job;
pub mod monster;
pub mod prelude;
pub mod script;
pub mod types;

// Re-export core types for convenience
pub use bonus::{collect, BonusCollection, BonusMap, UnparsedValue};
pub use build::Build;
pub use calculator::{BuildSummary, Calculator};
pub use error::CalcError;
pub use item::{BonusScript, EquippedItem, Item, ItemTable, ItemType};
pub use job::Job;
pub use monster::Monster;
pub use script::{AutocastEntry, EncodedValue, EvalContext};
pub use types::{BaseStat, BaseStats, Element, EquipSlot, MonsterSize, Race};
