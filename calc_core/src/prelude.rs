//! Prelude module for convenient imports
//!
//! ```rust
//! use calc_core::prelude::*;
//! ```

// Core types
pub use crate::types::{BaseStat, BaseStats, Element, EquipSlot, MonsterSize, Race};

// Data model
pub use crate::build::Build;
pub use crate::item::{Item, ItemTable, ItemType};
pub use crate::job::Job;
pub use crate::monster::Monster;

// Script evaluation
pub use crate::bonus::{BonusCollection, BonusMap};
pub use crate::script::{AutocastEntry, EncodedValue};

// Orchestration
pub use crate::calculator::{BuildSummary, Calculator};
pub use crate::error::CalcError;

// Config
pub use crate::config::default_jobs;
