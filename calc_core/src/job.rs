//! Job/class definitions
//!
//! The engine only needs the class identifier, its stat bonuses and
//! its skill list per evaluation; deriving full stat spreads from
//! level and job progression stays with the caller.

use crate::types::BaseStats;
use serde::{Deserialize, Serialize};

/// A character class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    /// Class stat bonuses, added on top of the build's raw stats
    #[serde(default)]
    pub bonus: BaseStats,
    /// Offensive skill names this class can use
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Job {
    /// A classless placeholder with no bonuses
    pub fn novice() -> Self {
        Job {
            id: "novice".to_string(),
            name: "Novice".to_string(),
            bonus: BaseStats::default(),
            skills: Vec::new(),
        }
    }
}
