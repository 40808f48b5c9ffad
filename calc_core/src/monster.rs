//! Target monster record
//!
//! The bonus-aggregation core never reads the monster; it is carried
//! by the orchestrator and consumed by the summary arithmetic.

use crate::types::{Element, MonsterSize, Race};
use serde::{Deserialize, Serialize};

/// A monster/target definition, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub hp: u64,
    /// Hard defense, reduces physical damage multiplicatively
    #[serde(default)]
    pub def: u32,
    /// Hard magic defense
    #[serde(default)]
    pub mdef: u32,
    /// Soft defense, subtracted flat after the hard reduction
    #[serde(default)]
    pub soft_def: u32,
    #[serde(default)]
    pub soft_mdef: u32,
    pub element: Element,
    pub race: Race,
    pub size: MonsterSize,
    #[serde(default)]
    pub is_boss: bool,
}

impl Monster {
    /// A practice dummy: level 1, no defenses, neutral element
    pub fn training_dummy() -> Self {
        Monster {
            id: 0,
            name: "Training Dummy".to_string(),
            level: 1,
            hp: 1_000_000,
            def: 0,
            mdef: 0,
            soft_def: 0,
            soft_mdef: 0,
            element: Element::Neutral,
            race: Race::Formless,
            size: MonsterSize::Medium,
            is_boss: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_json_round() {
        let json = r#"{
            "id": 1002,
            "name": "Poring",
            "level": 1,
            "hp": 50,
            "def": 0,
            "mdef": 0,
            "element": "water",
            "race": "plant",
            "size": "small"
        }"#;
        let monster: Monster = serde_json::from_str(json).unwrap();
        assert_eq!(monster.name, "Poring");
        assert_eq!(monster.element, Element::Water);
        assert!(!monster.is_boss);
        assert_eq!(monster.soft_def, 0);
    }
}
