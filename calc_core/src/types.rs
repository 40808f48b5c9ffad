//! Core types shared across the calculator

use serde::{Deserialize, Serialize};

/// Equipment slot on a build
///
/// Card slots are sub-slots of their parent equipment piece; shadow
/// gear, pet and costume are separate slot families. Only a subset of
/// slots carries a refine level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    Weapon,
    Shield,
    Armor,
    Garment,
    Boots,
    HeadUpper,
    HeadMiddle,
    HeadLower,
    AccLeft,
    AccRight,
    WeaponCard,
    ShieldCard,
    ArmorCard,
    GarmentCard,
    BootCard,
    HeadCard,
    AccLeftCard,
    AccRightCard,
    Pet,
    Costume,
    ShadowWeapon,
    ShadowArmor,
    ShadowShield,
    ShadowBoot,
    ShadowEarring,
    ShadowPendant,
}

impl EquipSlot {
    /// All slots, in display order
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Weapon,
            EquipSlot::Shield,
            EquipSlot::Armor,
            EquipSlot::Garment,
            EquipSlot::Boots,
            EquipSlot::HeadUpper,
            EquipSlot::HeadMiddle,
            EquipSlot::HeadLower,
            EquipSlot::AccLeft,
            EquipSlot::AccRight,
            EquipSlot::WeaponCard,
            EquipSlot::ShieldCard,
            EquipSlot::ArmorCard,
            EquipSlot::GarmentCard,
            EquipSlot::BootCard,
            EquipSlot::HeadCard,
            EquipSlot::AccLeftCard,
            EquipSlot::AccRightCard,
            EquipSlot::Pet,
            EquipSlot::Costume,
            EquipSlot::ShadowWeapon,
            EquipSlot::ShadowArmor,
            EquipSlot::ShadowShield,
            EquipSlot::ShadowBoot,
            EquipSlot::ShadowEarring,
            EquipSlot::ShadowPendant,
        ]
    }

    /// Whether this slot carries a refine level
    ///
    /// Cards, accessories, pet, costume and shadow gear never refine;
    /// their bonuses always evaluate at refine 0.
    pub fn is_refinable(self) -> bool {
        matches!(
            self,
            EquipSlot::Weapon
                | EquipSlot::Shield
                | EquipSlot::Armor
                | EquipSlot::Garment
                | EquipSlot::Boots
                | EquipSlot::HeadUpper
        )
    }
}

/// One of the six base stats a script can scale on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseStat {
    Str,
    Agi,
    Vit,
    Int,
    Dex,
    Luk,
}

impl BaseStat {
    /// Parse the lowercase name used inside `SUM[..]` scripts
    pub fn from_script_name(name: &str) -> Option<BaseStat> {
        match name {
            "str" => Some(BaseStat::Str),
            "agi" => Some(BaseStat::Agi),
            "vit" => Some(BaseStat::Vit),
            "int" => Some(BaseStat::Int),
            "dex" => Some(BaseStat::Dex),
            "luk" => Some(BaseStat::Luk),
            _ => None,
        }
    }
}

/// Resolved base stat values for one evaluation pass
///
/// Deriving these from level/job/bonuses is the caller's concern; the
/// engine only reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "str")]
    pub strength: u32,
    #[serde(rename = "agi")]
    pub agility: u32,
    #[serde(rename = "vit")]
    pub vitality: u32,
    #[serde(rename = "int")]
    pub intelligence: u32,
    #[serde(rename = "dex")]
    pub dexterity: u32,
    #[serde(rename = "luk")]
    pub luck: u32,
}

impl BaseStats {
    pub fn new(strength: u32, agility: u32, vitality: u32, intelligence: u32, dexterity: u32, luck: u32) -> Self {
        BaseStats {
            strength,
            agility,
            vitality,
            intelligence,
            dexterity,
            luck,
        }
    }

    /// Same value in every stat, convenient for tests and defaults
    pub fn uniform(value: u32) -> Self {
        BaseStats::new(value, value, value, value, value, value)
    }

    /// Look up a stat by its enum tag
    pub fn get(&self, stat: BaseStat) -> u32 {
        match stat {
            BaseStat::Str => self.strength,
            BaseStat::Agi => self.agility,
            BaseStat::Vit => self.vitality,
            BaseStat::Int => self.intelligence,
            BaseStat::Dex => self.dexterity,
            BaseStat::Luk => self.luck,
        }
    }

    /// Component-wise sum, used to fold job bonuses into raw stats
    pub fn plus(&self, other: &BaseStats) -> BaseStats {
        BaseStats {
            strength: self.strength + other.strength,
            agility: self.agility + other.agility,
            vitality: self.vitality + other.vitality,
            intelligence: self.intelligence + other.intelligence,
            dexterity: self.dexterity + other.dexterity,
            luck: self.luck + other.luck,
        }
    }
}

/// Monster element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Neutral,
    Water,
    Earth,
    Fire,
    Wind,
    Poison,
    Holy,
    Shadow,
    Ghost,
    Undead,
}

/// Monster race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Formless,
    Undead,
    Brute,
    Plant,
    Insect,
    Fish,
    Demon,
    DemiHuman,
    Angel,
    Dragon,
}

/// Monster size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterSize {
    Small,
    Medium,
    Large,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slots_unique() {
        let slots = EquipSlot::all();
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_card_slots_not_refinable() {
        assert!(EquipSlot::Weapon.is_refinable());
        assert!(EquipSlot::HeadUpper.is_refinable());
        assert!(!EquipSlot::WeaponCard.is_refinable());
        assert!(!EquipSlot::AccLeft.is_refinable());
        assert!(!EquipSlot::ShadowWeapon.is_refinable());
        assert!(!EquipSlot::Costume.is_refinable());
    }

    #[test]
    fn test_base_stat_script_names() {
        assert_eq!(BaseStat::from_script_name("int"), Some(BaseStat::Int));
        assert_eq!(BaseStat::from_script_name("luk"), Some(BaseStat::Luk));
        assert_eq!(BaseStat::from_script_name("pow"), None);
        assert_eq!(BaseStat::from_script_name("STR"), None);
    }

    #[test]
    fn test_base_stats_lookup() {
        let stats = BaseStats::new(1, 2, 3, 4, 5, 6);
        assert_eq!(stats.get(BaseStat::Str), 1);
        assert_eq!(stats.get(BaseStat::Dex), 5);
        assert_eq!(stats.get(BaseStat::Luk), 6);
    }
}
