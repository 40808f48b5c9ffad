//! Bonus script grammar - parsing encoded value strings
//!
//! Each entry in an item's bonus script is a compact string encoding
//! one contribution. A single parse step classifies it into an
//! [`EncodedValue`] variant; resolution never re-inspects the text.
//!
//! Recognized forms, tried in order:
//! - `EQUIP[Name]===N` - set bonus, active while `Name` is equipped
//! - `SUM[stat==T]---N` - `floor(stat / T) * N`
//! - `R---N` - refine scaling, `floor(refine / R) * N`
//! - `R===N` - refine threshold, `N` once refine reaches `R`
//! - bare number - unconditional flat value
//!
//! Anything else becomes [`EncodedValue::Unrecognized`], which
//! contributes zero but stays visible for diagnostics. Bad game data
//! must never abort an evaluation pass.

use crate::types::BaseStat;
use serde::{Deserialize, Serialize};

/// A parsed bonus script value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EncodedValue {
    /// Unconditional flat value
    Plain(f64),
    /// `value` applies once the owning slot's refine reaches `min_refine`
    RefineThreshold { min_refine: u32, value: f64 },
    /// `floor(refine / per_refine) * value`
    RefineScaling { per_refine: u32, value: f64 },
    /// `value` applies while an item named `item_name` is equipped anywhere
    EquipConditional { item_name: String, value: f64 },
    /// `floor(base_stat / per_points) * value`
    StatScaling {
        stat: BaseStat,
        per_points: u32,
        value: f64,
    },
    /// Unparseable entry, kept for diagnostics
    Unrecognized(String),
}

impl EncodedValue {
    /// Parse one encoded value string
    ///
    /// Never fails; unknown or malformed input becomes `Unrecognized`.
    pub fn parse(raw: &str) -> EncodedValue {
        let s = raw.trim();

        if let Some(v) = parse_equip_conditional(s) {
            return v;
        }
        if let Some(v) = parse_stat_scaling(s) {
            return v;
        }
        if let Some(v) = parse_refine_scaling(s) {
            return v;
        }
        if let Some(v) = parse_refine_threshold(s) {
            return v;
        }
        if let Ok(n) = s.parse::<f64>() {
            return EncodedValue::Plain(n);
        }

        EncodedValue::Unrecognized(raw.to_string())
    }
}

/// `EQUIP[Name]===N`
fn parse_equip_conditional(s: &str) -> Option<EncodedValue> {
    let inner = s.strip_prefix("EQUIP[")?;
    let (name, value) = inner.rsplit_once("]===")?;
    let value = value.trim().parse::<f64>().ok()?;
    if name.is_empty() {
        return None;
    }
    Some(EncodedValue::EquipConditional {
        item_name: name.to_string(),
        value,
    })
}

/// `SUM[stat==T]---N`
fn parse_stat_scaling(s: &str) -> Option<EncodedValue> {
    let inner = s.strip_prefix("SUM[")?;
    let (stat_spec, value) = inner.rsplit_once("]---")?;
    let (stat_name, per_points) = stat_spec.split_once("==")?;
    let stat = BaseStat::from_script_name(stat_name.trim())?;
    let per_points = per_points.trim().parse::<u32>().ok()?;
    let value = value.trim().parse::<f64>().ok()?;
    Some(EncodedValue::StatScaling {
        stat,
        per_points,
        value,
    })
}

/// `R---N`
fn parse_refine_scaling(s: &str) -> Option<EncodedValue> {
    let (per_refine, value) = s.split_once("---")?;
    let per_refine = per_refine.trim().parse::<u32>().ok()?;
    let value = value.trim().parse::<f64>().ok()?;
    Some(EncodedValue::RefineScaling { per_refine, value })
}

/// `R===N`
fn parse_refine_threshold(s: &str) -> Option<EncodedValue> {
    let (min_refine, value) = s.split_once("===")?;
    let min_refine = min_refine.trim().parse::<u32>().ok()?;
    let value = value.trim().parse::<f64>().ok()?;
    Some(EncodedValue::RefineThreshold { min_refine, value })
}

/// Key prefix marking an autocast registration rather than a numeric bonus
pub const AUTOCAST_PREFIX: &str = "autocast__";

/// A proc skill granted by an item, parsed from an `autocast__<Skill>` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocastEntry {
    pub skill_name: String,
    pub skill_level: u32,
    pub chance_percent: f64,
    pub trigger: String,
}

impl AutocastEntry {
    /// Parse an autocast descriptor `level,chance,trigger`
    ///
    /// Best effort: missing or unparseable level/chance default to 0,
    /// a missing trigger to the empty string. The entry is always
    /// produced so a sloppy descriptor still shows up downstream.
    pub fn parse(skill_name: &str, raw: &str) -> AutocastEntry {
        let mut parts = raw.splitn(3, ',');
        let skill_level = parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let chance_percent = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let trigger = parts.next().map(|p| p.trim().to_string()).unwrap_or_default();
        AutocastEntry {
            skill_name: skill_name.to_string(),
            skill_level,
            chance_percent,
            trigger,
        }
    }
}

/// Split an `autocast__<Skill>` key into its skill name, if it is one
pub fn autocast_skill_name(key: &str) -> Option<&str> {
    key.strip_prefix(AUTOCAST_PREFIX).filter(|name| !name.is_empty())
}
