//! Script value resolution - turning a parsed value into a number
//!
//! Resolution is a pure function over [`EncodedValue`] and the
//! evaluation context. All scaling uses integer floor division and
//! never goes below zero; divisors of zero resolve to zero instead of
//! faulting.

use crate::script::grammar::EncodedValue;
use crate::types::BaseStats;
use std::collections::HashSet;

/// Evaluation context for one item's script entries
///
/// `refine` is the owning slot's refine level (0 for non-refinable
/// slots). `equipped_names` holds the display names of every equipped
/// item on the build, including the item currently being evaluated -
/// a set piece referencing itself is legal and resolves true.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub refine: u32,
    pub stats: &'a BaseStats,
    pub equipped_names: &'a HashSet<String>,
}

/// Resolve one parsed value to its numeric contribution
pub fn resolve(value: &EncodedValue, ctx: &EvalContext) -> f64 {
    match value {
        EncodedValue::Plain(n) => *n,
        EncodedValue::RefineThreshold { min_refine, value } => {
            if ctx.refine >= *min_refine {
                *value
            } else {
                0.0
            }
        }
        EncodedValue::RefineScaling { per_refine, value } => {
            if *per_refine == 0 {
                return 0.0;
            }
            (ctx.refine / per_refine) as f64 * value
        }
        EncodedValue::EquipConditional { item_name, value } => {
            if ctx.equipped_names.contains(item_name) {
                *value
            } else {
                0.0
            }
        }
        EncodedValue::StatScaling {
            stat,
            per_points,
            value,
        } => {
            if *per_points == 0 {
                return 0.0;
            }
            (ctx.stats.get(*stat) / per_points) as f64 * value
        }
        EncodedValue::Unrecognized(_) => 0.0,
    }
}
