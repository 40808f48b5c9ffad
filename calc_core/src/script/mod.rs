//! Bonus script grammar and resolution

mod grammar;
mod resolver;

pub use grammar::{autocast_skill_name, AutocastEntry, EncodedValue, AUTOCAST_PREFIX};
pub use resolver::{resolve, EvalContext};
