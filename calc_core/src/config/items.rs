//! Master item table loading
//!
//! The master table ships as one JSON object keyed by item id. Script
//! content is not validated at load time - bad entries degrade to
//! zero during collection, so a huge externally maintained corpus can
//! load even when imperfect.

use super::ConfigError;
use crate::item::ItemTable;
use std::fs;
use std::path::Path;

/// Load the master item table from a JSON file
pub fn load_item_table(path: &Path) -> Result<ItemTable, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_item_table(&content)
}

/// Parse the master item table from a JSON string
pub fn parse_item_table(content: &str) -> Result<ItemTable, ConfigError> {
    let table: ItemTable = serde_json::from_str(content)?;
    Ok(table)
}
