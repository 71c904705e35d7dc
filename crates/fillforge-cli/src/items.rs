//! Item file loading.
//!
//! `.json` files hold an array of `{"id": ..., "amount": ...}` objects.
//! `.toml` files hold `[[items]]` tables with the same keys.

use std::fs;
use std::path::Path;

use fillforge::{FillForgeError, Item, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ItemTable {
    #[serde(default)]
    items: Vec<Item<f64>>,
}

/// Reads items from a JSON or TOML file, chosen by extension.
pub fn load_items(path: &Path) -> Result<Vec<Item<f64>>> {
    let contents = fs::read_to_string(path)?;
    match extension(path).as_deref() {
        Some("json") => parse_json(&contents),
        Some("toml") => parse_toml(&contents),
        other => Err(FillForgeError::Parse(format!(
            "unsupported item file extension {:?} for {}",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}

pub fn parse_json(contents: &str) -> Result<Vec<Item<f64>>> {
    serde_json::from_str(contents).map_err(|e| FillForgeError::Parse(e.to_string()))
}

pub fn parse_toml(contents: &str) -> Result<Vec<Item<f64>>> {
    let table: ItemTable =
        toml::from_str(contents).map_err(|e| FillForgeError::Parse(e.to_string()))?;
    Ok(table.items)
}

pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
