use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{InventoryItem, MenuPlan};

/// Load an inventory snapshot from a JSON file.
///
/// Deduplicates by item id (last occurrence wins).
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<InventoryItem> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, InventoryItem> = HashMap::new();
    for item in items {
        seen.insert(item.id.clone(), item);
    }

    Ok(seen.into_values().collect())
}

/// Save an inventory snapshot to a JSON file.
pub fn save_inventory<P: AsRef<Path>>(path: P, items: &[InventoryItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a saved menu plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MenuPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a menu plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MenuPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
