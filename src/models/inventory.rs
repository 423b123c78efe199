use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ingredient::IngredientCategory;

/// A pantry item owned by the surrounding system.
///
/// The planner only reads these; real deductions happen externally once a
/// day's cooking is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: IngredientCategory,
    pub expiration_date: NaiveDate,
    pub added_date: NaiveDate,
}

impl InventoryItem {
    /// Whether the item is still eligible for consumption matching.
    pub fn is_usable_on(&self, today: NaiveDate) -> bool {
        self.expiration_date > today
    }

    /// Exact name + unit match, the only key the reconciler accepts.
    pub fn matches(&self, name: &str, unit: &str) -> bool {
        self.name == name && self.unit == unit
    }
}
