use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broad ingredient category.
///
/// Declaration order is the shopping-list sort order; the serde labels match
/// the Japanese category strings the surrounding system stores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum IngredientCategory {
    #[serde(rename = "野菜")]
    Vegetable,
    #[serde(rename = "肉・魚")]
    MeatFish,
    #[serde(rename = "調味料")]
    Seasoning,
    #[serde(rename = "その他")]
    Other,
}

impl IngredientCategory {
    /// Display label, identical to the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Vegetable => "野菜",
            IngredientCategory::MeatFish => "肉・魚",
            IngredientCategory::Seasoning => "調味料",
            IngredientCategory::Other => "その他",
        }
    }

    /// Parse a wire label, falling back to `Other` for unknown strings.
    pub fn from_label(label: &str) -> Self {
        match label {
            "野菜" => IngredientCategory::Vegetable,
            "肉・魚" => IngredientCategory::MeatFish,
            "調味料" => IngredientCategory::Seasoning,
            _ => IngredientCategory::Other,
        }
    }
}

/// A concrete ingredient attached to a scheduled recipe.
///
/// Amounts are already scaled for the household; `inventory_ref` carries the
/// id of the pantry item the reconciler matched, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_ref: Option<String>,
}

impl Ingredient {
    pub fn new(name: &str, amount: f64, unit: &str, category: IngredientCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            category,
            inventory_ref: None,
        }
    }
}
