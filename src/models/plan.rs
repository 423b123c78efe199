use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ingredient::Ingredient;
use crate::models::recipe::{DishCategory, Recipe};

/// A finalized menu covering a contiguous date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPlan {
    pub recipes: Vec<Recipe>,
    pub generated_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl MenuPlan {
    pub fn new(
        recipes: Vec<Recipe>,
        generated_date: NaiveDate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            recipes,
            generated_date,
            start_date,
            end_date,
        }
    }

    /// Recipes scheduled on a given date, in main/side/soup order.
    pub fn recipes_on(&self, date: NaiveDate) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.scheduled_date == date)
            .collect()
    }

    /// The main dish for a date, if the plan covers it.
    pub fn main_on(&self, date: NaiveDate) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.scheduled_date == date && r.category == DishCategory::Main)
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// One recipe's contribution to an aggregated shopping quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeBreakdown {
    pub recipe_name: String,
    pub day: String,
    pub amount: f64,
}

/// An aggregated shortage line on the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Representative ingredient record for the group (first contributor).
    pub ingredient: Ingredient,
    /// Total required across the plan; equals the breakdown sum.
    pub needed: f64,
    /// Matched stock in the real inventory, 0 if absent.
    pub in_stock: f64,
    pub is_checked: bool,
    pub breakdown: Vec<RecipeBreakdown>,
}

impl ShoppingListItem {
    /// Quantity still to buy. Never negative.
    pub fn shortage(&self) -> f64 {
        (self.needed - self.in_stock).max(0.0)
    }
}
