use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ingredient::{Ingredient, IngredientCategory};

/// Dish slot within a day's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishCategory {
    Main,
    Side,
    Soup,
}

/// Cuisine genre used to partition the catalog and balance weekly variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Japanese,
    Western,
    Chinese,
}

impl Cuisine {
    pub const ALL: [Cuisine; 3] = [Cuisine::Japanese, Cuisine::Western, Cuisine::Chinese];

    /// Japanese genre label used in the remote contract and display output.
    pub fn genre_label(&self) -> &'static str {
        match self {
            Cuisine::Japanese => "和食",
            Cuisine::Western => "洋食",
            Cuisine::Chinese => "中華",
        }
    }
}

/// Weekday labels, Sunday-first.
const WEEKDAY_LABELS: [&str; 7] = [
    "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
];

/// Japanese weekday label for a date.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Catalog ingredient with its base quantity for a four-person household.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIngredient {
    pub name: String,
    pub base_qty: f64,
    pub unit: String,
    pub category: IngredientCategory,
}

/// Read-only catalog entry. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTemplate {
    pub name: String,
    pub base_time_minutes: u32,
    /// 1 (trivial) to 5 (involved).
    pub difficulty: u8,
    pub cuisine: Cuisine,
    pub category: DishCategory,
    pub ingredients: Vec<TemplateIngredient>,
}

/// A dish scheduled on a concrete date, with household-scaled ingredients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub cooking_time_minutes: u32,
    pub difficulty: u8,
    pub ingredients: Vec<Ingredient>,
    pub category: DishCategory,
    /// Weekday label derived from `scheduled_date`.
    pub day: String,
    pub scheduled_date: NaiveDate,
}

impl Recipe {
    /// Build a scheduled instance from a template and already-scaled
    /// ingredients, assigning a fresh id and the weekday label.
    pub fn scheduled(
        template: &RecipeTemplate,
        ingredients: Vec<Ingredient>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: template.name.clone(),
            cooking_time_minutes: template.base_time_minutes,
            difficulty: template.difficulty,
            ingredients,
            category: template.category,
            day: weekday_label(date).to_string(),
            scheduled_date: date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_label_sunday_first() {
        // 2025-06-01 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(weekday_label(sunday), "日曜日");
        assert_eq!(weekday_label(sunday.succ_opt().unwrap()), "月曜日");

        let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(weekday_label(saturday), "土曜日");
    }

    #[test]
    fn test_genre_labels() {
        assert_eq!(Cuisine::Japanese.genre_label(), "和食");
        assert_eq!(Cuisine::Western.genre_label(), "洋食");
        assert_eq!(Cuisine::Chinese.genre_label(), "中華");
    }

    #[test]
    fn test_scheduled_sets_day_and_id() {
        let template = RecipeTemplate {
            name: "味噌汁".to_string(),
            base_time_minutes: 10,
            difficulty: 1,
            cuisine: Cuisine::Japanese,
            category: DishCategory::Soup,
            ingredients: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        let recipe = Recipe::scheduled(&template, vec![], date);
        assert_eq!(recipe.day, "月曜日");
        assert_eq!(recipe.scheduled_date, date);
        assert_eq!(recipe.category, DishCategory::Soup);
        assert!(!recipe.id.is_empty());
    }

    #[test]
    fn test_cuisine_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Cuisine::Western).unwrap(),
            "\"western\""
        );
        assert_eq!(
            serde_json::to_string(&DishCategory::Main).unwrap(),
            "\"main\""
        );
    }
}
