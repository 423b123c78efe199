//! Wire schema of the remote menu-generation service.
//!
//! Field names and shapes are a fixed external contract; do not rename.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::{
    weekday_label, DishCategory, Ingredient, IngredientCategory, InventoryItem, Recipe,
};
use crate::planner::{CuisineDistribution, PlanRequest, PlannerConfig};

/// Default meal budget sent with every request, in yen.
pub const DEFAULT_DAILY_BUDGET_JPY: u32 = 1500;

/// Days-to-expiration threshold for the `near_expiry` hint.
const NEAR_EXPIRY_DAYS: i64 = 3;

/// Quantity threshold for the `overstock` hint.
const OVERSTOCK_AMOUNT: f64 = 500.0;

/// Stock-usage priority attached to each inventory line of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityHint {
    NearExpiry,
    Overstock,
    Normal,
}

impl PriorityHint {
    /// Near-expiry wins over overstock; everything else is normal.
    pub fn for_item(item: &InventoryItem, today: NaiveDate) -> Self {
        if (item.expiration_date - today).num_days() <= NEAR_EXPIRY_DAYS {
            PriorityHint::NearExpiry
        } else if item.amount > OVERSTOCK_AMOUNT {
            PriorityHint::Overstock
        } else {
            PriorityHint::Normal
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestInventoryItem {
    #[serde(rename = "invId")]
    pub inv_id: String,
    pub name: String,
    pub qty: f64,
    pub unit: String,
    pub category: String,
    pub expires_at: String,
    pub priority_hint: PriorityHint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryStaple {
    pub name: String,
    pub unit: String,
}

/// The staples every household is assumed to keep on hand.
pub fn pantry_staples() -> Vec<PantryStaple> {
    [
        ("醤油", "ml"),
        ("塩", "g"),
        ("味噌", "g"),
        ("みりん", "ml"),
        ("砂糖", "g"),
        ("ごま油", "ml"),
        ("オリーブオイル", "ml"),
        ("バター", "g"),
        ("コンソメ", "g"),
        ("だし汁", "ml"),
    ]
    .into_iter()
    .map(|(name, unit)| PantryStaple {
        name: name.to_string(),
        unit: unit.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGenerationRequest {
    pub week_start_date: String,
    pub days: u32,
    pub people: u32,
    pub diet_mode: bool,
    pub budget_per_day_jpy: u32,
    pub time_limit_per_day_min: u32,
    pub preferred_genres: Vec<String>,
    pub avoid_genres: Vec<String>,
    pub allergies: Vec<String>,
    pub dislikes: Vec<String>,
    pub must_use_ingredients: Vec<String>,
    pub inventory: Vec<RequestInventoryItem>,
    pub pantry: Vec<PantryStaple>,
    pub busy_dates: Vec<String>,
    pub max_cooking_time: u32,
    pub cuisine_distribution: CuisineDistribution,
}

/// Allergy markers recognized in the free-text preference string.
/// (marker spellings, extracted allergen)
const ALLERGY_MARKERS: [(&str, &str, &str); 5] = [
    ("卵アレルギー", "卵ng", "卵"),
    ("乳製品アレルギー", "乳製品ng", "乳製品"),
    ("小麦アレルギー", "小麦ng", "小麦"),
    ("そばアレルギー", "そばng", "そば"),
    ("えびアレルギー", "えびng", "えび"),
];

/// Dislike markers recognized in the free-text preference string.
const DISLIKE_MARKERS: [(&str, &str, &str); 3] = [
    ("魚嫌い", "魚ng", "魚"),
    ("野菜嫌い", "野菜ng", "野菜"),
    ("辛いもの嫌い", "辛いものng", "辛い料理"),
];

/// Mine allergies and dislikes out of free-text preferences.
///
/// A keyword scan, not language understanding; only the marker spellings
/// above are recognized.
pub fn extract_constraints(preferences: &str) -> (Vec<String>, Vec<String>) {
    let prefs = preferences.to_lowercase();

    let allergies = ALLERGY_MARKERS
        .iter()
        .filter(|(a, b, _)| prefs.contains(a) || prefs.contains(b))
        .map(|(_, _, term)| term.to_string())
        .collect();

    let dislikes = DISLIKE_MARKERS
        .iter()
        .filter(|(a, b, _)| prefs.contains(a) || prefs.contains(b))
        .map(|(_, _, term)| term.to_string())
        .collect();

    (allergies, dislikes)
}

/// Build the remote request from planner inputs and the live inventory.
pub fn build_request(
    request: &PlanRequest,
    inventory: &[InventoryItem],
    today: NaiveDate,
    config: &PlannerConfig,
) -> MenuGenerationRequest {
    let days = request.day_count();
    let daily_limit = request.max_cooking_time.unwrap_or(config.daily_time_limit);
    let (allergies, dislikes) = extract_constraints(&request.preferences);

    MenuGenerationRequest {
        week_start_date: request.start_date.format("%Y-%m-%d").to_string(),
        days,
        people: request.household_size,
        diet_mode: request.diet_mode,
        budget_per_day_jpy: DEFAULT_DAILY_BUDGET_JPY,
        time_limit_per_day_min: daily_limit,
        preferred_genres: vec!["和食".to_string(), "洋食".to_string(), "中華".to_string()],
        avoid_genres: Vec::new(),
        allergies,
        dislikes,
        must_use_ingredients: request.must_use_ingredients.clone(),
        inventory: inventory
            .iter()
            .map(|item| RequestInventoryItem {
                inv_id: item.id.clone(),
                name: item.name.clone(),
                qty: item.amount,
                unit: item.unit.clone(),
                category: item.category.label().to_string(),
                expires_at: item.expiration_date.format("%Y-%m-%d").to_string(),
                priority_hint: PriorityHint::for_item(item, today),
            })
            .collect(),
        pantry: pantry_staples(),
        busy_dates: request
            .busy_dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect(),
        max_cooking_time: config.busy_time_limit.min(daily_limit),
        cuisine_distribution: request
            .cuisine_distribution
            .unwrap_or_else(|| CuisineDistribution::default_for(days)),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteIngredient {
    pub id: String,
    pub name: String,
    pub qty: f64,
    pub unit: String,
    pub category: String,
    #[serde(rename = "invId", default)]
    pub inv_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteDish {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub time: u32,
    pub difficulty: u8,
    pub ingredients: Vec<RemoteIngredient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyMenu {
    pub date: String,
    pub main: RemoteDish,
    #[serde(default)]
    pub side: Option<RemoteDish>,
    #[serde(default)]
    pub soup: Option<RemoteDish>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuGenerationResponse {
    pub week_start_date: String,
    pub menus: Vec<DailyMenu>,
    #[serde(default)]
    pub notes: Vec<String>,
}

fn convert_dish(dish: &RemoteDish, category: DishCategory, date: NaiveDate) -> Recipe {
    Recipe {
        id: dish.id.clone(),
        name: dish.name.clone(),
        cooking_time_minutes: dish.time,
        difficulty: dish.difficulty,
        ingredients: dish
            .ingredients
            .iter()
            .map(|ing| Ingredient {
                id: ing.id.clone(),
                name: ing.name.clone(),
                amount: ing.qty,
                unit: ing.unit.clone(),
                category: IngredientCategory::from_label(&ing.category),
                inventory_ref: ing.inv_id.clone(),
            })
            .collect(),
        category,
        day: weekday_label(date).to_string(),
        scheduled_date: date,
    }
}

/// Flatten a remote response into the scheduled-recipe shape the rest of
/// the system consumes.
pub fn convert_response(response: &MenuGenerationResponse) -> Result<Vec<Recipe>> {
    let mut recipes = Vec::new();

    for menu in &response.menus {
        let date = NaiveDate::parse_from_str(&menu.date, "%Y-%m-%d")
            .map_err(|e| MenuError::ResponseParse(format!("bad menu date {}: {}", menu.date, e)))?;

        recipes.push(convert_dish(&menu.main, DishCategory::Main, date));
        if let Some(side) = &menu.side {
            recipes.push(convert_dish(side, DishCategory::Side, date));
        }
        if let Some(soup) = &menu.soup {
            recipes.push(convert_dish(soup, DishCategory::Soup, date));
        }
    }

    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stock(amount: f64, expires: NaiveDate) -> InventoryItem {
        InventoryItem {
            id: "inv-1".to_string(),
            name: "牛乳".to_string(),
            amount,
            unit: "ml".to_string(),
            category: IngredientCategory::Other,
            expiration_date: expires,
            added_date: date(2025, 6, 1),
        }
    }

    #[test]
    fn test_priority_hints() {
        let today = date(2025, 6, 10);

        // Three days out still counts as near expiry
        let hint = PriorityHint::for_item(&stock(100.0, date(2025, 6, 13)), today);
        assert_eq!(hint, PriorityHint::NearExpiry);

        let hint = PriorityHint::for_item(&stock(100.0, date(2025, 6, 14)), today);
        assert_eq!(hint, PriorityHint::Normal);

        let hint = PriorityHint::for_item(&stock(600.0, date(2025, 7, 1)), today);
        assert_eq!(hint, PriorityHint::Overstock);

        // Near expiry wins over overstock
        let hint = PriorityHint::for_item(&stock(600.0, date(2025, 6, 11)), today);
        assert_eq!(hint, PriorityHint::NearExpiry);
    }

    #[test]
    fn test_extract_constraints() {
        let (allergies, dislikes) =
            extract_constraints("卵アレルギーがあります。魚嫌いの子がいます。");
        assert_eq!(allergies, ["卵"]);
        assert_eq!(dislikes, ["魚"]);

        // NG spellings are recognized case-insensitively
        let (allergies, dislikes) = extract_constraints("えびNG、辛いものNG");
        assert_eq!(allergies, ["えび"]);
        assert_eq!(dislikes, ["辛い料理"]);

        let (allergies, dislikes) = extract_constraints("特になし");
        assert!(allergies.is_empty());
        assert!(dislikes.is_empty());
    }

    #[test]
    fn test_request_wire_shape() {
        let mut request = PlanRequest::new(3, date(2025, 6, 2), date(2025, 6, 4));
        request.busy_dates = vec![date(2025, 6, 3)];
        let inventory = vec![stock(600.0, date(2025, 7, 1))];

        let remote = build_request(&request, &inventory, date(2025, 6, 1), &PlannerConfig::default());
        let value = serde_json::to_value(&remote).unwrap();

        assert_eq!(value["week_start_date"], "2025-06-02");
        assert_eq!(value["days"], 3);
        assert_eq!(value["people"], 3);
        assert_eq!(value["budget_per_day_jpy"], 1500);
        assert_eq!(value["inventory"][0]["invId"], "inv-1");
        assert_eq!(value["inventory"][0]["priority_hint"], "overstock");
        assert_eq!(value["inventory"][0]["expires_at"], "2025-07-01");
        assert_eq!(value["pantry"].as_array().unwrap().len(), 10);
        assert_eq!(value["busy_dates"][0], "2025-06-03");
        assert_eq!(value["cuisine_distribution"]["japanese"], 2);
    }

    fn sample_response_json() -> &'static str {
        r#"{
            "week_start_date": "2025-06-02",
            "menus": [
                {
                    "date": "2025-06-02",
                    "main": {
                        "id": "r-1",
                        "name": "鶏の照り焼き",
                        "genre": "和食",
                        "time": 25,
                        "difficulty": 2,
                        "ingredients": [
                            {"id": "i-1", "name": "鶏もも肉", "qty": 300, "unit": "g", "category": "肉・魚", "invId": "inv-9"}
                        ]
                    },
                    "side": null,
                    "soup": {
                        "id": "r-2",
                        "name": "味噌汁",
                        "genre": "和食",
                        "time": 10,
                        "difficulty": 1,
                        "ingredients": [
                            {"id": "i-2", "name": "味噌", "qty": 45, "unit": "g", "category": "調味料", "invId": null}
                        ]
                    }
                }
            ],
            "notes": ["在庫を活用: 鶏もも肉"]
        }"#
    }

    #[test]
    fn test_convert_response() {
        let response: MenuGenerationResponse =
            serde_json::from_str(sample_response_json()).unwrap();
        let recipes = convert_response(&response).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].category, DishCategory::Main);
        assert_eq!(recipes[0].day, "月曜日");
        assert_eq!(recipes[0].scheduled_date, date(2025, 6, 2));
        assert_eq!(
            recipes[0].ingredients[0].inventory_ref.as_deref(),
            Some("inv-9")
        );
        assert_eq!(
            recipes[0].ingredients[0].category,
            IngredientCategory::MeatFish
        );

        assert_eq!(recipes[1].category, DishCategory::Soup);
        assert!(recipes[1].ingredients[0].inventory_ref.is_none());
    }

    #[test]
    fn test_convert_response_rejects_bad_date() {
        let mut response: MenuGenerationResponse =
            serde_json::from_str(sample_response_json()).unwrap();
        response.menus[0].date = "next monday".to_string();

        let result = convert_response(&response);
        assert!(matches!(result, Err(MenuError::ResponseParse(_))));
    }
}
