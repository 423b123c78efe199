use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use menu_maker_rs::catalog::RecipeCatalog;
use menu_maker_rs::models::{DishCategory, IngredientCategory, InventoryItem};
use menu_maker_rs::planner::{
    scaled_amount, CuisineDistribution, MenuPlanner, PlanRequest, PlannerConfig,
};
use menu_maker_rs::shopping;
use menu_maker_rs::MenuPlan;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mains_only() -> PlannerConfig {
    PlannerConfig {
        side_probability: 0.0,
        soup_probability: 0.0,
        ..PlannerConfig::default()
    }
}

/// Base quantity of an ingredient in the builtin catalog.
fn base_qty(catalog: &RecipeCatalog, recipe_name: &str, ingredient_name: &str) -> f64 {
    catalog
        .templates()
        .iter()
        .find(|t| t.name == recipe_name)
        .and_then(|t| t.ingredients.iter().find(|i| i.name == ingredient_name))
        .map(|i| i.base_qty)
        .unwrap_or_else(|| panic!("{} / {} not in catalog", recipe_name, ingredient_name))
}

#[test]
fn test_three_day_scenario_with_empty_inventory() {
    let catalog = RecipeCatalog::builtin();
    let planner = MenuPlanner::new(catalog.clone());

    let mut request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 4));
    request.cuisine_distribution = Some(CuisineDistribution {
        japanese: 1,
        western: 1,
        chinese: 1,
    });

    let mut rng = StdRng::seed_from_u64(11);
    let recipes = planner
        .generate_at(date(2025, 6, 1), &request, &[], &mut rng)
        .unwrap();

    // One main per day, dates cover the range exactly
    let mains: Vec<_> = recipes
        .iter()
        .filter(|r| r.category == DishCategory::Main)
        .collect();
    assert_eq!(mains.len(), 3);
    let main_dates: HashSet<NaiveDate> = mains.iter().map(|r| r.scheduled_date).collect();
    assert_eq!(main_dates.len(), 3);

    // Household of 4 is the reference size, so amounts equal base quantities
    for recipe in &recipes {
        for ingredient in &recipe.ingredients {
            assert!(ingredient.amount > 0.0);
            assert_eq!(
                ingredient.amount,
                base_qty(&catalog, &recipe.name, &ingredient.name),
                "{} / {}",
                recipe.name,
                ingredient.name
            );
            // Nothing can be matched against an empty pantry
            assert!(ingredient.inventory_ref.is_none());
        }
    }

    // With no stock, every shopping line is a pure shortage
    let plan = MenuPlan::new(recipes, date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 4));
    let list = shopping::aggregate(&plan, &[]);
    assert!(!list.is_empty());
    for item in &list {
        let breakdown_sum: f64 = item.breakdown.iter().map(|b| b.amount).sum();
        assert!((item.needed - breakdown_sum).abs() < 1e-9);
        assert_eq!(item.in_stock, 0.0);
        assert_eq!(item.shortage(), item.needed);
    }
}

#[test]
fn test_day_coverage_over_a_week() {
    let planner = MenuPlanner::new(RecipeCatalog::builtin());
    let request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 8));

    let mut rng = StdRng::seed_from_u64(3);
    let recipes = planner
        .generate_at(date(2025, 6, 1), &request, &[], &mut rng)
        .unwrap();

    for offset in 0..7 {
        let day = date(2025, 6, 2) + Duration::days(offset);
        let on_day: Vec<_> = recipes.iter().filter(|r| r.scheduled_date == day).collect();
        assert!(!on_day.is_empty(), "no dishes on {}", day);
        assert_eq!(
            on_day
                .iter()
                .filter(|r| r.category == DishCategory::Main)
                .count(),
            1,
            "exactly one main on {}",
            day
        );
    }
}

#[test]
fn test_scaling_law_against_catalog() {
    let catalog = RecipeCatalog::builtin();
    let planner = MenuPlanner::with_config(catalog.clone(), mains_only());

    for household in [1u32, 4, 7] {
        let mut request = PlanRequest::new(household, date(2025, 6, 2), date(2025, 6, 2));
        request.cuisine_distribution = Some(CuisineDistribution {
            japanese: 1,
            western: 0,
            chinese: 0,
        });

        let mut rng = StdRng::seed_from_u64(5);
        let recipes = planner
            .generate_at(date(2025, 6, 1), &request, &[], &mut rng)
            .unwrap();

        for ingredient in &recipes[0].ingredients {
            let base = base_qty(&catalog, &recipes[0].name, &ingredient.name);
            assert_eq!(ingredient.amount, scaled_amount(base, household));
            assert_eq!(
                ingredient.amount,
                (base * household as f64 / 4.0).ceil()
            );
        }
    }
}

#[test]
fn test_matched_stock_reduces_shortage() {
    // Fixture catalog with a single dish keeps the selection deterministic
    let catalog = RecipeCatalog::builtin();
    let teriyaki = catalog
        .templates()
        .iter()
        .find(|t| t.name == "鶏の照り焼き")
        .unwrap()
        .clone();
    let planner = MenuPlanner::with_config(RecipeCatalog::new(vec![teriyaki]), mains_only());

    let inventory = vec![InventoryItem {
        id: "inv-chicken".to_string(),
        name: "鶏もも肉".to_string(),
        amount: 500.0,
        unit: "g".to_string(),
        category: IngredientCategory::MeatFish,
        expiration_date: date(2025, 6, 20),
        added_date: date(2025, 6, 1),
    }];

    let mut request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 2));
    request.cuisine_distribution = Some(CuisineDistribution {
        japanese: 1,
        western: 0,
        chinese: 0,
    });

    let mut rng = StdRng::seed_from_u64(1);
    let recipes = planner
        .generate_at(date(2025, 6, 1), &request, &inventory, &mut rng)
        .unwrap();

    let chicken = recipes[0]
        .ingredients
        .iter()
        .find(|i| i.name == "鶏もも肉")
        .unwrap();
    assert_eq!(chicken.amount, 300.0);
    assert_eq!(chicken.inventory_ref.as_deref(), Some("inv-chicken"));

    // The shopping list reads the real inventory: 300 needed, 500 on hand
    let plan = MenuPlan::new(recipes, date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 2));
    let list = shopping::aggregate(&plan, &inventory);

    let chicken_line = list
        .iter()
        .find(|i| i.ingredient.name == "鶏もも肉")
        .unwrap();
    assert_eq!(chicken_line.in_stock, 500.0);
    assert_eq!(chicken_line.shortage(), 0.0);

    // Unstocked seasoning remains a full shortage
    let soy_line = list.iter().find(|i| i.ingredient.name == "醤油").unwrap();
    assert_eq!(soy_line.in_stock, 0.0);
    assert_eq!(soy_line.shortage(), soy_line.needed);
}

#[test]
fn test_explicit_distribution_counts_mains() {
    let planner = MenuPlanner::with_config(RecipeCatalog::builtin(), mains_only());
    let mut request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 6));
    request.cuisine_distribution = Some(CuisineDistribution {
        japanese: 2,
        western: 1,
        chinese: 2,
    });

    let mut rng = StdRng::seed_from_u64(9);
    let recipes = planner
        .generate_at(date(2025, 6, 1), &request, &[], &mut rng)
        .unwrap();
    assert_eq!(recipes.len(), 5);

    let catalog = RecipeCatalog::builtin();
    let mut counts = (0u32, 0u32, 0u32);
    for recipe in &recipes {
        let template = catalog
            .templates()
            .iter()
            .find(|t| t.name == recipe.name)
            .unwrap();
        match template.cuisine {
            menu_maker_rs::models::Cuisine::Japanese => counts.0 += 1,
            menu_maker_rs::models::Cuisine::Western => counts.1 += 1,
            menu_maker_rs::models::Cuisine::Chinese => counts.2 += 1,
        }
    }
    assert_eq!(counts, (2, 1, 2));
}
