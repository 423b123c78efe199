use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::models::{InventoryItem, MenuPlan, RecipeBreakdown, ShoppingListItem};

/// Derive a consolidated shopping list from a finalized plan.
///
/// Quantities are grouped by the (name, unit) composite key, so a name
/// appearing with two units becomes two lines instead of a bogus sum.
/// Stock is read from the caller's real inventory, not the planner's
/// working copy. Pure: same plan + same inventory always yields the same
/// list.
pub fn aggregate(plan: &MenuPlan, inventory: &[InventoryItem]) -> Vec<ShoppingListItem> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut groups: HashMap<(String, String), ShoppingListItem> = HashMap::new();

    for recipe in &plan.recipes {
        for ingredient in &recipe.ingredients {
            let key = (ingredient.name.clone(), ingredient.unit.clone());
            let contribution = RecipeBreakdown {
                recipe_name: recipe.name.clone(),
                day: recipe.day.clone(),
                amount: ingredient.amount,
            };

            if let Some(item) = groups.get_mut(&key) {
                item.needed += ingredient.amount;
                item.breakdown.push(contribution);
            } else {
                order.push(key.clone());
                groups.insert(
                    key,
                    ShoppingListItem {
                        ingredient: ingredient.clone(),
                        needed: ingredient.amount,
                        in_stock: 0.0,
                        is_checked: false,
                        breakdown: vec![contribution],
                    },
                );
            }
        }
    }

    let mut list: Vec<ShoppingListItem> = order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .map(|mut item| {
            item.in_stock = inventory
                .iter()
                .find(|inv| inv.matches(&item.ingredient.name, &item.ingredient.unit))
                .map(|inv| inv.amount)
                .unwrap_or(0.0);
            item
        })
        .collect();

    list.sort_by(|a, b| {
        a.ingredient
            .category
            .cmp(&b.ingredient.category)
            .then_with(|| a.ingredient.name.cmp(&b.ingredient.name))
    });

    list
}

/// Write a shopping list to a CSV file.
pub fn write_csv(items: &[ShoppingListItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "name", "unit", "needed", "in_stock", "shortage"])?;

    for item in items {
        wtr.write_record([
            item.ingredient.category.label().to_string(),
            item.ingredient.name.clone(),
            item.ingredient.unit.clone(),
            format!("{:.0}", item.needed),
            format!("{:.0}", item.in_stock),
            format!("{:.0}", item.shortage()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
