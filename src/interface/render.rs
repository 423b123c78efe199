use chrono::Duration;

use crate::models::{DishCategory, MenuPlan, ShoppingListItem};

fn slot_label(category: DishCategory) -> &'static str {
    match category {
        DishCategory::Main => "主菜",
        DishCategory::Side => "副菜",
        DishCategory::Soup => "汁物",
    }
}

/// Display a menu plan day by day.
pub fn display_menu_plan(plan: &MenuPlan) {
    if plan.is_empty() {
        println!("No menu generated.");
        return;
    }

    println!();
    println!("=== Menu Plan ({} – {}) ===", plan.start_date, plan.end_date);

    let span = (plan.end_date - plan.start_date).num_days();
    for offset in 0..=span {
        let date = plan.start_date + Duration::days(offset);
        let recipes = plan.recipes_on(date);
        if recipes.is_empty() {
            continue;
        }

        println!();
        println!("{} ({})", date, recipes[0].day);

        for recipe in recipes {
            let stars = "★".repeat(recipe.difficulty as usize);
            println!(
                "  [{}] {} - {} min {}",
                slot_label(recipe.category),
                recipe.name,
                recipe.cooking_time_minutes,
                stars
            );

            for ingredient in &recipe.ingredients {
                let stocked = if ingredient.inventory_ref.is_some() {
                    "  (在庫あり)"
                } else {
                    ""
                };
                println!(
                    "      {} {:.0}{}{}",
                    ingredient.name, ingredient.amount, ingredient.unit, stocked
                );
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total dishes: {}", plan.recipes.len());
    let stocked = plan
        .recipes
        .iter()
        .flat_map(|r| &r.ingredients)
        .filter(|i| i.inventory_ref.is_some())
        .count();
    println!("Ingredients covered by stock: {}", stocked);
    println!();
}

/// Display a shopping list grouped by category.
pub fn display_shopping_list(items: &[ShoppingListItem]) {
    if items.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", items.len());

    let mut current_category = None;
    for item in items {
        let category = item.ingredient.category;
        if current_category != Some(category) {
            println!();
            println!("-- {} --", category.label());
            current_category = Some(category);
        }

        let checkbox = if item.is_checked { "[x]" } else { "[ ]" };
        println!(
            "  {} {} {:.0}{} (stock {:.0}{}, buy {:.0}{})",
            checkbox,
            item.ingredient.name,
            item.needed,
            item.ingredient.unit,
            item.in_stock,
            item.ingredient.unit,
            item.shortage(),
            item.ingredient.unit
        );

        for entry in &item.breakdown {
            println!(
                "        {} ({}): {:.0}{}",
                entry.recipe_name, entry.day, entry.amount, item.ingredient.unit
            );
        }
    }

    println!();
}
