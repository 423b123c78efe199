pub mod ingredient;
pub mod inventory;
pub mod plan;
pub mod recipe;

pub use ingredient::{Ingredient, IngredientCategory};
pub use inventory::InventoryItem;
pub use plan::{MenuPlan, RecipeBreakdown, ShoppingListItem};
pub use recipe::{weekday_label, Cuisine, DishCategory, Recipe, RecipeTemplate, TemplateIngredient};
