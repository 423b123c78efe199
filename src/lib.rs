pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod remote;
pub mod shopping;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{Ingredient, InventoryItem, MenuPlan, Recipe, ShoppingListItem};
pub use planner::{MenuPlanner, PlanRequest};
