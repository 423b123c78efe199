use chrono::NaiveDate;

use crate::models::{Ingredient, InventoryItem, RecipeTemplate};
use crate::planner::config::REFERENCE_HOUSEHOLD;

/// Scale a catalog base quantity for a household, rounding up to whole units.
pub fn scaled_amount(base_qty: f64, household_size: u32) -> f64 {
    (base_qty * household_size as f64 / REFERENCE_HOUSEHOLD as f64).ceil()
}

struct LedgerItem {
    id: String,
    name: String,
    unit: String,
    remaining: f64,
    expiration_date: NaiveDate,
}

/// In-memory working copy of the inventory for a single generation run.
///
/// Matches are consumed in recipe order, so earlier dishes see more stock
/// than later ones. The caller's snapshot is never touched; real deductions
/// happen externally once a day is cooked.
pub struct InventoryLedger {
    items: Vec<LedgerItem>,
    today: NaiveDate,
    consumed: Vec<String>,
}

impl InventoryLedger {
    pub fn new(snapshot: &[InventoryItem], today: NaiveDate) -> Self {
        let items = snapshot
            .iter()
            .map(|item| LedgerItem {
                id: item.id.clone(),
                name: item.name.clone(),
                unit: item.unit.clone(),
                remaining: item.amount,
                expiration_date: item.expiration_date,
            })
            .collect();
        Self {
            items,
            today,
            consumed: Vec::new(),
        }
    }

    /// Try to cover `amount` of an ingredient from stock.
    ///
    /// Requires an exact name+unit match, a future expiration date, and
    /// enough remaining quantity; partial matches leave the stock untouched.
    /// Returns the matched inventory item's id.
    fn try_consume(&mut self, name: &str, unit: &str, amount: f64) -> Option<String> {
        let today = self.today;
        let item = self.items.iter_mut().find(|item| {
            item.name == name
                && item.unit == unit
                && item.expiration_date > today
                && item.remaining >= amount
        })?;

        item.remaining -= amount;
        let id = item.id.clone();
        let consumed_name = item.name.clone();
        if !self.consumed.contains(&consumed_name) {
            self.consumed.push(consumed_name);
        }
        Some(id)
    }

    /// Names of inventory items matched so far, in first-use order.
    pub fn consumed_names(&self) -> &[String] {
        &self.consumed
    }
}

/// Scale a template's ingredients for the household and mark which ones are
/// covered by stock.
pub fn apply_inventory(
    template: &RecipeTemplate,
    ledger: &mut InventoryLedger,
    household_size: u32,
) -> Vec<Ingredient> {
    template
        .ingredients
        .iter()
        .map(|ing| {
            let amount = scaled_amount(ing.base_qty, household_size);
            let mut ingredient = Ingredient::new(&ing.name, amount, &ing.unit, ing.category);
            ingredient.inventory_ref = ledger.try_consume(&ing.name, &ing.unit, amount);
            ingredient
        })
        .collect()
}
