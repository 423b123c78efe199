use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::RecipeCatalog;
use crate::error::{MenuError, Result};
use crate::models::{Cuisine, DishCategory, InventoryItem, MenuPlan, Recipe, RecipeTemplate};
use crate::planner::config::{CuisineDistribution, PlanRequest, PlannerConfig};
use crate::planner::filters::{filter_by_diet_mode, filter_by_time_limit};
use crate::planner::reconcile::{apply_inventory, InventoryLedger};

/// Day-by-day menu generator.
///
/// Owns an immutable catalog and the generation knobs; each call works on a
/// private copy of the inventory snapshot, so concurrent generations are
/// independent.
pub struct MenuPlanner {
    catalog: RecipeCatalog,
    config: PlannerConfig,
}

impl MenuPlanner {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    pub fn with_config(catalog: RecipeCatalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate recipes for the requested range, evaluated against today's
    /// date for expiration matching.
    pub fn generate<R: Rng>(
        &self,
        request: &PlanRequest,
        inventory: &[InventoryItem],
        rng: &mut R,
    ) -> Result<Vec<Recipe>> {
        self.generate_at(Local::now().date_naive(), request, inventory, rng)
    }

    /// Like `generate`, with an explicit evaluation date.
    pub fn generate_at<R: Rng>(
        &self,
        today: NaiveDate,
        request: &PlanRequest,
        inventory: &[InventoryItem],
        rng: &mut R,
    ) -> Result<Vec<Recipe>> {
        request.validate()?;
        let days = request.day_count();

        let distribution = request
            .cuisine_distribution
            .unwrap_or_else(|| CuisineDistribution::default_for(days));
        let mut genres = distribution.to_genre_list();
        genres.shuffle(rng);

        let mut ledger = InventoryLedger::new(inventory, today);
        let mut recipes = Vec::new();

        for offset in 0..days {
            let date = request.start_date + Duration::days(offset as i64);
            let time_limit = request.time_limit_for(date, &self.config);
            let genre = genres
                .get(offset as usize)
                .copied()
                .unwrap_or(Cuisine::Japanese);

            let main = self.pick_main(genre, request.diet_mode, time_limit, rng)?;
            let mut used_minutes = main.base_time_minutes;
            let ingredients = apply_inventory(main, &mut ledger, request.household_size);
            recipes.push(Recipe::scheduled(main, ingredients, date));

            if rng.gen_range(0.0..1.0) < self.config.side_probability {
                if let Some(side) = self.pick_optional(
                    DishCategory::Side,
                    genre,
                    request.diet_mode,
                    time_limit.saturating_sub(used_minutes),
                    rng,
                ) {
                    used_minutes += side.base_time_minutes;
                    let ingredients = apply_inventory(side, &mut ledger, request.household_size);
                    recipes.push(Recipe::scheduled(side, ingredients, date));
                }
            }

            if rng.gen_range(0.0..1.0) < self.config.soup_probability {
                if let Some(soup) = self.pick_optional(
                    DishCategory::Soup,
                    genre,
                    request.diet_mode,
                    time_limit.saturating_sub(used_minutes),
                    rng,
                ) {
                    let ingredients = apply_inventory(soup, &mut ledger, request.household_size);
                    recipes.push(Recipe::scheduled(soup, ingredients, date));
                }
            }
        }

        Ok(recipes)
    }

    /// Generate and wrap into a dated `MenuPlan`.
    pub fn build_plan<R: Rng>(
        &self,
        request: &PlanRequest,
        inventory: &[InventoryItem],
        rng: &mut R,
    ) -> Result<MenuPlan> {
        let today = Local::now().date_naive();
        let recipes = self.generate_at(today, request, inventory, rng)?;
        Ok(MenuPlan::new(
            recipes,
            today,
            request.start_date,
            request.end_date,
        ))
    }

    /// Pick a main dish, widening constraints instead of failing.
    ///
    /// Widening order: drop the time filter, then the diet filter. Only a
    /// genre pool with no main dishes at all is an error.
    fn pick_main<'a, R: Rng>(
        &'a self,
        genre: Cuisine,
        diet_mode: bool,
        time_limit: u32,
        rng: &mut R,
    ) -> Result<&'a RecipeTemplate> {
        let pool = self.catalog.pool(DishCategory::Main, genre);
        if pool.is_empty() {
            return Err(MenuError::NoCandidate(genre.genre_label().to_string()));
        }

        let dieted = filter_by_diet_mode(&pool, diet_mode);
        let timed = filter_by_time_limit(&dieted, time_limit);

        let candidates = if !timed.is_empty() {
            timed
        } else if !dieted.is_empty() {
            dieted
        } else {
            pool
        };

        candidates
            .choose(rng)
            .copied()
            .ok_or_else(|| MenuError::NoCandidate(genre.genre_label().to_string()))
    }

    /// Pick a side or soup if any candidate fits; optional slots are skipped
    /// rather than widened.
    fn pick_optional<'a, R: Rng>(
        &'a self,
        category: DishCategory,
        genre: Cuisine,
        diet_mode: bool,
        remaining_minutes: u32,
        rng: &mut R,
    ) -> Option<&'a RecipeTemplate> {
        let pool = self.catalog.pool(category, genre);
        let dieted = filter_by_diet_mode(&pool, diet_mode);
        let timed = filter_by_time_limit(&dieted, remaining_minutes);
        timed.choose(rng).copied()
    }
}
