use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::Cuisine;

/// Household size the catalog's base quantities assume.
pub const REFERENCE_HOUSEHOLD: u32 = 4;

/// Default general per-day cooking budget in minutes.
pub const DEFAULT_DAILY_TIME_LIMIT: u32 = 60;

/// Default budget for busy days.
pub const DEFAULT_BUSY_TIME_LIMIT: u32 = 30;

/// Tunable knobs for the local generator.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Chance that a day's menu gains a side dish.
    pub side_probability: f64,
    /// Chance that a day's menu gains a soup.
    pub soup_probability: f64,
    /// General per-day cooking time budget in minutes.
    pub daily_time_limit: u32,
    /// Tighter budget applied on busy dates.
    pub busy_time_limit: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            side_probability: 0.8,
            soup_probability: 0.6,
            daily_time_limit: DEFAULT_DAILY_TIME_LIMIT,
            busy_time_limit: DEFAULT_BUSY_TIME_LIMIT,
        }
    }
}

/// Day counts per cuisine across the planned range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineDistribution {
    pub japanese: u32,
    pub western: u32,
    pub chinese: u32,
}

impl CuisineDistribution {
    /// The default split: ~40% japanese, ~30% western, ~30% chinese.
    ///
    /// Ceiling/floor rounding may produce more entries than days; the
    /// planner uses the first `days` after shuffling.
    pub fn default_for(days: u32) -> Self {
        let days = days as f64;
        Self {
            japanese: (days * 0.4).ceil() as u32,
            western: (days * 0.3).ceil() as u32,
            chinese: (days * 0.3).floor() as u32,
        }
    }

    pub fn total(&self) -> u32 {
        self.japanese + self.western + self.chinese
    }

    /// One entry per allotted day, grouped by cuisine (shuffled by the
    /// planner afterwards).
    pub fn to_genre_list(&self) -> Vec<Cuisine> {
        let mut genres = Vec::with_capacity(self.total() as usize);
        genres.extend(std::iter::repeat(Cuisine::Japanese).take(self.japanese as usize));
        genres.extend(std::iter::repeat(Cuisine::Western).take(self.western as usize));
        genres.extend(std::iter::repeat(Cuisine::Chinese).take(self.chinese as usize));
        genres
    }
}

/// Inputs for one generation call.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Number of people to cook for. Must be positive.
    pub household_size: u32,
    /// Free-text household preferences; mined for allergies/dislikes when
    /// the remote strategy is used.
    pub preferences: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub diet_mode: bool,
    /// Dates needing the tighter busy-day budget.
    pub busy_dates: Vec<NaiveDate>,
    /// Overrides the configured general time limit when set.
    pub max_cooking_time: Option<u32>,
    /// Explicit cuisine split; must sum to the day count when present.
    pub cuisine_distribution: Option<CuisineDistribution>,
    /// Ingredients the remote strategy should try to use up.
    pub must_use_ingredients: Vec<String>,
}

impl PlanRequest {
    pub fn new(household_size: u32, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            household_size,
            preferences: String::new(),
            start_date,
            end_date,
            diet_mode: false,
            busy_dates: Vec::new(),
            max_cooking_time: None,
            cuisine_distribution: None,
            must_use_ingredients: Vec::new(),
        }
    }

    /// Inclusive day span of the range. Valid only after `validate`.
    pub fn day_count(&self) -> u32 {
        (self.end_date - self.start_date).num_days() as u32 + 1
    }

    /// Fail fast on malformed inputs before any generation work begins.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(MenuError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.household_size == 0 {
            return Err(MenuError::InvalidHouseholdSize);
        }
        if let Some(dist) = &self.cuisine_distribution {
            let days = self.day_count();
            if dist.total() != days {
                return Err(MenuError::DistributionMismatch {
                    sum: dist.total(),
                    days,
                });
            }
        }
        Ok(())
    }

    /// Time budget for a date: the busy limit on busy dates, otherwise the
    /// general limit (`max_cooking_time` overrides the configured default).
    pub fn time_limit_for(&self, date: NaiveDate, config: &PlannerConfig) -> u32 {
        let daily = self.max_cooking_time.unwrap_or(config.daily_time_limit);
        if self.busy_dates.contains(&date) {
            config.busy_time_limit.min(daily)
        } else {
            daily
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_count_inclusive() {
        let request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 8));
        assert_eq!(request.day_count(), 7);

        let single = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 2));
        assert_eq!(single.day_count(), 1);
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let request = PlanRequest::new(4, date(2025, 6, 8), date(2025, 6, 2));
        assert!(matches!(
            request.validate(),
            Err(MenuError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_household() {
        let request = PlanRequest::new(0, date(2025, 6, 2), date(2025, 6, 4));
        assert!(matches!(
            request.validate(),
            Err(MenuError::InvalidHouseholdSize)
        ));
    }

    #[test]
    fn test_validate_rejects_distribution_mismatch() {
        let mut request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 4));
        request.cuisine_distribution = Some(CuisineDistribution {
            japanese: 2,
            western: 2,
            chinese: 2,
        });
        assert!(matches!(
            request.validate(),
            Err(MenuError::DistributionMismatch { sum: 6, days: 3 })
        ));
    }

    #[test]
    fn test_default_distribution_split() {
        let dist = CuisineDistribution::default_for(7);
        assert_eq!(dist.japanese, 3); // ceil(2.8)
        assert_eq!(dist.western, 3); // ceil(2.1)
        assert_eq!(dist.chinese, 2); // floor(2.1)
    }

    #[test]
    fn test_busy_day_uses_tighter_limit() {
        let config = PlannerConfig::default();
        let mut request = PlanRequest::new(4, date(2025, 6, 2), date(2025, 6, 8));
        request.busy_dates = vec![date(2025, 6, 3)];

        assert_eq!(request.time_limit_for(date(2025, 6, 2), &config), 60);
        assert_eq!(request.time_limit_for(date(2025, 6, 3), &config), 30);

        // An override below the busy limit caps busy days too
        request.max_cooking_time = Some(20);
        assert_eq!(request.time_limit_for(date(2025, 6, 2), &config), 20);
        assert_eq!(request.time_limit_for(date(2025, 6, 3), &config), 20);
    }
}
