use crate::models::RecipeTemplate;

/// Name markers for fried or battered dishes, excluded in diet mode.
///
/// A keyword heuristic over the catalog's naming conventions, not a
/// nutritional analysis.
const DIET_AVOID_MARKERS: [&str; 5] = ["揚げ", "フライ", "天ぷら", "カツ", "から揚げ"];

/// Drop fried-dish candidates when diet mode is on.
pub fn filter_by_diet_mode<'a>(
    candidates: &[&'a RecipeTemplate],
    diet_mode: bool,
) -> Vec<&'a RecipeTemplate> {
    if !diet_mode {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .copied()
        .filter(|t| !DIET_AVOID_MARKERS.iter().any(|m| t.name.contains(m)))
        .collect()
}

/// Keep candidates whose base cooking time fits the budget.
pub fn filter_by_time_limit<'a>(
    candidates: &[&'a RecipeTemplate],
    max_minutes: u32,
) -> Vec<&'a RecipeTemplate> {
    candidates
        .iter()
        .copied()
        .filter(|t| t.base_time_minutes <= max_minutes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cuisine, DishCategory};

    fn dish(name: &str, minutes: u32) -> RecipeTemplate {
        RecipeTemplate {
            name: name.to_string(),
            base_time_minutes: minutes,
            difficulty: 2,
            cuisine: Cuisine::Japanese,
            category: DishCategory::Main,
            ingredients: vec![],
        }
    }

    #[test]
    fn test_diet_mode_excludes_fried_dishes() {
        let teriyaki = dish("鶏の照り焼き", 25);
        let karaage = dish("鶏のから揚げ", 30);
        let tempura = dish("天ぷら盛り合わせ", 40);
        let katsu = dish("トンカツ", 35);
        let pool = vec![&teriyaki, &karaage, &tempura, &katsu];

        let filtered = filter_by_diet_mode(&pool, true);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "鶏の照り焼き");
    }

    #[test]
    fn test_diet_mode_off_passes_through() {
        let karaage = dish("鶏のから揚げ", 30);
        let pool = vec![&karaage];
        assert_eq!(filter_by_diet_mode(&pool, false).len(), 1);
    }

    #[test]
    fn test_time_limit_is_inclusive() {
        let quick = dish("すまし汁", 8);
        let slow = dish("ビーフシチュー", 60);
        let pool = vec![&quick, &slow];

        let filtered = filter_by_time_limit(&pool, 8);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "すまし汁");

        assert!(filter_by_time_limit(&pool, 7).is_empty());
        assert_eq!(filter_by_time_limit(&pool, 60).len(), 2);
    }
}
