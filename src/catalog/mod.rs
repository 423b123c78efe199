mod builtin;

use crate::models::{Cuisine, DishCategory, RecipeTemplate};

/// Immutable collection of candidate dishes.
///
/// Always passed in explicitly so tests can substitute small fixtures.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    templates: Vec<RecipeTemplate>,
}

impl RecipeCatalog {
    pub fn new(templates: Vec<RecipeTemplate>) -> Self {
        Self { templates }
    }

    /// The standard catalog: five mains, three sides and two or three soups
    /// per cuisine, with base quantities for a four-person household.
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_templates())
    }

    /// Candidates for one slot of one cuisine.
    pub fn pool(&self, category: DishCategory, cuisine: Cuisine) -> Vec<&RecipeTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category && t.cuisine == cuisine)
            .collect()
    }

    pub fn templates(&self) -> &[RecipeTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

const JAPANESE_NAME_MARKERS: [&str; 10] = [
    "照り焼き",
    "塩焼き",
    "生姜焼き",
    "親子丼",
    "味噌煮",
    "お浸し",
    "胡麻和え",
    "きんぴら",
    "味噌汁",
    "すまし汁",
];

const WESTERN_NAME_MARKERS: [&str; 10] = [
    "ハンバーグ",
    "ステーキ",
    "シチュー",
    "グリル",
    "ソテー",
    "サラダ",
    "コールスロー",
    "ガーリック",
    "コーンスープ",
    "オニオンスープ",
];

const CHINESE_NAME_MARKERS: [&str; 11] = [
    "麻婆",
    "青椒",
    "エビチリ",
    "回鍋肉",
    "酢豚",
    "ナムル",
    "中華風",
    "春雨",
    "わかめスープ",
    "卵スープ",
    "酸辣湯",
];

/// Classify a dish name into a cuisine by its characteristic markers.
///
/// A keyword heuristic over the catalog's naming conventions; unrecognized
/// names default to Japanese.
pub fn guess_cuisine(name: &str) -> Cuisine {
    if JAPANESE_NAME_MARKERS.iter().any(|m| name.contains(m)) {
        return Cuisine::Japanese;
    }
    if WESTERN_NAME_MARKERS.iter().any(|m| name.contains(m)) {
        return Cuisine::Western;
    }
    if CHINESE_NAME_MARKERS.iter().any(|m| name.contains(m)) {
        return Cuisine::Chinese;
    }
    Cuisine::Japanese
}
