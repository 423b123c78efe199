//! The standard dish catalog. Base quantities assume a four-person household.

use crate::models::{Cuisine, DishCategory, IngredientCategory, RecipeTemplate, TemplateIngredient};

fn template(
    name: &str,
    base_time_minutes: u32,
    difficulty: u8,
    cuisine: Cuisine,
    category: DishCategory,
    ingredients: &[(&str, f64, &str, IngredientCategory)],
) -> RecipeTemplate {
    RecipeTemplate {
        name: name.to_string(),
        base_time_minutes,
        difficulty,
        cuisine,
        category,
        ingredients: ingredients
            .iter()
            .map(|&(name, base_qty, unit, category)| TemplateIngredient {
                name: name.to_string(),
                base_qty,
                unit: unit.to_string(),
                category,
            })
            .collect(),
    }
}

pub(super) fn builtin_templates() -> Vec<RecipeTemplate> {
    use Cuisine::{Chinese, Japanese, Western};
    use DishCategory::{Main, Side, Soup};
    use IngredientCategory::{MeatFish, Other, Seasoning, Vegetable};

    vec![
        // ── Mains: Japanese ─────────────────────────────────────────────
        template(
            "鶏の照り焼き",
            25,
            2,
            Japanese,
            Main,
            &[
                ("鶏もも肉", 300.0, "g", MeatFish),
                ("醤油", 30.0, "ml", Seasoning),
                ("みりん", 30.0, "ml", Seasoning),
                ("砂糖", 15.0, "g", Seasoning),
            ],
        ),
        template(
            "鮭の塩焼き",
            15,
            1,
            Japanese,
            Main,
            &[
                ("鮭", 400.0, "g", MeatFish),
                ("塩", 5.0, "g", Seasoning),
                ("レモン", 1.0, "個", Vegetable),
            ],
        ),
        template(
            "豚の生姜焼き",
            20,
            2,
            Japanese,
            Main,
            &[
                ("豚ロース肉", 400.0, "g", MeatFish),
                ("生姜", 20.0, "g", Vegetable),
                ("醤油", 45.0, "ml", Seasoning),
                ("みりん", 30.0, "ml", Seasoning),
                ("玉ねぎ", 200.0, "g", Vegetable),
            ],
        ),
        template(
            "親子丼",
            20,
            2,
            Japanese,
            Main,
            &[
                ("鶏もも肉", 200.0, "g", MeatFish),
                ("卵", 3.0, "個", Other),
                ("玉ねぎ", 100.0, "g", Vegetable),
                ("だし汁", 200.0, "ml", Seasoning),
                ("お米", 300.0, "g", Other),
            ],
        ),
        template(
            "さばの味噌煮",
            30,
            3,
            Japanese,
            Main,
            &[
                ("さば", 400.0, "g", MeatFish),
                ("味噌", 60.0, "g", Seasoning),
                ("砂糖", 30.0, "g", Seasoning),
                ("生姜", 15.0, "g", Vegetable),
            ],
        ),
        // ── Mains: Western ──────────────────────────────────────────────
        template(
            "ハンバーグ",
            35,
            3,
            Western,
            Main,
            &[
                ("牛ひき肉", 300.0, "g", MeatFish),
                ("豚ひき肉", 200.0, "g", MeatFish),
                ("玉ねぎ", 100.0, "g", Vegetable),
                ("パン粉", 50.0, "g", Other),
                ("卵", 1.0, "個", Other),
            ],
        ),
        template(
            "チキンステーキ",
            30,
            3,
            Western,
            Main,
            &[
                ("鶏胸肉", 400.0, "g", MeatFish),
                ("オリーブオイル", 30.0, "ml", Seasoning),
                ("にんにく", 20.0, "g", Vegetable),
                ("ローズマリー", 5.0, "g", Seasoning),
            ],
        ),
        template(
            "ビーフシチュー",
            60,
            4,
            Western,
            Main,
            &[
                ("牛肉", 400.0, "g", MeatFish),
                ("じゃがいも", 300.0, "g", Vegetable),
                ("人参", 200.0, "g", Vegetable),
                ("玉ねぎ", 200.0, "g", Vegetable),
                ("デミグラスソース", 200.0, "ml", Seasoning),
            ],
        ),
        template(
            "グリルチキン",
            25,
            2,
            Western,
            Main,
            &[
                ("鶏もも肉", 400.0, "g", MeatFish),
                ("オリーブオイル", 15.0, "ml", Seasoning),
                ("塩", 5.0, "g", Seasoning),
                ("こしょう", 2.0, "g", Seasoning),
            ],
        ),
        template(
            "ポークソテー",
            20,
            2,
            Western,
            Main,
            &[
                ("豚ロース肉", 400.0, "g", MeatFish),
                ("バター", 20.0, "g", Seasoning),
                ("塩", 5.0, "g", Seasoning),
                ("こしょう", 2.0, "g", Seasoning),
            ],
        ),
        // ── Mains: Chinese ──────────────────────────────────────────────
        template(
            "麻婆豆腐",
            25,
            3,
            Chinese,
            Main,
            &[
                ("豆腐", 300.0, "g", Other),
                ("豚ひき肉", 150.0, "g", MeatFish),
                ("豆板醤", 15.0, "g", Seasoning),
                ("醤油", 30.0, "ml", Seasoning),
                ("ねぎ", 50.0, "g", Vegetable),
            ],
        ),
        template(
            "青椒肉絲",
            20,
            2,
            Chinese,
            Main,
            &[
                ("豚肉", 200.0, "g", MeatFish),
                ("ピーマン", 150.0, "g", Vegetable),
                ("たけのこ", 100.0, "g", Vegetable),
                ("オイスターソース", 30.0, "ml", Seasoning),
                ("ごま油", 15.0, "ml", Seasoning),
            ],
        ),
        template(
            "エビチリ",
            30,
            4,
            Chinese,
            Main,
            &[
                ("エビ", 300.0, "g", MeatFish),
                ("ケチャップ", 60.0, "ml", Seasoning),
                ("豆板醤", 10.0, "g", Seasoning),
                ("にんにく", 10.0, "g", Vegetable),
                ("生姜", 10.0, "g", Vegetable),
            ],
        ),
        template(
            "回鍋肉",
            25,
            3,
            Chinese,
            Main,
            &[
                ("豚バラ肉", 300.0, "g", MeatFish),
                ("キャベツ", 300.0, "g", Vegetable),
                ("ピーマン", 100.0, "g", Vegetable),
                ("甜麺醤", 30.0, "g", Seasoning),
                ("ごま油", 15.0, "ml", Seasoning),
            ],
        ),
        template(
            "酢豚",
            40,
            4,
            Chinese,
            Main,
            &[
                ("豚肉", 300.0, "g", MeatFish),
                ("ピーマン", 150.0, "g", Vegetable),
                ("人参", 100.0, "g", Vegetable),
                ("パイナップル", 150.0, "g", Vegetable),
                ("酢", 45.0, "ml", Seasoning),
                ("砂糖", 30.0, "g", Seasoning),
            ],
        ),
        // ── Sides: Japanese ─────────────────────────────────────────────
        template(
            "ほうれん草のお浸し",
            15,
            1,
            Japanese,
            Side,
            &[
                ("ほうれん草", 200.0, "g", Vegetable),
                ("醤油", 15.0, "ml", Seasoning),
                ("だし汁", 15.0, "ml", Seasoning),
            ],
        ),
        template(
            "ブロッコリーの胡麻和え",
            12,
            1,
            Japanese,
            Side,
            &[
                ("ブロッコリー", 150.0, "g", Vegetable),
                ("すりごま", 15.0, "g", Seasoning),
                ("醤油", 8.0, "ml", Seasoning),
            ],
        ),
        template(
            "きんぴらごぼう",
            20,
            2,
            Japanese,
            Side,
            &[
                ("ごぼう", 150.0, "g", Vegetable),
                ("人参", 100.0, "g", Vegetable),
                ("醤油", 15.0, "ml", Seasoning),
                ("みりん", 15.0, "ml", Seasoning),
                ("ごま油", 10.0, "ml", Seasoning),
            ],
        ),
        // ── Sides: Western ──────────────────────────────────────────────
        template(
            "シーザーサラダ",
            10,
            1,
            Western,
            Side,
            &[
                ("レタス", 200.0, "g", Vegetable),
                ("トマト", 150.0, "g", Vegetable),
                ("シーザードレッシング", 30.0, "ml", Seasoning),
                ("パルメザンチーズ", 20.0, "g", Other),
            ],
        ),
        template(
            "コールスロー",
            15,
            1,
            Western,
            Side,
            &[
                ("キャベツ", 200.0, "g", Vegetable),
                ("人参", 50.0, "g", Vegetable),
                ("マヨネーズ", 30.0, "ml", Seasoning),
                ("酢", 15.0, "ml", Seasoning),
            ],
        ),
        template(
            "ガーリックブレッド",
            12,
            1,
            Western,
            Side,
            &[
                ("フランスパン", 200.0, "g", Other),
                ("バター", 30.0, "g", Seasoning),
                ("にんにく", 10.0, "g", Vegetable),
                ("パセリ", 5.0, "g", Vegetable),
            ],
        ),
        // ── Sides: Chinese ──────────────────────────────────────────────
        template(
            "もやしナムル",
            10,
            1,
            Chinese,
            Side,
            &[
                ("もやし", 200.0, "g", Vegetable),
                ("ごま油", 15.0, "ml", Seasoning),
                ("塩", 3.0, "g", Seasoning),
                ("にんにく", 5.0, "g", Vegetable),
            ],
        ),
        template(
            "中華風きゅうり",
            8,
            1,
            Chinese,
            Side,
            &[
                ("きゅうり", 200.0, "g", Vegetable),
                ("ごま油", 10.0, "ml", Seasoning),
                ("醤油", 10.0, "ml", Seasoning),
                ("酢", 10.0, "ml", Seasoning),
            ],
        ),
        template(
            "春雨サラダ",
            15,
            2,
            Chinese,
            Side,
            &[
                ("春雨", 100.0, "g", Other),
                ("きゅうり", 100.0, "g", Vegetable),
                ("ハム", 80.0, "g", MeatFish),
                ("ごま油", 15.0, "ml", Seasoning),
                ("醤油", 15.0, "ml", Seasoning),
            ],
        ),
        // ── Soups: Japanese ─────────────────────────────────────────────
        template(
            "味噌汁",
            10,
            1,
            Japanese,
            Soup,
            &[
                ("味噌", 45.0, "g", Seasoning),
                ("だし汁", 400.0, "ml", Seasoning),
                ("わかめ", 20.0, "g", Vegetable),
                ("豆腐", 100.0, "g", Other),
            ],
        ),
        template(
            "すまし汁",
            8,
            1,
            Japanese,
            Soup,
            &[
                ("だし汁", 400.0, "ml", Seasoning),
                ("醤油", 8.0, "ml", Seasoning),
                ("塩", 2.0, "g", Seasoning),
                ("ねぎ", 30.0, "g", Vegetable),
            ],
        ),
        // ── Soups: Western ──────────────────────────────────────────────
        template(
            "コーンスープ",
            12,
            1,
            Western,
            Soup,
            &[
                ("コーン缶", 200.0, "g", Other),
                ("牛乳", 200.0, "ml", Other),
                ("コンソメ", 5.0, "g", Seasoning),
                ("バター", 10.0, "g", Seasoning),
            ],
        ),
        template(
            "オニオンスープ",
            25,
            2,
            Western,
            Soup,
            &[
                ("玉ねぎ", 300.0, "g", Vegetable),
                ("コンソメ", 10.0, "g", Seasoning),
                ("バター", 15.0, "g", Seasoning),
                ("チーズ", 50.0, "g", Other),
            ],
        ),
        // ── Soups: Chinese ──────────────────────────────────────────────
        template(
            "わかめスープ",
            8,
            1,
            Chinese,
            Soup,
            &[
                ("わかめ", 15.0, "g", Vegetable),
                ("鶏がらスープの素", 5.0, "g", Seasoning),
                ("ごま油", 5.0, "ml", Seasoning),
            ],
        ),
        template(
            "卵スープ",
            10,
            1,
            Chinese,
            Soup,
            &[
                ("卵", 2.0, "個", Other),
                ("鶏がらスープの素", 5.0, "g", Seasoning),
                ("ねぎ", 30.0, "g", Vegetable),
            ],
        ),
        template(
            "酸辣湯",
            15,
            3,
            Chinese,
            Soup,
            &[
                ("豆腐", 150.0, "g", Other),
                ("卵", 1.0, "個", Other),
                ("きくらげ", 20.0, "g", Vegetable),
                ("酢", 30.0, "ml", Seasoning),
                ("ラー油", 5.0, "ml", Seasoning),
            ],
        ),
    ]
}
