use weekmenu_shared::{Catalog, DietaryFlag, Recipe};

#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_recipes()).expect("sample catalog is valid")
}

pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("grilled_salmon_risotto", "savory")
            .with_ingredients(["salmon", "rice", "spinach", "butter"])
            .with_flag(DietaryFlag::NutFree, true)
            .with_flag(DietaryFlag::GlutenFree, true),
        Recipe::new("chicken_banana_curry", "spicy")
            .with_ingredients(["chicken", "banana", "potato", "oil"])
            .with_flag(DietaryFlag::DairyFree, true)
            .with_flag(DietaryFlag::NutFree, true),
        Recipe::new("lentil_kale_stew", "savory")
            .with_ingredients(["lentils", "kale", "carrot", "onion"])
            .with_flag(DietaryFlag::Vegetarian, true)
            .with_flag(DietaryFlag::DairyFree, true)
            .with_flag(DietaryFlag::NutFree, true)
            .with_flag(DietaryFlag::GlutenFree, true),
        Recipe::new("beef_pasta_bake", "savory")
            .with_ingredients(["beef", "pasta", "cheese", "tomato"]),
        Recipe::new("honey_oat_porridge", "sweet")
            .with_ingredients(["oats", "honey", "milk", "apple"])
            .with_flag(DietaryFlag::Vegetarian, true)
            .with_flag(DietaryFlag::NutFree, true),
        Recipe::new("plain_toast", "neutral")
            .with_ingredients(["bread", "salt"])
            .with_flag(DietaryFlag::Vegetarian, true)
            .with_flag(DietaryFlag::DairyFree, true)
            .with_flag(DietaryFlag::NutFree, true),
    ]
}
