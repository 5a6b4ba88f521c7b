#![allow(dead_code)]

use std::collections::HashSet;

use strum::VariantArray;
use weekmenu_knowledge::{Predicate, RuleEngine};
use weekmenu_mealplan::{Day, MealType, Menu, SLOT_COUNT, Slot};
use weekmenu_shared::{Catalog, DietaryFlag, Recipe};

pub fn main_course(title: &str, ingredients: &[&str]) -> Recipe {
    Recipe::new(title, "savory")
        .with_ingredients(ingredients.iter().copied())
        .with_flag(DietaryFlag::DairyFree, true)
        .with_flag(DietaryFlag::NutFree, true)
}

pub fn breakfasts() -> Vec<Recipe> {
    vec![
        Recipe::new("oat_porridge", "sweet")
            .with_ingredients(["oats", "honey", "milk", "apple"])
            .with_flag(DietaryFlag::Vegetarian, true)
            .with_flag(DietaryFlag::NutFree, true),
        Recipe::new("fruit_bowl", "sweet")
            .with_ingredients(["banana", "apple", "yogurt"])
            .with_flag(DietaryFlag::Vegetarian, true)
            .with_flag(DietaryFlag::NutFree, true)
            .with_flag(DietaryFlag::GlutenFree, true),
        Recipe::new("pancakes", "sweet")
            .with_ingredients(["flour", "egg", "milk"])
            .with_flag(DietaryFlag::Vegetarian, true),
    ]
}

/// Six sweet or neutral breakfasts without any intolerance-relevant flags.
pub fn breakfast_spread() -> Vec<Recipe> {
    ["granola", "toast_jam", "crepes", "muesli", "waffles", "rice_pudding"]
        .into_iter()
        .map(|title| Recipe::new(title, "sweet").with_ingredients(["oats", "honey"]))
        .collect()
}

/// Seven lean mains, each with fish, a vegetable and a carb.
pub fn mediterranean_mains() -> Vec<Recipe> {
    vec![
        main_course("salmon_rice_spinach", &["salmon", "rice", "spinach"]),
        main_course("tuna_pasta_tomato", &["tuna", "pasta", "tomato"]),
        main_course("cod_potato_carrot", &["cod", "potato", "carrot"]),
        main_course("shrimp_quinoa_zucchini", &["shrimp", "quinoa", "zucchini"]),
        main_course("mackerel_bread_pepper", &["mackerel", "bread", "pepper"]),
        main_course("sardines_rice_kale", &["sardines", "rice", "kale"]),
        main_course("salmon_pasta_broccoli", &["salmon", "pasta", "broccoli"]),
    ]
}

/// Lean mains that satisfy none of the coverage goals.
pub fn plain_mains() -> Vec<Recipe> {
    vec![
        main_course("chicken_rice", &["chicken", "rice"]),
        main_course("beef_stew", &["beef", "carrot", "onion"]),
        main_course("egg_fried_rice", &["egg", "rice", "pepper"]),
        main_course("tofu_noodles", &["tofu", "flour", "zucchini"]),
        main_course("chicken_quinoa", &["chicken", "quinoa"]),
        main_course("tempeh_bowl", &["tempeh", "rice", "kale"]),
        main_course("meat_pie", &["meat", "flour", "onion"]),
    ]
}

/// Adds a fat source to every recipe.
pub fn with_butter(recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes
        .into_iter()
        .map(|recipe| {
            let mut ingredients = recipe.ingredients.clone();
            ingredients.push("butter".to_owned());
            let mut recipe = recipe.with_ingredients(ingredients);
            recipe.title = format!("{}_butter", recipe.title);
            recipe
        })
        .collect()
}

pub fn catalog(parts: impl IntoIterator<Item = Vec<Recipe>>) -> anyhow::Result<Catalog> {
    Ok(Catalog::new(parts.into_iter().flatten().collect())?)
}

/// Checks every hard constraint that does not depend on the profile.
pub fn check_menu(menu: &Menu<'_>, rules: &RuleEngine<'_>) -> anyhow::Result<()> {
    anyhow::ensure!(menu.iter().count() == SLOT_COUNT, "menu is incomplete");

    for meal in [MealType::Lunch, MealType::Dinner] {
        let titles = Day::VARIANTS
            .iter()
            .filter_map(|day| menu.get(Slot::new(*day, meal)))
            .map(|recipe| recipe.title.as_str())
            .collect::<HashSet<_>>();

        anyhow::ensure!(titles.len() == 7, "{meal} repeats a recipe");
    }

    for day in Day::VARIANTS {
        let lunch = title(menu, *day, MealType::Lunch)?;
        let dinner = title(menu, *day, MealType::Dinner)?;

        anyhow::ensure!(lunch != dinner, "{day} serves {lunch} twice");
        anyhow::ensure!(
            !(rules.holds(Predicate::HighFat, lunch) && rules.holds(Predicate::HighFat, dinner)),
            "{day} has two high fat meals"
        );
    }

    anyhow::ensure!(
        satisfied_by_a_main(menu, rules, &[Predicate::IsMediterranean]),
        "no mediterranean main"
    );

    Ok(())
}

pub fn title<'c>(menu: &Menu<'c>, day: Day, meal: MealType) -> anyhow::Result<&'c str> {
    menu.get(Slot::new(day, meal))
        .map(|recipe| recipe.title.as_str())
        .ok_or_else(|| anyhow::anyhow!("{day} {meal} is empty"))
}

pub fn satisfied_by_a_main(menu: &Menu<'_>, rules: &RuleEngine<'_>, any_of: &[Predicate]) -> bool {
    menu.iter()
        .filter(|(slot, _)| slot.meal.is_main())
        .any(|(_, recipe)| rules.holds_any(any_of, &recipe.title))
}
