#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const CATALOG_JSON: &str = r#"[
    {
        "title": "oat_porridge",
        "primary_taste": "sweet",
        "is_vegetarian": true,
        "is_nut_free": true,
        "ingredients": ["oats", "honey", "milk"],
        "ingredients_raw": "1 cup oats, 1 tbsp honey, 200ml milk"
    },
    {
        "title": "salmon_rice_spinach",
        "primary_taste": "savory",
        "is_dairy_free": true,
        "ingredients": ["salmon", "rice", "spinach"],
        "cuisine": "mediterranean",
        "prep_time_min": 25
    },
    {"title": "tuna_pasta_tomato", "primary_taste": "savory", "ingredients": ["tuna", "pasta", "tomato"]},
    {"title": "cod_potato_carrot", "primary_taste": "spicy", "ingredients": ["cod", "potato", "carrot"]},
    {"title": "shrimp_quinoa_zucchini", "primary_taste": "savory", "ingredients": ["shrimp", "quinoa", "zucchini"]},
    {"title": "mackerel_bread_pepper", "primary_taste": "savory", "ingredients": ["mackerel", "bread", "pepper"]},
    {"title": "sardines_rice_kale", "primary_taste": "spicy", "ingredients": ["sardines", "rice", "kale"]},
    {"title": "salmon_pasta_broccoli", "primary_taste": "savory", "ingredients": ["salmon", "pasta", "broccoli"]}
]"#;

pub fn write_catalog(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join("recipes.json");
    std::fs::write(&path, CATALOG_JSON)?;

    Ok(path)
}
