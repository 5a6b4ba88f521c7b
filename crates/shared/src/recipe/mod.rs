mod catalog;

pub use catalog::*;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// Boolean dietary facts carried by every recipe.
#[derive(
    Encode,
    Decode,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum DietaryFlag {
    DairyFree,
    NutFree,
    GlutenFree,
    Vegetarian,
}

#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    /// Unique title, used as the recipe identifier everywhere.
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub primary_taste: String,
    #[serde(default)]
    pub is_dairy_free: bool,
    #[serde(default)]
    pub is_nut_free: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Unprocessed ingredient text, kept for display only.
    #[serde(default)]
    pub ingredients_raw: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub prep_time_min: Option<u32>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, primary_taste: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            primary_taste: primary_taste.into(),
            is_dairy_free: false,
            is_nut_free: false,
            is_gluten_free: false,
            is_vegetarian: false,
            ingredients: vec![],
            ingredients_raw: String::new(),
            cuisine: None,
            difficulty: None,
            prep_time_min: None,
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        if self.ingredients_raw.is_empty() {
            self.ingredients_raw = self.ingredients.join(", ");
        }
        self
    }

    pub fn with_flag(mut self, flag: DietaryFlag, value: bool) -> Self {
        match flag {
            DietaryFlag::DairyFree => self.is_dairy_free = value,
            DietaryFlag::NutFree => self.is_nut_free = value,
            DietaryFlag::GlutenFree => self.is_gluten_free = value,
            DietaryFlag::Vegetarian => self.is_vegetarian = value,
        }
        self
    }

    pub fn flag(&self, flag: DietaryFlag) -> bool {
        match flag {
            DietaryFlag::DairyFree => self.is_dairy_free,
            DietaryFlag::NutFree => self.is_nut_free,
            DietaryFlag::GlutenFree => self.is_gluten_free,
            DietaryFlag::Vegetarian => self.is_vegetarian,
        }
    }
}
