use bitcode::{Decode, Encode};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use weekmenu_shared::{Catalog, DietaryFlag};

/// Ingredient categories of the nutrition taxonomy.
///
/// String forms are the names of the matching source predicates, e.g. `is_fat_source`.
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
pub enum Category {
    #[strum(serialize = "is_protein_source")]
    Protein,
    #[strum(serialize = "is_fat_source")]
    Fat,
    #[strum(serialize = "is_fiber_source")]
    Fiber,
    #[strum(serialize = "is_carb_source")]
    Carb,
    #[strum(serialize = "is_vegetable_source")]
    Vegetable,
    #[strum(serialize = "is_fish_source")]
    Fish,
    #[strum(serialize = "is_high_calorie")]
    HighCalorie,
    #[strum(serialize = "is_electrolyte_source")]
    Electrolyte,
    #[strum(serialize = "is_potassium_source")]
    Potassium,
}

const ELECTROLYTES: &[&str] = &[
    "banana",
    "spinach",
    "potato",
    "coconut_water",
    "yogurt",
    "avocado",
    "salmon",
];

impl Category {
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Category::Protein => &["meat", "beef", "chicken", "egg", "fish", "tofu", "tempeh"],
            Category::Fat => &[
                "oil", "butter", "avocado", "lard", "bacon", "cheese", "walnut",
            ],
            Category::Fiber => &["lentils", "beans", "broccoli", "oats", "apple"],
            Category::Carb => &["rice", "pasta", "potato", "bread", "quinoa", "flour"],
            Category::Vegetable => &[
                "spinach", "carrot", "broccoli", "tomato", "zucchini", "kale", "pepper",
            ],
            Category::Fish => &["salmon", "tuna", "cod", "shrimp", "mackerel", "sardines"],
            Category::HighCalorie => &[
                "peanut_butter",
                "pasta",
                "rice",
                "olive_oil",
                "honey",
                "walnuts",
                "beef",
                "whole_milk",
            ],
            Category::Electrolyte | Category::Potassium => ELECTROLYTES,
        }
    }
}

/// A ground statement about one recipe or one ingredient.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fact {
    Taste {
        recipe: String,
        taste: String,
    },
    Flag {
        recipe: String,
        flag: DietaryFlag,
        value: bool,
    },
    Contains {
        recipe: String,
        ingredient: String,
    },
    Category {
        category: Category,
        ingredient: String,
    },
}

/// Shortest ingredient token that becomes a `Contains` fact.
pub const MIN_TOKEN_LEN: usize = 3;

/// Lowercases a token and joins its words with `_`, the way the taxonomy
/// spells compound ingredients such as `olive_oil`.
pub fn normalize_token(token: &str) -> Option<String> {
    let token = token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();

    if token.chars().count() < MIN_TOKEN_LEN {
        return None;
    }

    Some(token)
}

/// Facts read straight off the catalog records.
pub fn recipe_facts(catalog: &Catalog) -> impl Iterator<Item = Fact> + '_ {
    catalog.iter().flat_map(|recipe| {
        let taste = Fact::Taste {
            recipe: recipe.title.to_owned(),
            taste: recipe.primary_taste.to_lowercase(),
        };

        let flags = DietaryFlag::VARIANTS.iter().map(move |flag| Fact::Flag {
            recipe: recipe.title.to_owned(),
            flag: *flag,
            value: recipe.flag(*flag),
        });

        let contains = recipe
            .ingredients
            .iter()
            .filter_map(|token| normalize_token(token))
            .map(move |ingredient| Fact::Contains {
                recipe: recipe.title.to_owned(),
                ingredient,
            });

        std::iter::once(taste).chain(flags).chain(contains)
    })
}

/// The static ingredient taxonomy, independent of any recipe.
pub fn taxonomy_facts() -> impl Iterator<Item = Fact> {
    Category::VARIANTS.iter().flat_map(|category| {
        category.members().iter().map(move |ingredient| Fact::Category {
            category: *category,
            ingredient: (*ingredient).to_owned(),
        })
    })
}
