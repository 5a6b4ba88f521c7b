use std::collections::{BTreeSet, HashMap, HashSet};

use weekmenu_shared::{Catalog, DietaryFlag};

use crate::fact::{self, Category, Fact};

#[derive(Debug, Clone, Default)]
struct RecipeFacts {
    taste: Option<String>,
    flags: HashMap<DietaryFlag, bool>,
    ingredients: HashSet<String>,
}

/// Frozen set of ground facts for one planning session.
///
/// Facts are never retracted or mutated once the store is built; every lookup
/// on an unknown recipe or ingredient answers as if the fact were absent.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: BTreeSet<Fact>,
    recipes: HashMap<String, RecipeFacts>,
    categories: HashMap<String, HashSet<Category>>,
}

impl FactStore {
    pub fn build(catalog: &Catalog) -> Self {
        let store = Self::from_facts(fact::recipe_facts(catalog).chain(fact::taxonomy_facts()));

        tracing::info!(
            recipes = store.recipes.len(),
            facts = store.facts.len(),
            "fact store built from catalog"
        );

        store
    }

    pub fn from_facts(facts: impl IntoIterator<Item = Fact>) -> Self {
        let mut store = Self::default();

        for fact in facts {
            store.index(&fact);
            store.facts.insert(fact);
        }

        store
    }

    fn index(&mut self, fact: &Fact) {
        match fact {
            Fact::Taste { recipe, taste } => {
                self.recipe_mut(recipe).taste = Some(taste.to_owned());
            }
            Fact::Flag {
                recipe,
                flag,
                value,
            } => {
                self.recipe_mut(recipe).flags.insert(*flag, *value);
            }
            Fact::Contains { recipe, ingredient } => {
                self.recipe_mut(recipe)
                    .ingredients
                    .insert(ingredient.to_owned());
            }
            Fact::Category {
                category,
                ingredient,
            } => {
                self.categories
                    .entry(ingredient.to_owned())
                    .or_default()
                    .insert(*category);
            }
        }
    }

    fn recipe_mut(&mut self, recipe: &str) -> &mut RecipeFacts {
        self.recipes.entry(recipe.to_owned()).or_default()
    }

    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn knows_recipe(&self, recipe: &str) -> bool {
        self.recipes.contains_key(recipe)
    }

    pub fn taste(&self, recipe: &str) -> Option<&str> {
        self.recipes.get(recipe)?.taste.as_deref()
    }

    pub fn flag(&self, recipe: &str, flag: DietaryFlag) -> Option<bool> {
        self.recipes.get(recipe)?.flags.get(&flag).copied()
    }

    pub fn contains(&self, recipe: &str, ingredient: &str) -> bool {
        self.recipes
            .get(recipe)
            .is_some_and(|facts| facts.ingredients.contains(ingredient))
    }

    /// Ingredients recorded for `recipe`; empty when the recipe is unknown.
    pub fn ingredients(&self, recipe: &str) -> impl Iterator<Item = &str> {
        self.recipes
            .get(recipe)
            .into_iter()
            .flat_map(|facts| facts.ingredients.iter().map(String::as_str))
    }

    pub fn is_category(&self, category: Category, ingredient: &str) -> bool {
        self.categories
            .get(ingredient)
            .is_some_and(|categories| categories.contains(&category))
    }
}

impl PartialEq for FactStore {
    fn eq(&self, other: &Self) -> bool {
        self.facts == other.facts
    }
}

impl Eq for FactStore {}
