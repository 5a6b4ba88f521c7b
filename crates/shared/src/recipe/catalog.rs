use std::collections::HashMap;

use validator::Validate;

use super::Recipe;

/// The recipe catalog for one planning session, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> crate::Result<Self> {
        let mut index = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            recipe.validate()?;

            if index.insert(recipe.title.to_owned(), position).is_some() {
                return Err(crate::Error::DuplicateRecipe(recipe.title.to_owned()));
            }
        }

        tracing::debug!(recipes = recipes.len(), "catalog indexed");

        Ok(Self { recipes, index })
    }

    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.index.get(title).map(|position| &self.recipes[*position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
