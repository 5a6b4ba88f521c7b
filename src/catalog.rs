use std::path::Path;

use anyhow::Context;
use weekmenu_knowledge::{FactStore, snapshot};
use weekmenu_shared::{Catalog, NEUTRAL_TASTE, Recipe, TastePredictor};

use crate::config::FactsConfig;

/// Reads a JSON array of recipe records.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Catalog> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;

    let recipes: Vec<Recipe> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    let catalog = Catalog::new(recipes)?;

    tracing::info!(path = %path.display(), recipes = catalog.len(), "catalog loaded");

    Ok(catalog)
}

/// Fact store for `catalog`, going through the snapshot when enabled.
pub fn fact_store(config: &FactsConfig, catalog: &Catalog) -> FactStore {
    if config.enabled {
        snapshot::load_or_build(Path::new(&config.snapshot), catalog)
    } else {
        FactStore::build(catalog)
    }
}

/// Taste predictor backed by the catalog's own labels: a dish is matched on
/// its raw ingredient text or its joined tokens, unmatched dishes read as neutral.
pub struct CatalogTastes<'c>(pub &'c Catalog);

impl TastePredictor for CatalogTastes<'_> {
    fn predict_taste(&self, ingredient_text: &str) -> String {
        let text = ingredient_text.trim();

        if text.is_empty() {
            return NEUTRAL_TASTE.to_owned();
        }

        self.0
            .iter()
            .find(|recipe| {
                recipe.ingredients_raw.trim().eq_ignore_ascii_case(text)
                    || recipe.ingredients.join(", ").eq_ignore_ascii_case(text)
            })
            .map(|recipe| recipe.primary_taste.to_lowercase())
            .unwrap_or_else(|| NEUTRAL_TASTE.to_owned())
    }
}
