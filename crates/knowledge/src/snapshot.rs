use std::path::Path;

use bitcode::{Decode, Encode};
use sha3::{Digest, Sha3_224};
use weekmenu_shared::{Catalog, DietaryFlag};

use crate::{Fact, FactStore};

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Encode, Decode)]
struct Snapshot {
    version: u32,
    fingerprint: Vec<u8>,
    facts: Vec<Fact>,
}

/// Order-independent digest of everything the fact store is derived from.
pub fn fingerprint(catalog: &Catalog) -> Vec<u8> {
    let mut recipes = catalog.iter().collect::<Vec<_>>();
    recipes.sort_by(|a, b| a.title.cmp(&b.title));

    let mut hasher = Sha3_224::default();

    for recipe in recipes {
        hasher.update(&recipe.title);
        hasher.update([0u8]);
        hasher.update(&recipe.primary_taste);
        hasher.update([0u8]);

        for flag in [
            DietaryFlag::DairyFree,
            DietaryFlag::NutFree,
            DietaryFlag::GlutenFree,
            DietaryFlag::Vegetarian,
        ] {
            hasher.update([recipe.flag(flag) as u8]);
        }

        for ingredient in recipe.ingredients.iter() {
            hasher.update(ingredient);
            hasher.update([0u8]);
        }

        hasher.update([1u8]);
    }

    hasher.finalize()[..].to_vec()
}

pub fn save(store: &FactStore, fingerprint: &[u8], path: &Path) -> weekmenu_shared::Result<()> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        fingerprint: fingerprint.to_vec(),
        facts: store.facts().cloned().collect(),
    };

    let bytes = bitcode::encode(&snapshot);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;

    tracing::info!(path = %path.display(), facts = snapshot.facts.len(), "fact snapshot written");

    Ok(())
}

/// Reads a snapshot, returning `None` when it is missing, unreadable or stale.
pub fn load(path: &Path, fingerprint: &[u8]) -> Option<FactStore> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(path = %path.display(), err = %err, "no fact snapshot");
            return None;
        }
    };

    let snapshot = match bitcode::decode::<Snapshot>(&bytes) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(path = %path.display(), err = %err, "fact snapshot unreadable");
            return None;
        }
    };

    if snapshot.version != SNAPSHOT_VERSION || snapshot.fingerprint != fingerprint {
        tracing::warn!(path = %path.display(), "fact snapshot is stale");
        return None;
    }

    Some(FactStore::from_facts(snapshot.facts))
}

/// Loads the snapshot at `path` when it matches `catalog`, otherwise rebuilds
/// the store from the catalog and refreshes the snapshot.
pub fn load_or_build(path: &Path, catalog: &Catalog) -> FactStore {
    let fingerprint = fingerprint(catalog);

    if let Some(store) = load(path, &fingerprint) {
        tracing::info!(path = %path.display(), facts = store.len(), "fact store loaded from snapshot");
        return store;
    }

    let store = FactStore::build(catalog);

    if let Err(err) = save(&store, &fingerprint, path) {
        tracing::warn!(path = %path.display(), err = %err, "failed to write fact snapshot");
    }

    store
}
