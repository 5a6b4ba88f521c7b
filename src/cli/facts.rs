use std::path::Path;

use weekmenu_knowledge::{FactStore, snapshot};

pub fn rebuild(config: weekmenu::Config) -> anyhow::Result<()> {
    let catalog = weekmenu::catalog::load(&config.catalog.path)?;
    let store = FactStore::build(&catalog);

    snapshot::save(
        &store,
        &snapshot::fingerprint(&catalog),
        Path::new(&config.facts.snapshot),
    )?;

    println!("{} facts written to {}", store.len(), config.facts.snapshot);

    Ok(())
}
