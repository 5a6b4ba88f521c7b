use rand::SeedableRng;
use rand::rngs::StdRng;
use validator::Validate;
use weekmenu_knowledge::{FactStore, RuleEngine};
use weekmenu_shared::{Catalog, UserProfile};

use crate::{DEFAULT_MAX_NODES, Domains, Goal, Menu, Scheduler};

/// A generated menu together with the seed that reproduces it.
#[derive(Clone, Debug)]
pub struct Plan<'c> {
    pub seed: u64,
    pub menu: Menu<'c>,
}

/// Runs domain build, search and assembly for one catalog.
///
/// Rule answers are memoised across calls, so generating several variants
/// from the same planner only evaluates each predicate once per recipe.
pub struct Planner<'c> {
    catalog: &'c Catalog,
    rules: RuleEngine<'c>,
    max_nodes: u64,
}

impl<'c> Planner<'c> {
    pub fn new(catalog: &'c Catalog, facts: &'c FactStore) -> Self {
        Self {
            catalog,
            rules: RuleEngine::new(facts),
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    pub fn max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn rules(&self) -> &RuleEngine<'c> {
        &self.rules
    }

    /// Solves a fresh menu for `profile`. Without a `seed` a random one is
    /// drawn; either way it is returned in the [`Plan`].
    pub fn generate(
        &self,
        profile: &UserProfile,
        seed: Option<u64>,
    ) -> weekmenu_shared::Result<Plan<'c>> {
        profile.validate()?;

        let domains = Domains::build(self.catalog, &self.rules, profile)?;

        let seed = seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "domain shuffle seed");

        let mut rng = StdRng::seed_from_u64(seed);
        let goals = Goal::required(profile);

        tracing::info!(
            goals = ?goals,
            breakfast = domains.breakfast.len(),
            main = domains.main.len(),
            "searching for a menu"
        );

        let schedule = Scheduler::new(&self.rules, goals)
            .max_nodes(self.max_nodes)
            .solve(&domains, &mut rng)?;

        let menu = Menu::assemble(&schedule, self.catalog, self.rules.facts())?;

        tracing::info!(seed, "menu generated");

        Ok(Plan { seed, menu })
    }
}
