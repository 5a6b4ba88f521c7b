use clap::Args;
use weekmenu_mealplan::Planner;
use weekmenu::catalog::CatalogTastes;
use weekmenu_shared::{Catalog, Intolerances, UserProfile, preferred_taste};

#[derive(Args)]
pub struct PlanArgs {
    /// Body mass index
    #[arg(long, conflicts_with_all = ["weight", "height"])]
    bmi: Option<f64>,

    /// Weight in kilograms, used with --height to compute the BMI
    #[arg(long, requires = "height")]
    weight: Option<f64>,

    /// Height in centimetres
    #[arg(long, requires = "weight")]
    height: Option<f64>,

    /// Include at least one sport-oriented main meal
    #[arg(long)]
    sport: bool,

    #[arg(long)]
    lactose: bool,

    #[arg(long)]
    nuts: bool,

    #[arg(long)]
    gluten: bool,

    #[arg(long)]
    vegetarian: bool,

    /// Preferred taste label, as produced by the taste classifier
    #[arg(long, conflicts_with = "liked")]
    taste: Option<String>,

    /// Title of a catalog recipe the user likes; repeat to derive the preferred taste
    #[arg(long)]
    liked: Vec<String>,

    /// Seed for domain shuffling (overrides config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of menus to generate
    #[arg(long, default_value_t = 1)]
    variants: u32,
}

impl PlanArgs {
    fn profile(&self, catalog: &Catalog) -> UserProfile {
        let bmi = match (self.bmi, self.weight, self.height) {
            (Some(bmi), _, _) => bmi,
            (None, Some(weight), Some(height)) => UserProfile::bmi_from(weight, height),
            _ => UserProfile::default().bmi,
        };

        UserProfile {
            bmi,
            sport: self.sport,
            intolerances: Intolerances {
                lactose: self.lactose,
                nuts: self.nuts,
                gluten: self.gluten,
            },
            vegetarian: self.vegetarian,
            preferred_taste: self.preferred_taste(catalog),
        }
    }

    fn preferred_taste(&self, catalog: &Catalog) -> String {
        if let Some(taste) = &self.taste {
            return taste.to_lowercase();
        }

        let dishes = self
            .liked
            .iter()
            .filter_map(|title| match catalog.get(title) {
                Some(recipe) if !recipe.ingredients_raw.is_empty() => {
                    Some(recipe.ingredients_raw.to_owned())
                }
                Some(recipe) => Some(recipe.ingredients.join(", ")),
                None => {
                    tracing::warn!(title, "liked recipe is not in the catalog");
                    None
                }
            })
            .collect::<Vec<_>>();

        let taste = preferred_taste(&CatalogTastes(catalog), dishes);

        if !self.liked.is_empty() {
            tracing::info!(taste, "preferred taste derived from liked recipes");
        }

        taste
    }
}

/// Pinned seeds advance per variant; unpinned runs draw their own.
fn variant_seed(seed: Option<u64>, variant: u32) -> Option<u64> {
    seed.map(|seed| seed.wrapping_add(u64::from(variant)))
}

pub fn plan(config: weekmenu::Config, args: PlanArgs) -> anyhow::Result<()> {
    let catalog = weekmenu::catalog::load(&config.catalog.path)?;
    let facts = weekmenu::catalog::fact_store(&config.facts, &catalog);

    let planner = Planner::new(&catalog, &facts).max_nodes(config.solver.max_nodes);
    let profile = args.profile(&catalog);
    let seed = args.seed.or(config.solver.seed);

    for variant in 0..args.variants {
        let plan = planner.generate(&profile, variant_seed(seed, variant))?;

        if variant > 0 {
            println!();
        }

        print!("{}", weekmenu::render::render_plan(&plan));
    }

    Ok(())
}
