use strum::VariantArray;
use weekmenu_knowledge::{Clause, FactStore, Predicate, RuleEngine};
use weekmenu_shared::{Catalog, Recipe};

mod helpers;

#[test]
fn test_every_derived_predicate_is_sound() -> anyhow::Result<()> {
    let catalog = helpers::sample_catalog();
    let facts = FactStore::build(&catalog);
    let rules = RuleEngine::new(&facts);

    for recipe in catalog.iter() {
        let title = recipe.title.as_str();

        for predicate in Predicate::VARIANTS {
            let expected = match predicate.clause() {
                Clause::Contains(category) => recipe
                    .ingredients
                    .iter()
                    .any(|i| facts.is_category(category, i)),
                Clause::Flag(flag) => recipe.flag(flag),
                Clause::All(body) => body.iter().all(|p| rules.holds(*p, title)),
            };

            assert_eq!(
                rules.holds(*predicate, title),
                expected,
                "{predicate} disagrees with its clause body for {title}"
            );
        }
    }

    Ok(())
}

#[test]
fn test_muscle_recovery_implies_its_parts() -> anyhow::Result<()> {
    let catalog = helpers::sample_catalog();
    let facts = FactStore::build(&catalog);
    let rules = RuleEngine::new(&facts);

    let mut seen = 0;
    for recipe in catalog.iter() {
        let title = recipe.title.as_str();
        if rules.holds(Predicate::IsMuscleRecovery, title) {
            seen += 1;
            assert!(rules.holds(Predicate::HasProtein, title));
            assert!(rules.holds(Predicate::HasElectrolytes, title));
            assert!(rules.holds(Predicate::HasPotassium, title));
        }
    }

    assert_eq!(seen, 1);

    Ok(())
}

#[test]
fn test_known_recipe_profiles() -> anyhow::Result<()> {
    let catalog = helpers::sample_catalog();
    let facts = FactStore::build(&catalog);
    let rules = RuleEngine::new(&facts);

    let risotto = "grilled_salmon_risotto";
    assert!(rules.holds(Predicate::IsMediterranean, risotto));
    assert!(rules.holds(Predicate::IsWeightGainer, risotto));
    assert!(rules.holds(Predicate::HighFat, risotto));
    assert!(rules.holds(Predicate::IsVitaminFull, risotto));
    assert!(!rules.holds(Predicate::HasProtein, risotto));

    let curry = "chicken_banana_curry";
    assert!(rules.holds(Predicate::IsMuscleRecovery, curry));
    assert!(rules.holds(Predicate::IsPeakPerformance, curry));
    assert!(rules.holds(Predicate::IsComplete, curry));
    assert!(!rules.holds(Predicate::IsWeightGainer, curry));
    assert!(!rules.holds(Predicate::IsMediterranean, curry));

    let stew = "lentil_kale_stew";
    assert!(rules.holds(Predicate::IsSuperVeggie, stew));
    assert!(!rules.holds(Predicate::HighFat, stew));
    assert!(rules.holds(Predicate::NoGluten, stew));

    let bake = "beef_pasta_bake";
    assert!(rules.holds(Predicate::IsWeightGainer, bake));
    assert!(rules.holds(Predicate::IsKetoStyle, bake));
    assert!(!rules.holds(Predicate::IsAthleteDiet, bake));
    assert!(!rules.holds(Predicate::IsDairyFree, bake));
    assert!(!rules.holds(Predicate::IsSafeNutAllergy, bake));

    Ok(())
}

#[test]
fn test_memoised_and_plain_engines_agree() -> anyhow::Result<()> {
    let catalog = helpers::sample_catalog();
    let facts = FactStore::build(&catalog);
    let cached = RuleEngine::new(&facts);
    let plain = RuleEngine::uncached(&facts);

    let titles = catalog
        .iter()
        .map(|r| r.title.as_str())
        .chain(["not_in_catalog"])
        .collect::<Vec<_>>();

    for _ in 0..2 {
        for title in titles.iter() {
            for predicate in Predicate::VARIANTS {
                assert_eq!(
                    cached.holds(*predicate, title),
                    plain.holds(*predicate, title),
                    "{predicate} on {title}"
                );
            }
        }
    }

    Ok(())
}

#[test]
fn test_queries_fail_closed() -> anyhow::Result<()> {
    let catalog = helpers::sample_catalog();
    let facts = FactStore::build(&catalog);
    let rules = RuleEngine::new(&facts);

    assert!(rules.query("is_mediterranean", &["grilled_salmon_risotto"]));
    assert!(!rules.query("is_mediterranean", &["not_in_catalog"]));
    assert!(!rules.query("is_tasty", &["grilled_salmon_risotto"]));
    assert!(!rules.query("contains", &["grilled_salmon_risotto"]));
    assert!(!rules.query("is_mediterranean", &[]));
    assert!(!rules.query("has_protein", &["chicken_banana_curry", "yes"]));
    assert!(!rules.query("is_dairy_free", &["chicken_banana_curry", "maybe"]));

    Ok(())
}

#[test]
fn test_ground_fact_queries() -> anyhow::Result<()> {
    let catalog = helpers::sample_catalog();
    let facts = FactStore::build(&catalog);
    let rules = RuleEngine::new(&facts);

    assert!(rules.query("contains", &["grilled_salmon_risotto", "salmon"]));
    assert!(!rules.query("contains", &["grilled_salmon_risotto", "beef"]));
    assert!(rules.query("taste", &["plain_toast", "neutral"]));
    assert!(rules.query("is_dairy_free", &["chicken_banana_curry", "yes"]));
    assert!(rules.query("nut_free", &["beef_pasta_bake", "no"]));
    assert!(rules.query("is_veg", &["lentil_kale_stew", "yes"]));
    assert!(rules.query("is_fish_source", &["salmon"]));
    assert!(!rules.query("is_fish_source", &["beef"]));

    Ok(())
}

#[test]
fn test_fact_store_construction_is_idempotent() -> anyhow::Result<()> {
    let first = FactStore::build(&helpers::sample_catalog());
    let second = FactStore::build(&helpers::sample_catalog());

    let mut reversed = helpers::sample_recipes();
    reversed.reverse();
    let third = FactStore::build(&Catalog::new(reversed)?);

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(first.len(), third.len());

    Ok(())
}

#[test]
fn test_catalog_spelling_matches_the_taxonomy() -> anyhow::Result<()> {
    let catalog = Catalog::new(vec![
        Recipe::new("crepes", "Sweet").with_ingredients(["Flour", "Whole Milk", "egg"]),
        Recipe::new("satay", "spicy").with_ingredients(["chicken", "peanut butter", "rice"]),
    ])?;
    let facts = FactStore::build(&catalog);
    let rules = RuleEngine::new(&facts);

    assert!(rules.query("taste", &["crepes", "sweet"]));
    assert!(rules.query("taste", &["crepes", "Sweet"]));
    assert!(!rules.query("taste", &["crepes", "spicy"]));

    assert!(rules.query("contains", &["crepes", "whole_milk"]));
    assert!(rules.holds(Predicate::HasHighEnergy, "crepes"));
    assert!(rules.holds(Predicate::HasHighEnergy, "satay"));

    Ok(())
}
