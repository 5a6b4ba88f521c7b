use std::cell::RefCell;
use std::collections::HashMap;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use weekmenu_shared::DietaryFlag;

use crate::{Category, FactStore};

/// Derived predicates over a single recipe.
///
/// String forms are the snake_case rule names (`is_mediterranean`, `no_gluten`, ...).
#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum Predicate {
    HasProtein,
    HasFat,
    HasCarb,
    HasFiber,
    HasVeggies,
    HasFish,
    HasElectrolytes,
    HasPotassium,
    HasHighEnergy,
    IsMuscleRecovery,
    IsWeightGainer,
    IsPeakPerformance,
    IsComplete,
    IsVitaminFull,
    IsMediterranean,
    IsAthleteDiet,
    IsKetoStyle,
    IsSuperVeggie,
    HighFat,
    IsDairyFree,
    NutFree,
    NoGluten,
    IsVeg,
    IsSafeNutAllergy,
}

/// Body of a derived predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clause {
    /// At least one ingredient of the recipe belongs to the category.
    Contains(Category),
    /// Direct lookup of a dietary fact.
    Flag(DietaryFlag),
    /// Every listed predicate holds for the same recipe.
    All(&'static [Predicate]),
}

impl Predicate {
    pub fn clause(self) -> Clause {
        use Predicate::*;

        match self {
            HasProtein => Clause::Contains(Category::Protein),
            HasFat => Clause::Contains(Category::Fat),
            HasCarb => Clause::Contains(Category::Carb),
            HasFiber => Clause::Contains(Category::Fiber),
            HasVeggies => Clause::Contains(Category::Vegetable),
            HasFish => Clause::Contains(Category::Fish),
            HasElectrolytes => Clause::Contains(Category::Electrolyte),
            HasPotassium => Clause::Contains(Category::Potassium),
            HasHighEnergy => Clause::Contains(Category::HighCalorie),
            IsMuscleRecovery => Clause::All(&[HasProtein, HasElectrolytes, HasPotassium]),
            IsWeightGainer => Clause::All(&[HasHighEnergy, HasCarb, HasFat]),
            IsPeakPerformance => Clause::All(&[IsMuscleRecovery, HasCarb]),
            IsComplete => Clause::All(&[HasProtein, HasCarb, HasFat]),
            IsVitaminFull => Clause::All(&[HasVeggies, HasFish]),
            IsMediterranean => Clause::All(&[HasFish, HasVeggies, HasCarb]),
            IsAthleteDiet => Clause::All(&[HasProtein, HasCarb, HasFiber]),
            IsKetoStyle => Clause::All(&[HasProtein, HasFat]),
            IsSuperVeggie => Clause::All(&[IsVeg, HasFiber, HasVeggies]),
            HighFat => Clause::All(&[HasFat]),
            IsDairyFree => Clause::Flag(DietaryFlag::DairyFree),
            NutFree => Clause::Flag(DietaryFlag::NutFree),
            NoGluten => Clause::Flag(DietaryFlag::GlutenFree),
            IsVeg => Clause::Flag(DietaryFlag::Vegetarian),
            IsSafeNutAllergy => Clause::All(&[NutFree]),
        }
    }

    /// Predicates referenced directly by this predicate's body.
    pub fn dependencies(self) -> &'static [Predicate] {
        match self.clause() {
            Clause::All(body) => body,
            Clause::Contains(_) | Clause::Flag(_) => &[],
        }
    }
}

type Memo = HashMap<Predicate, HashMap<String, bool>>;

/// Evaluates derived predicates against a frozen [`FactStore`].
///
/// Queries are always ground, so evaluation is a recursive walk of the clause
/// bodies; the clause graph is acyclic and needs no cycle detection.
pub struct RuleEngine<'a> {
    facts: &'a FactStore,
    memo: Option<RefCell<Memo>>,
}

impl<'a> RuleEngine<'a> {
    /// Engine that memoises every `(predicate, recipe)` answer for the session.
    pub fn new(facts: &'a FactStore) -> Self {
        Self {
            facts,
            memo: Some(RefCell::new(HashMap::new())),
        }
    }

    pub fn uncached(facts: &'a FactStore) -> Self {
        Self { facts, memo: None }
    }

    pub fn facts(&self) -> &'a FactStore {
        self.facts
    }

    pub fn holds(&self, predicate: Predicate, recipe: &str) -> bool {
        let Some(memo) = &self.memo else {
            return self.evaluate(predicate, recipe);
        };

        let cached = memo
            .borrow()
            .get(&predicate)
            .and_then(|answers| answers.get(recipe))
            .copied();

        if let Some(value) = cached {
            return value;
        }

        let value = self.evaluate(predicate, recipe);

        memo.borrow_mut()
            .entry(predicate)
            .or_default()
            .insert(recipe.to_owned(), value);

        value
    }

    fn evaluate(&self, predicate: Predicate, recipe: &str) -> bool {
        match predicate.clause() {
            Clause::Contains(category) => self
                .facts
                .ingredients(recipe)
                .any(|ingredient| self.facts.is_category(category, ingredient)),
            Clause::Flag(flag) => self.facts.flag(recipe, flag).unwrap_or(false),
            Clause::All(body) => body.iter().all(|p| self.holds(*p, recipe)),
        }
    }

    /// True when any of `predicates` holds for `recipe`.
    pub fn holds_any(&self, predicates: &[Predicate], recipe: &str) -> bool {
        predicates.iter().any(|p| self.holds(*p, recipe))
    }

    /// Name-based query with ground arguments.
    ///
    /// Unknown predicate names, wrong arities and unknown atoms all answer `false`.
    pub fn query(&self, name: &str, args: &[&str]) -> bool {
        match (name, args) {
            ("contains", [recipe, ingredient]) => self.facts.contains(recipe, ingredient),
            ("taste", [recipe, taste]) => self
                .facts
                .taste(recipe)
                .is_some_and(|known| known.eq_ignore_ascii_case(taste)),
            (_, [atom]) => {
                if let Ok(predicate) = name.parse::<Predicate>() {
                    return self.holds(predicate, atom);
                }

                if let Ok(category) = name.parse::<Category>() {
                    return self.facts.is_category(category, atom);
                }

                tracing::debug!(predicate = name, "unknown predicate, answering false");
                false
            }
            (_, [recipe, answer]) => {
                let Ok(predicate) = name.parse::<Predicate>() else {
                    tracing::debug!(predicate = name, "unknown predicate, answering false");
                    return false;
                };

                let Clause::Flag(flag) = predicate.clause() else {
                    tracing::debug!(predicate = name, "predicate takes one argument");
                    return false;
                };

                let expected = match *answer {
                    "yes" => true,
                    "no" => false,
                    _ => return false,
                };

                self.facts.flag(recipe, flag) == Some(expected)
            }
            _ => {
                tracing::debug!(predicate = name, arity = args.len(), "malformed query");
                false
            }
        }
    }
}
