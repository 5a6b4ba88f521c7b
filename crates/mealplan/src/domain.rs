use weekmenu_knowledge::{Predicate, RuleEngine};
use weekmenu_shared::{Catalog, DomainKind, Error, Intolerances, UserProfile};

/// Tastes that make a recipe a breakfast candidate.
pub const BREAKFAST_TASTES: &[&str] = &["sweet", "neutral"];

pub fn is_breakfast_taste(taste: &str) -> bool {
    BREAKFAST_TASTES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(taste))
}

/// True when `recipe` passes every intolerance gate of the profile.
pub fn is_tolerated(rules: &RuleEngine<'_>, intolerances: &Intolerances, recipe: &str) -> bool {
    (!intolerances.lactose || rules.holds(Predicate::IsDairyFree, recipe))
        && (!intolerances.nuts || rules.holds(Predicate::NutFree, recipe))
        && (!intolerances.gluten || rules.holds(Predicate::NoGluten, recipe))
}

/// Candidate recipe titles for breakfast slots and for lunch/dinner slots, in
/// catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Domains {
    pub breakfast: Vec<String>,
    pub main: Vec<String>,
}

impl Domains {
    /// A sweet or neutral recipe whose taste is also the preferred one lands in
    /// both domains.
    pub fn build(
        catalog: &Catalog,
        rules: &RuleEngine<'_>,
        profile: &UserProfile,
    ) -> weekmenu_shared::Result<Self> {
        let mut domains = Self::default();

        for recipe in catalog.iter() {
            let title = recipe.title.as_str();

            if !is_tolerated(rules, &profile.intolerances, title) {
                continue;
            }

            let taste = recipe.primary_taste.as_str();
            let breakfast = is_breakfast_taste(taste);

            if breakfast {
                domains.breakfast.push(title.to_owned());
            }

            if !breakfast || taste.eq_ignore_ascii_case(&profile.preferred_taste) {
                domains.main.push(title.to_owned());
            }
        }

        tracing::info!(
            breakfast = domains.breakfast.len(),
            main = domains.main.len(),
            "meal domains built"
        );

        domains.ensure_satisfiable()?;

        Ok(domains)
    }

    pub fn ensure_satisfiable(&self) -> weekmenu_shared::Result<()> {
        let empty = if self.breakfast.is_empty() {
            DomainKind::Breakfast
        } else if self.main.is_empty() {
            DomainKind::Main
        } else {
            return Ok(());
        };

        tracing::warn!(domain = %empty, "domain is empty, nothing to search");

        Err(Error::UnsatisfiableDomain(empty))
    }
}
