use strum::{AsRefStr, Display, VariantArray};
use weekmenu_knowledge::{Predicate, RuleEngine};
use weekmenu_shared::UserProfile;

/// Week-wide coverage requirement: at least one of the 14 lunches and dinners
/// must satisfy one of the goal's predicates.
#[derive(Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    Mediterranean,
    Sport,
    WeightGain,
    SuperVeggie,
}

impl Goal {
    pub fn predicates(self) -> &'static [Predicate] {
        match self {
            Goal::Mediterranean => &[Predicate::IsMediterranean],
            Goal::Sport => &[
                Predicate::IsMuscleRecovery,
                Predicate::IsPeakPerformance,
                Predicate::IsAthleteDiet,
            ],
            Goal::WeightGain => &[Predicate::IsWeightGainer],
            Goal::SuperVeggie => &[Predicate::IsSuperVeggie],
        }
    }

    pub fn is_met_by(self, rules: &RuleEngine<'_>, recipe: &str) -> bool {
        rules.holds_any(self.predicates(), recipe)
    }

    /// Goals that apply to `profile`; the mediterranean goal always does.
    pub fn required(profile: &UserProfile) -> Vec<Goal> {
        let mut goals = vec![Goal::Mediterranean];

        if profile.sport {
            goals.push(Goal::Sport);
        }

        if profile.is_underweight() {
            goals.push(Goal::WeightGain);
        }

        if profile.vegetarian {
            goals.push(Goal::SuperVeggie);
        }

        goals
    }
}
