mod taste;

pub use taste::*;

use serde::Deserialize;
use validator::Validate;

/// BMI below which the plan must include a weight-gaining main meal.
pub const UNDERWEIGHT_BMI: f64 = 18.5;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intolerances {
    #[serde(default)]
    pub lactose: bool,
    #[serde(default)]
    pub nuts: bool,
    #[serde(default)]
    pub gluten: bool,
}

impl Intolerances {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Everything the planner needs to know about the person eating the menu.
///
/// Built once per planning session and never changed while a menu is being solved.
#[derive(Validate, Deserialize, Clone, Debug, PartialEq)]
pub struct UserProfile {
    #[validate(range(min = 1.0, max = 100.0))]
    pub bmi: f64,
    #[serde(default)]
    pub sport: bool,
    #[serde(default)]
    pub intolerances: Intolerances,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default = "default_taste")]
    pub preferred_taste: String,
}

fn default_taste() -> String {
    NEUTRAL_TASTE.to_owned()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            bmi: 22.0,
            sport: false,
            intolerances: Intolerances::none(),
            vegetarian: false,
            preferred_taste: default_taste(),
        }
    }
}

impl UserProfile {
    /// Body mass index from weight in kilograms and height in centimetres.
    pub fn bmi_from(weight_kg: f64, height_cm: f64) -> f64 {
        let height_m = height_cm / 100.0;
        weight_kg / (height_m * height_m)
    }

    pub fn is_underweight(&self) -> bool {
        self.bmi < UNDERWEIGHT_BMI
    }
}
