use std::fmt;

use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// Lunch and dinner draw from the main domain.
    pub fn is_main(&self) -> bool {
        !matches!(self, MealType::Breakfast)
    }
}

/// One (day, meal) position of the weekly menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub day: Day,
    pub meal: MealType,
}

pub const SLOT_COUNT: usize = 21;

impl Slot {
    pub fn new(day: Day, meal: MealType) -> Self {
        Self { day, meal }
    }

    /// All 21 slots, Monday to Sunday, breakfast then lunch then dinner.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::VARIANTS.iter().flat_map(|day| {
            MealType::VARIANTS
                .iter()
                .map(move |meal| Slot::new(*day, *meal))
        })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.meal)
    }
}
