mod error;
pub mod recipe;
pub mod user;

pub use error::*;
pub use recipe::{Catalog, DietaryFlag, Recipe};
pub use user::{Intolerances, NEUTRAL_TASTE, TastePredictor, UserProfile, preferred_taste};
