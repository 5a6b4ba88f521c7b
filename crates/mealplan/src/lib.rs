mod domain;
mod goal;
mod menu;
mod planner;
mod scheduler;
mod slot;

pub use domain::*;
pub use goal::*;
pub use menu::*;
pub use planner::*;
pub use scheduler::*;
pub use slot::*;
