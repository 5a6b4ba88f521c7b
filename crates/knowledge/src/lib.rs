mod fact;
mod rule;
pub mod snapshot;
mod store;

pub use fact::*;
pub use rule::*;
pub use store::*;
