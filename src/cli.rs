pub mod facts;
pub mod plan;
