//! Domain models for the Farm Planner

mod crop;
mod recommendation;

pub use crop::*;
pub use recommendation::*;
