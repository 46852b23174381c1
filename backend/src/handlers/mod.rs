//! HTTP handlers for the Farm Planner

pub mod crops;
pub mod health;
pub mod location;
pub mod recommendation;

pub use crops::*;
pub use health::*;
pub use location::*;
pub use recommendation::*;
