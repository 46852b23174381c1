//! Business logic services for the Farm Planner

pub mod location_cache;
pub mod planner;

pub use location_cache::LocationCache;
pub use planner::PlannerService;
