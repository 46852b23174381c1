//! Shared types and models for the Farm Planner
//!
//! This crate contains the crop recommendation core shared between the
//! backend, the browser (via WASM), and other components of the system.
//! Nothing in here performs I/O.

pub mod error;
pub mod i18n;
pub mod models;
pub mod planner;
pub mod types;
pub mod validation;

pub use error::*;
pub use i18n::*;
pub use models::*;
pub use planner::*;
pub use types::*;
pub use validation::*;
