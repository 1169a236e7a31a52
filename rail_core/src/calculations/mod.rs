//! # Rail Calculations
//!
//! The two calculation steps, used in sequence:
//!
//! - [`distance`] - coordinate parsing and Manhattan track length
//! - [`recipe`] - materials for a track of a given length
//!
//! [`recipe::calculate_route`] chains both for the common case of starting
//! from two coordinate strings.

pub mod distance;
pub mod recipe;

// Re-export commonly used types
pub use distance::{distance, parse_coordinate, Coordinate};
pub use recipe::{calculate_route, RecipeCalculator, POWERED_RAIL_SPACING};
