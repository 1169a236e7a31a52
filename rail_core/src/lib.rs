//! # rail_core - Minecraft Rail Material Calculator
//!
//! `rail_core` computes the crafting materials (rails, ingots, sticks and
//! redstone) needed to lay a rail line between two points on the Minecraft
//! X/Z grid. All inputs and outputs are JSON-serializable so the results can
//! be handed straight to a web page, a terminal, or another program.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a fresh calculation per request, no shared state
//! - **JSON-First**: reports serialize with camelCase keys
//! - **Rich Errors**: malformed input is a structured error, never a bogus number
//!
//! ## Quick Start
//!
//! ```rust
//! use rail_core::calculate_route;
//!
//! let report = calculate_route("0 0", "10 -5").unwrap();
//! assert_eq!(report.blocks.get(), 15);
//!
//! let json = report.to_json().unwrap();
//! assert!(json.contains("\"poweredRails\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - distance and recipe calculations
//! - [`report`] - the resource report and its display slots
//! - [`materials`] - crafting materials and batch rounding
//! - [`units`] - block and stack newtypes
//! - [`errors`] - structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_route, distance, parse_coordinate, Coordinate, RecipeCalculator};
pub use errors::{CalcError, CalcResult};
pub use materials::{minimum_craft, Material};
pub use report::{DisplaySlot, ReportSection, ResourceReport};
pub use units::{Blocks, Stacks};
