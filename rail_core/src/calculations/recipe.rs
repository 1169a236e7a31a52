//! # Rail Recipe Calculation
//!
//! Computes the crafting materials for a rail line of a given length.
//!
//! ## Recipe
//!
//! - One powered rail every 32 blocks, rounded up
//! - Every other block gets a normal rail
//! - Each rail (powered or normal) costs 6/16 of an ingot and 1/16 of a stick
//! - Each powered rail also costs 1/16 of a redstone dust
//! - One redstone torch (1 stick + 1 redstone) per powered rail
//! - Ingots are produced in batches of 6
//!
//! Normal rails depend on the powered-rail count, so
//! [`RecipeCalculator::normal_rails`] takes the powered-rail result as an
//! argument. [`RecipeCalculator::compute`] runs every step in order and is
//! the usual entry point.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::calculations::recipe::RecipeCalculator;
//! use rail_core::units::Blocks;
//!
//! let report = RecipeCalculator::new(Blocks(32)).compute().unwrap();
//!
//! assert_eq!(report.powered_rails.rails, 1);
//! assert_eq!(report.normal_rails.rails, 31);
//! assert_eq!(report.totals.sticks, 4);
//! ```

use tracing::debug;

use crate::calculations::distance::{distance, parse_coordinate};
use crate::errors::CalcResult;
use crate::materials::{minimum_craft, Material};
use crate::report::{NormalRails, PoweredRails, RedstoneTorches, ResourceReport, Totals};
use crate::units::Blocks;

/// Blocks between consecutive powered rails
pub const POWERED_RAIL_SPACING: u64 = 32;

/// Rails produced by one crafting batch
const RAILS_PER_BATCH: u64 = 16;

/// Ingots consumed by one crafting batch
const INGOTS_PER_BATCH: u64 = 6;

/// Sticks (and, for powered rails, redstone) consumed by one crafting batch
const STICKS_PER_BATCH: u64 = 1;

/// `ceil(count * numerator / denominator)` without intermediate overflow.
fn ceil_ratio(count: u64, numerator: u64, denominator: u64) -> u64 {
    (count / denominator) * numerator + ((count % denominator) * numerator).div_ceil(denominator)
}

/// Material calculator for a rail line of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeCalculator {
    blocks: Blocks,
}

impl RecipeCalculator {
    pub fn new(blocks: Blocks) -> Self {
        RecipeCalculator { blocks }
    }

    pub fn blocks(&self) -> Blocks {
        self.blocks
    }

    /// Powered rails and their materials.
    pub fn powered_rails(&self) -> CalcResult<PoweredRails> {
        let rails = self.blocks.get().div_ceil(POWERED_RAIL_SPACING);
        let ingots = ceil_ratio(rails, INGOTS_PER_BATCH, RAILS_PER_BATCH);
        let per_rail = ceil_ratio(rails, STICKS_PER_BATCH, RAILS_PER_BATCH);

        Ok(PoweredRails {
            rails,
            gold_ingots: minimum_craft(Material::GoldIngot, ingots)?,
            sticks: per_rail,
            redstone: per_rail,
        })
    }

    /// Normal rails for every block not covered by a powered rail.
    ///
    /// `powered` must come from [`RecipeCalculator::powered_rails`] on the
    /// same calculator.
    pub fn normal_rails(&self, powered: &PoweredRails) -> CalcResult<NormalRails> {
        let rails = self.blocks.get().saturating_sub(powered.rails);
        let ingots = ceil_ratio(rails, INGOTS_PER_BATCH, RAILS_PER_BATCH);

        Ok(NormalRails {
            rails,
            iron_ingots: minimum_craft(Material::IronIngot, ingots)?,
            sticks: ceil_ratio(rails, STICKS_PER_BATCH, RAILS_PER_BATCH),
        })
    }

    /// One torch, stick and redstone dust per powered rail.
    pub fn redstone_torches(&self, powered_rail_count: u64) -> RedstoneTorches {
        RedstoneTorches {
            torches: powered_rail_count,
            sticks: powered_rail_count,
            redstone: powered_rail_count,
        }
    }

    /// Full report: powered rails, then normal rails, then torches and totals.
    pub fn compute(&self) -> CalcResult<ResourceReport> {
        let powered = self.powered_rails()?;
        let normal = self.normal_rails(&powered)?;
        let torches = self.redstone_torches(powered.rails);
        let totals = Totals::from_sections(&normal, &powered, &torches)?;

        debug!(
            blocks = self.blocks.get(),
            normal_rails = normal.rails,
            powered_rails = powered.rails,
            iron_ingots = totals.iron_ingots,
            gold_ingots = totals.gold_ingots,
            "computed rail materials"
        );

        Ok(ResourceReport {
            blocks: self.blocks,
            normal_rails: normal,
            powered_rails: powered,
            redstone_torches: torches,
            totals,
        })
    }
}

/// Parse two `"x z"` coordinate strings and compute the report for the rail
/// line between them.
///
/// Fails with [`crate::CalcError::InvalidCoordinate`] before any calculation
/// if either coordinate is malformed.
pub fn calculate_route(start: &str, end: &str) -> CalcResult<ResourceReport> {
    let from = parse_coordinate(start)?;
    let to = parse_coordinate(end)?;
    let blocks = distance(from, to);
    debug!(%from, %to, blocks = blocks.get(), "route distance");

    RecipeCalculator::new(blocks).compute()
}
