//! # Resource Report
//!
//! The result of a rail calculation: one section per crafted component plus
//! a totals section. A report is plain data; presentation adapters either
//! serialize it or walk [`ResourceReport::display_slots`].
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "blocks": 32,
//!   "normalRails": { "rails": 31, "ironIngots": 12, "sticks": 2 },
//!   "poweredRails": { "rails": 1, "goldIngots": 6, "sticks": 1, "redstone": 1 },
//!   "redstoneTorches": { "torches": 1, "sticks": 1, "redstone": 1 },
//!   "totals": {
//!     "normalRails": 31, "poweredRails": 1, "redstoneTorches": 1,
//!     "ironIngots": 12, "goldIngots": 6, "sticks": 4, "redstone": 2
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{minimum_craft, Material};
use crate::units::{Blocks, Stacks};

/// Threshold used when rounding the gold-ingot total.
///
/// This is the iron-ingot threshold, not the gold-ingot one. Both are 6 so
/// the result is the same; it is kept as a named constant so the choice is
/// visible and pinned by tests until the intended material is confirmed.
pub const TOTAL_GOLD_INGOT_THRESHOLD_MATERIAL: Material = Material::IronIngot;

// ============================================================================
// Sections
// ============================================================================

/// Materials for the unpowered rails filling the rest of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalRails {
    pub rails: u64,
    pub iron_ingots: u64,
    pub sticks: u64,
}

/// Materials for the powered rails placed every 32 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoweredRails {
    pub rails: u64,
    pub gold_ingots: u64,
    pub sticks: u64,
    pub redstone: u64,
}

/// Materials for the redstone torches keeping the powered rails charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedstoneTorches {
    pub torches: u64,
    pub sticks: u64,
    pub redstone: u64,
}

/// Totals across all sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub normal_rails: u64,
    pub powered_rails: u64,
    pub redstone_torches: u64,
    pub iron_ingots: u64,
    pub gold_ingots: u64,
    pub sticks: u64,
    pub redstone: u64,
}

impl Totals {
    /// Aggregate the three component sections.
    pub fn from_sections(
        normal: &NormalRails,
        powered: &PoweredRails,
        torches: &RedstoneTorches,
    ) -> CalcResult<Self> {
        Ok(Totals {
            normal_rails: normal.rails,
            powered_rails: powered.rails,
            redstone_torches: torches.torches,
            iron_ingots: minimum_craft(Material::IronIngot, normal.iron_ingots)?,
            gold_ingots: minimum_craft(TOTAL_GOLD_INGOT_THRESHOLD_MATERIAL, powered.gold_ingots)?,
            sticks: checked_sum("sticks", &[normal.sticks, powered.sticks, torches.sticks])?,
            redstone: checked_sum("redstone", &[powered.redstone, torches.redstone])?,
        })
    }
}

fn checked_sum(quantity: &str, parts: &[u64]) -> CalcResult<u64> {
    parts.iter().try_fold(0u64, |acc, &part| {
        acc.checked_add(part)
            .ok_or_else(|| CalcError::quantity_overflow(quantity, acc))
    })
}

// ============================================================================
// Report
// ============================================================================

/// Complete material requirements for one rail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReport {
    /// Travel distance the report was computed for
    pub blocks: Blocks,
    pub normal_rails: NormalRails,
    pub powered_rails: PoweredRails,
    pub redstone_torches: RedstoneTorches,
    pub totals: Totals,
}

/// Report section a display slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportSection {
    NormalRails,
    PoweredRails,
    RedstoneTorches,
    Totals,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::NormalRails,
        ReportSection::PoweredRails,
        ReportSection::RedstoneTorches,
        ReportSection::Totals,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportSection::NormalRails => "Normal Rails",
            ReportSection::PoweredRails => "Powered Rails",
            ReportSection::RedstoneTorches => "Redstone Torches",
            ReportSection::Totals => "Totals",
        }
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One named value of a report, ready to be bound to a display element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySlot {
    /// Stable element id, e.g. `"powered-rails-gold-ingots"`
    pub id: &'static str,
    pub section: ReportSection,
    pub label: &'static str,
    pub amount: u64,
    /// Stack/leftover tooltip
    pub stacks: Stacks,
}

impl DisplaySlot {
    fn new(id: &'static str, section: ReportSection, label: &'static str, amount: u64) -> Self {
        DisplaySlot {
            id,
            section,
            label,
            amount,
            stacks: Stacks::from_count(amount),
        }
    }
}

impl ResourceReport {
    /// Flatten the report into named display slots, grouped by section in
    /// display order.
    pub fn display_slots(&self) -> Vec<DisplaySlot> {
        use ReportSection as S;

        let n = &self.normal_rails;
        let p = &self.powered_rails;
        let r = &self.redstone_torches;
        let t = &self.totals;

        vec![
            DisplaySlot::new("normal-rails", S::NormalRails, "Rails", n.rails),
            DisplaySlot::new("normal-rails-iron-ingots", S::NormalRails, "Iron Ingots", n.iron_ingots),
            DisplaySlot::new("normal-rails-sticks", S::NormalRails, "Sticks", n.sticks),
            DisplaySlot::new("powered-rails", S::PoweredRails, "Powered Rails", p.rails),
            DisplaySlot::new("powered-rails-gold-ingots", S::PoweredRails, "Gold Ingots", p.gold_ingots),
            DisplaySlot::new("powered-rails-sticks", S::PoweredRails, "Sticks", p.sticks),
            DisplaySlot::new("powered-rails-redstone", S::PoweredRails, "Redstone", p.redstone),
            DisplaySlot::new("redstone-torches", S::RedstoneTorches, "Redstone Torches", r.torches),
            DisplaySlot::new("redstone-torches-sticks", S::RedstoneTorches, "Sticks", r.sticks),
            DisplaySlot::new("redstone-torches-redstone", S::RedstoneTorches, "Redstone", r.redstone),
            DisplaySlot::new("totals-normal-rails", S::Totals, "Rails", t.normal_rails),
            DisplaySlot::new("totals-powered-rails", S::Totals, "Powered Rails", t.powered_rails),
            DisplaySlot::new("totals-redstone-torches", S::Totals, "Redstone Torches", t.redstone_torches),
            DisplaySlot::new("totals-iron-ingots", S::Totals, "Iron Ingots", t.iron_ingots),
            DisplaySlot::new("totals-gold-ingots", S::Totals, "Gold Ingots", t.gold_ingots),
            DisplaySlot::new("totals-sticks", S::Totals, "Sticks", t.sticks),
            DisplaySlot::new("totals-redstone", S::Totals, "Redstone", t.redstone),
        ]
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
