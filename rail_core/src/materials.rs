//! # Crafting Materials
//!
//! The raw materials a rail line consumes, and the batch sizes they have to
//! be produced in.
//!
//! ## Batch Thresholds
//!
//! | Material   | Threshold |
//! |------------|-----------|
//! | Iron ingot | 6         |
//! | Gold ingot | 6         |
//! | Stick      | 1         |
//! | Redstone   | 1         |
//!
//! ## Example
//!
//! ```rust
//! use rail_core::materials::{minimum_craft, Material};
//!
//! assert_eq!(minimum_craft(Material::IronIngot, 12).unwrap(), 12);
//! assert_eq!(minimum_craft(Material::GoldIngot, 1).unwrap(), 6);
//! assert_eq!(minimum_craft(Material::Stick, 3).unwrap(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A crafting material used by rails and redstone torches.
///
/// ## JSON Serialization
///
/// Materials serialize as their camelCase key, e.g. `"ironIngot"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Material {
    IronIngot,
    GoldIngot,
    Stick,
    Redstone,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::IronIngot,
        Material::GoldIngot,
        Material::Stick,
        Material::Redstone,
    ];

    /// Minimum multiple this material must be produced in.
    pub fn batch_threshold(&self) -> u64 {
        match self {
            Material::IronIngot => 6,
            Material::GoldIngot => 6,
            Material::Stick => 1,
            Material::Redstone => 1,
        }
    }

    /// Key used in serialized reports and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Material::IronIngot => "ironIngot",
            Material::GoldIngot => "goldIngot",
            Material::Stick => "stick",
            Material::Redstone => "redstone",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::IronIngot => "Iron Ingots",
            Material::GoldIngot => "Gold Ingots",
            Material::Stick => "Sticks",
            Material::Redstone => "Redstone",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Material {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| CalcError::material_not_found(s))
    }
}

/// Round `amount` up to the next multiple of the material's batch threshold.
///
/// Amounts that are already a multiple are returned unchanged, so the
/// function is idempotent and never returns less than `amount`. Fails with
/// [`CalcError::QuantityOverflow`] when the next multiple exceeds `u64::MAX`.
pub fn minimum_craft(material: Material, amount: u64) -> CalcResult<u64> {
    amount
        .checked_next_multiple_of(material.batch_threshold())
        .ok_or_else(|| CalcError::quantity_overflow(material.key(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_thresholds() {
        assert_eq!(Material::IronIngot.batch_threshold(), 6);
        assert_eq!(Material::GoldIngot.batch_threshold(), 6);
        assert_eq!(Material::Stick.batch_threshold(), 1);
        assert_eq!(Material::Redstone.batch_threshold(), 1);
    }

    #[test]
    fn test_minimum_craft_rounds_ingots_up() {
        assert_eq!(minimum_craft(Material::IronIngot, 0).unwrap(), 0);
        assert_eq!(minimum_craft(Material::IronIngot, 1).unwrap(), 6);
        assert_eq!(minimum_craft(Material::IronIngot, 6).unwrap(), 6);
        assert_eq!(minimum_craft(Material::IronIngot, 7).unwrap(), 12);
        assert_eq!(minimum_craft(Material::GoldIngot, 13).unwrap(), 18);
    }

    #[test]
    fn test_minimum_craft_leaves_unit_materials_alone() {
        for amount in [0, 1, 5, 17, 63] {
            assert_eq!(minimum_craft(Material::Stick, amount).unwrap(), amount);
            assert_eq!(minimum_craft(Material::Redstone, amount).unwrap(), amount);
        }
    }

    #[test]
    fn test_minimum_craft_near_u64_max() {
        // u64::MAX % 6 == 3
        let top = u64::MAX - 3;
        assert_eq!(minimum_craft(Material::IronIngot, top).unwrap(), top);
        assert_eq!(minimum_craft(Material::GoldIngot, top - 5).unwrap(), top);

        let err = minimum_craft(Material::IronIngot, u64::MAX - 1).unwrap_err();
        assert_eq!(err, CalcError::quantity_overflow("ironIngot", u64::MAX - 1));

        assert_eq!(minimum_craft(Material::Stick, u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ironIngot".parse::<Material>().unwrap(), Material::IronIngot);
        assert_eq!("redstone".parse::<Material>().unwrap(), Material::Redstone);

        let err = "diamond".parse::<Material>().unwrap_err();
        assert_eq!(err, CalcError::material_not_found("diamond"));
    }

    #[test]
    fn test_material_serialization() {
        let json = serde_json::to_string(&Material::GoldIngot).unwrap();
        assert_eq!(json, "\"goldIngot\"");
        for material in Material::ALL {
            let json = serde_json::to_string(&material).unwrap();
            assert_eq!(json, format!("\"{}\"", material.key()));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Material::IronIngot.to_string(), "Iron Ingots");
        assert_eq!(Material::Stick.display_name(), "Sticks");
    }
}
