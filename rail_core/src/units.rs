//! # Unit Types
//!
//! Lightweight newtypes for the two quantities the calculator deals in:
//! travel distance in blocks, and item counts split into inventory stacks.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::units::{Blocks, Stacks};
//!
//! let distance = Blocks(150);
//! assert_eq!(distance.get(), 150);
//!
//! let split = Stacks::from_count(150);
//! assert_eq!((split.stacks, split.leftover), (2, 22));
//! assert_eq!(split.to_string(), "2 stacks and 22");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Items per inventory stack
pub const STACK_SIZE: u64 = 64;

// ============================================================================
// Distance
// ============================================================================

/// Horizontal travel distance in blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blocks(pub u64);

impl Blocks {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Blocks {
    fn from(blocks: u64) -> Self {
        Blocks(blocks)
    }
}

impl fmt::Display for Blocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}

// ============================================================================
// Stacks
// ============================================================================

/// An item count expressed as full stacks plus leftover items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stacks {
    /// Number of full 64-item stacks
    pub stacks: u64,
    /// Items left over after filling the stacks
    pub leftover: u64,
}

impl Stacks {
    /// Split a raw item count into stacks and leftover items.
    pub fn from_count(count: u64) -> Self {
        Stacks {
            stacks: count / STACK_SIZE,
            leftover: count % STACK_SIZE,
        }
    }

    /// Total number of items represented
    pub fn total(&self) -> u64 {
        self.stacks * STACK_SIZE + self.leftover
    }
}

impl fmt::Display for Stacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stacks and {}", self.stacks, self.leftover)
    }
}
