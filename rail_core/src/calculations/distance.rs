//! # Rail Distance
//!
//! Converts two horizontal grid positions into the number of blocks of
//! track needed to connect them. Rails run along the X and Z axes only, so
//! the distance is the Manhattan distance; the vertical (Y) axis is ignored.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::calculations::distance::{distance, Coordinate};
//! use rail_core::units::Blocks;
//!
//! let start: Coordinate = "0 0".parse().unwrap();
//! let end: Coordinate = "10 -5".parse().unwrap();
//!
//! assert_eq!(distance(start, end), Blocks(15));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Blocks;

/// A horizontal grid position (x, z).
///
/// ## JSON Example
///
/// ```json
/// { "x": 120, "z": -340 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub z: i32,
}

impl Coordinate {
    pub fn new(x: i32, z: i32) -> Self {
        Coordinate { x, z }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.z)
    }
}

impl FromStr for Coordinate {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

/// Parse free-form `"x z"` text into a [`Coordinate`].
///
/// Components are separated by any run of whitespace. Anything other than
/// exactly two integer components is rejected with
/// [`CalcError::InvalidCoordinate`].
pub fn parse_coordinate(input: &str) -> CalcResult<Coordinate> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(CalcError::invalid_coordinate(
            input,
            format!("Expected two components 'x z', found {}", parts.len()),
        ));
    }

    let x = parse_component(input, "x", parts[0])?;
    let z = parse_component(input, "z", parts[1])?;
    Ok(Coordinate { x, z })
}

fn parse_component(input: &str, axis: &str, text: &str) -> CalcResult<i32> {
    text.parse::<i32>().map_err(|e| {
        CalcError::invalid_coordinate(input, format!("{} component '{}' is not an integer: {}", axis, text, e))
    })
}

/// Blocks of track between two coordinates: `|b.x - a.x| + |b.z - a.z|`.
pub fn distance(a: Coordinate, b: Coordinate) -> Blocks {
    Blocks(u64::from(a.x.abs_diff(b.x)) + u64::from(a.z.abs_diff(b.z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_mixed_signs() {
        let d = distance(Coordinate::new(0, 0), Coordinate::new(10, -5));
        assert_eq!(d, Blocks(15));
    }

    #[test]
    fn test_distance_same_point() {
        let p = Coordinate::new(-42, 17);
        assert_eq!(distance(p, p), Blocks(0));
    }

    #[test]
    fn test_distance_extremes_do_not_overflow() {
        let a = Coordinate::new(i32::MIN, i32::MIN);
        let b = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(distance(a, b), Blocks(2 * u64::from(u32::MAX)));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("10 -5").unwrap(), Coordinate::new(10, -5));
        assert_eq!(parse_coordinate("  3\t  4 ").unwrap(), Coordinate::new(3, 4));
        assert_eq!("+7 0".parse::<Coordinate>().unwrap(), Coordinate::new(7, 0));
    }

    #[test]
    fn test_parse_coordinate_rejects_malformed() {
        for input in ["abc", "", "10", "1 2 3", "1 two", "1.5 2", "99999999999 0"] {
            let err = parse_coordinate(input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_COORDINATE", "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_error_keeps_input() {
        match parse_coordinate("abc") {
            Err(CalcError::InvalidCoordinate { input, .. }) => assert_eq!(input, "abc"),
            other => panic!("expected InvalidCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let p = Coordinate::new(-300, 1200);
        assert_eq!(p.to_string().parse::<Coordinate>().unwrap(), p);
    }
}
