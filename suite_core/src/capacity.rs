//! # Capacity Model
//!
//! Derives the discrete module counts of the building from its continuous
//! envelope. All counts round to nearest with ties away from zero
//! ([`f64::round`]) and are clamped to at least 1. NaN inputs clamp to 1
//! as well. Counts above [`MAX_SINGLE_SIDE_MODULES`] and [`MAX_FLOORS`]
//! clamp to those caps.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::capacity::Capacity;
//! use suite_core::project::ProjectParameters;
//!
//! let capacity = Capacity::from_parameters(&ProjectParameters::default());
//! assert_eq!(capacity.single_side_modules, 13);
//! assert_eq!(capacity.floor_count, 3);
//! assert_eq!(capacity.per_floor_capacity, 25);
//! assert_eq!(capacity.total_residential_modules, 75);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{MAX_FLOORS, MAX_SINGLE_SIDE_MODULES, MODULE_WIDTH};
use crate::project::ProjectParameters;
use crate::units::Meters;

/// Discrete building capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Modules per row
    pub single_side_modules: usize,

    pub floor_count: usize,

    /// Residential modules per floor (both rows minus the elevator slot)
    pub per_floor_capacity: usize,

    /// `per_floor_capacity * floor_count`
    pub total_residential_modules: usize,
}

impl Capacity {
    /// Build a capacity from already-discrete counts.
    pub fn new(single_side_modules: usize, floor_count: usize) -> Self {
        let single_side_modules = single_side_modules.clamp(1, MAX_SINGLE_SIDE_MODULES);
        let floor_count = floor_count.clamp(1, MAX_FLOORS);
        let per_floor_capacity = single_side_modules * 2 - 1;
        Capacity {
            single_side_modules,
            floor_count,
            per_floor_capacity,
            total_residential_modules: per_floor_capacity * floor_count,
        }
    }

    /// Derive counts from the project envelope.
    pub fn from_parameters(params: &ProjectParameters) -> Self {
        Capacity::new(
            single_side_count(params.width),
            floor_count(params.height, params.floor_height),
        )
    }

    /// Index of the elevator slot in the south row
    pub fn elevator_index(&self) -> usize {
        self.single_side_modules / 2
    }
}

/// Modules per row for a building `width`, before capping
pub(crate) fn single_side_count(width: Meters) -> usize {
    rounded_count(width.0 / MODULE_WIDTH.0)
}

/// Floors for a building `height`, before capping
pub(crate) fn floor_count(height: Meters, floor_height: Meters) -> usize {
    rounded_count(height.0 / floor_height.0)
}

/// Round to nearest (ties away from zero), clamp to at least 1.
///
/// Huge ratios saturate at `usize::MAX`; callers cap the result.
fn rounded_count(ratio: f64) -> usize {
    let rounded = ratio.round();
    if rounded.is_nan() || rounded < 1.0 {
        1
    } else if rounded >= usize::MAX as f64 {
        usize::MAX
    } else {
        rounded as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: f64, height: f64, floor_height: f64) -> ProjectParameters {
        ProjectParameters {
            width: Meters(width),
            height: Meters(height),
            floor_height: Meters(floor_height),
            include_stairs: false,
        }
    }

    #[test]
    fn test_reference_envelope() {
        let c = Capacity::from_parameters(&params(49.2, 10.0, 3.175));
        assert_eq!(c.floor_count, 3);
        assert_eq!(c.single_side_modules, 13);
        assert_eq!(c.per_floor_capacity, 25);
        assert_eq!(c.total_residential_modules, 75);
        assert_eq!(c.elevator_index(), 6);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let c = Capacity::from_parameters(&params(20.0, 5.0, 2.0));
        assert_eq!(c.floor_count, 3);
        let c = Capacity::from_parameters(&params(20.0, 3.0, 2.0));
        assert_eq!(c.floor_count, 2);
        // 20 / 3.7846 = 5.28
        assert_eq!(c.single_side_modules, 5);
    }

    #[test]
    fn test_degenerate_inputs_clamp_to_one() {
        let c = Capacity::from_parameters(&params(0.5, 0.1, 3.175));
        assert_eq!(c.single_side_modules, 1);
        assert_eq!(c.floor_count, 1);
        assert_eq!(c.per_floor_capacity, 1);
        assert_eq!(c.total_residential_modules, 1);

        let c = Capacity::from_parameters(&params(f64::NAN, -10.0, 3.175));
        assert_eq!(c.single_side_modules, 1);
        assert_eq!(c.floor_count, 1);
    }

    #[test]
    fn test_new_clamps_zero() {
        let c = Capacity::new(0, 0);
        assert_eq!(c, Capacity::new(1, 1));
    }

    #[test]
    fn test_new_caps_oversized_counts() {
        let c = Capacity::new(usize::MAX, usize::MAX);
        assert_eq!(c.single_side_modules, MAX_SINGLE_SIDE_MODULES);
        assert_eq!(c.floor_count, MAX_FLOORS);
        assert_eq!(c.per_floor_capacity, MAX_SINGLE_SIDE_MODULES * 2 - 1);
        assert_eq!(c.total_residential_modules, c.per_floor_capacity * MAX_FLOORS);
    }

    #[test]
    fn test_huge_envelope_is_capped() {
        let c = Capacity::from_parameters(&params(1e300, 1e300, 3.175));
        assert_eq!(c.single_side_modules, MAX_SINGLE_SIDE_MODULES);
        assert_eq!(c.floor_count, MAX_FLOORS);

        let c = Capacity::from_parameters(&params(f64::INFINITY, 10.0, 3.175));
        assert_eq!(c.single_side_modules, MAX_SINGLE_SIDE_MODULES);
        assert_eq!(c.floor_count, 3);
    }
}
