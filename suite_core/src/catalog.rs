//! # Suite Catalog
//!
//! The closed catalog of residential suite types plus the two non-residential
//! descriptors (stair and elevator), and the fixed building geometry they
//! are laid out in.
//!
//! Every floor has two parallel rows of modules separated by a corridor. The
//! north row is the corridor side; the south row carries the elevator in its
//! middle slot. Rows differ in depth, so a module's area depends on its row.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::catalog::{SuiteType, Row};
//!
//! let suite = SuiteType::TwoBed;
//! assert_eq!(suite.module_count(), 3);
//! assert_eq!(suite.unit_code(Row::North), "S2C");
//! assert_eq!(SuiteType::from_str_flexible("2-bed").unwrap(), SuiteType::TwoBed);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LayoutError, LayoutResult};
use crate::units::{Meters, SqMeters};

/// Width of one structural module along a row (12 ft 5 in)
pub const MODULE_WIDTH: Meters = Meters(3.7846);

/// Depth of the corridor-side (north) row
pub const CORRIDOR_SIDE_DEPTH: Meters = Meters(7.3152);

/// Depth of the non-corridor-side (south) row
pub const NON_CORRIDOR_SIDE_DEPTH: Meters = Meters(8.5344);

/// Floor area charged per stair module
pub const STAIR_MODULE_AREA: SqMeters = SqMeters(20.0);

/// Stair modules per floor (one stair at each end of the corridor)
pub const STAIRS_PER_FLOOR: usize = 2;

/// Allowed floor-to-floor heights: 10 ft, 10 ft 5 in, 11 ft
pub const ALLOWED_FLOOR_HEIGHTS: [Meters; 3] = [Meters(3.048), Meters(3.175), Meters(3.3528)];

/// Largest supported row length, in modules. Validation rejects wider
/// envelopes; the capacity model clamps to it.
pub const MAX_SINGLE_SIDE_MODULES: usize = 64;

/// Largest supported floor count. Validation rejects taller envelopes; the
/// capacity model clamps to it.
pub const MAX_FLOORS: usize = 40;

/// One of the two module rows on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    /// Corridor-side row
    North,
    /// Non-corridor-side row, holds the elevator
    South,
}

impl Row {
    /// Both rows in scan order
    pub const ALL: [Row; 2] = [Row::North, Row::South];

    /// Whether this row is the corridor side
    pub fn is_corridor_side(self) -> bool {
        matches!(self, Row::North)
    }

    /// Module depth for this row
    pub fn depth(self) -> Meters {
        match self {
            Row::North => CORRIDOR_SIDE_DEPTH,
            Row::South => NON_CORRIDOR_SIDE_DEPTH,
        }
    }

    /// Floor area of a single module in this row
    pub fn module_area(self) -> SqMeters {
        MODULE_WIDTH * self.depth()
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Row::North => write!(f, "north"),
            Row::South => write!(f, "south"),
        }
    }
}

/// Residential suite types.
///
/// Variant order is the allocation priority: largest module count first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SuiteType {
    /// Three-bedroom suite, 4 modules
    #[serde(rename = "three-bed")]
    ThreeBed,
    /// Two-bedroom suite, 3 modules
    #[serde(rename = "two-bed")]
    TwoBed,
    /// One-bedroom suite, 2 modules
    #[serde(rename = "one-bed")]
    OneBed,
    /// Studio, 1 module
    #[serde(rename = "studio")]
    Studio,
}

/// Read-only catalog entry for a suite type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuiteDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub module_count: usize,
    /// Display color as a hex string
    pub color: &'static str,
    /// Unit code when placed on the corridor side
    pub corridor_code: &'static str,
    /// Unit code when placed away from the corridor
    pub no_corridor_code: &'static str,
}

const THREE_BED: SuiteDescriptor = SuiteDescriptor {
    id: "three-bed",
    name: "Three Bedroom",
    module_count: 4,
    color: "#e76f51",
    corridor_code: "S3C",
    no_corridor_code: "S3",
};

const TWO_BED: SuiteDescriptor = SuiteDescriptor {
    id: "two-bed",
    name: "Two Bedroom",
    module_count: 3,
    color: "#f4a261",
    corridor_code: "S2C",
    no_corridor_code: "S2",
};

const ONE_BED: SuiteDescriptor = SuiteDescriptor {
    id: "one-bed",
    name: "One Bedroom",
    module_count: 2,
    color: "#2a9d8f",
    corridor_code: "S1C",
    no_corridor_code: "S1",
};

const STUDIO: SuiteDescriptor = SuiteDescriptor {
    id: "studio",
    name: "Studio",
    module_count: 1,
    color: "#8ecae6",
    corridor_code: "S0C",
    no_corridor_code: "S0",
};

impl SuiteType {
    /// All suite types in allocation priority order (largest first)
    pub const ALL: [SuiteType; 4] = [
        SuiteType::ThreeBed,
        SuiteType::TwoBed,
        SuiteType::OneBed,
        SuiteType::Studio,
    ];

    /// Catalog entry for this type
    pub fn descriptor(self) -> &'static SuiteDescriptor {
        match self {
            SuiteType::ThreeBed => &THREE_BED,
            SuiteType::TwoBed => &TWO_BED,
            SuiteType::OneBed => &ONE_BED,
            SuiteType::Studio => &STUDIO,
        }
    }

    /// Stable id (e.g., "two-bed")
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    /// Number of contiguous modules this suite occupies
    pub fn module_count(self) -> usize {
        self.descriptor().module_count
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        self.descriptor().name
    }

    /// Display color
    pub fn color(self) -> &'static str {
        self.descriptor().color
    }

    /// Unit code for a suite placed in `row`
    pub fn unit_code(self, row: Row) -> &'static str {
        let d = self.descriptor();
        if row.is_corridor_side() {
            d.corridor_code
        } else {
            d.no_corridor_code
        }
    }

    /// Largest suite type that fits in `capacity` modules, if any
    pub fn largest_fitting(capacity: usize) -> Option<SuiteType> {
        SuiteType::ALL
            .into_iter()
            .find(|t| t.module_count() <= capacity)
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> LayoutResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "studio" | "s0" | "0-bed" => Ok(SuiteType::Studio),
            "one-bed" | "one-bedroom" | "1-bed" | "1br" | "s1" => Ok(SuiteType::OneBed),
            "two-bed" | "two-bedroom" | "2-bed" | "2br" | "s2" => Ok(SuiteType::TwoBed),
            "three-bed" | "three-bedroom" | "3-bed" | "3br" | "s3" => Ok(SuiteType::ThreeBed),
            _ => Err(LayoutError::unknown_suite_type(s)),
        }
    }
}

impl std::fmt::Display for SuiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Non-residential descriptors that appear in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Stair,
    Elevator,
}

impl ServiceType {
    pub fn id(self) -> &'static str {
        match self {
            ServiceType::Stair => "stair",
            ServiceType::Elevator => "elevator",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ServiceType::Stair => "Stair",
            ServiceType::Elevator => "Elevator",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ServiceType::Stair => "#6c757d",
            ServiceType::Elevator => "#343a40",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_is_largest_first() {
        let counts: Vec<usize> = SuiteType::ALL.iter().map(|t| t.module_count()).collect();
        assert_eq!(counts, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_largest_fitting() {
        assert_eq!(SuiteType::largest_fitting(9), Some(SuiteType::ThreeBed));
        assert_eq!(SuiteType::largest_fitting(3), Some(SuiteType::TwoBed));
        assert_eq!(SuiteType::largest_fitting(2), Some(SuiteType::OneBed));
        assert_eq!(SuiteType::largest_fitting(1), Some(SuiteType::Studio));
        assert_eq!(SuiteType::largest_fitting(0), None);
    }

    #[test]
    fn test_unit_codes_depend_on_row() {
        assert_eq!(SuiteType::Studio.unit_code(Row::North), "S0C");
        assert_eq!(SuiteType::Studio.unit_code(Row::South), "S0");
    }

    #[test]
    fn test_row_depths_differ() {
        assert!(Row::North.module_area() != Row::South.module_area());
        assert!(Row::North.is_corridor_side());
        assert!(!Row::South.is_corridor_side());
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(SuiteType::from_str_flexible("Studio").unwrap(), SuiteType::Studio);
        assert_eq!(SuiteType::from_str_flexible("one_bed").unwrap(), SuiteType::OneBed);
        assert_eq!(SuiteType::from_str_flexible("3BR").unwrap(), SuiteType::ThreeBed);
        assert!(SuiteType::from_str_flexible("penthouse").is_err());
    }

    #[test]
    fn test_serialization_uses_ids() {
        let json = serde_json::to_string(&SuiteType::OneBed).unwrap();
        assert_eq!(json, "\"one-bed\"");
        let roundtrip: SuiteType = serde_json::from_str("\"three-bed\"").unwrap();
        assert_eq!(roundtrip, SuiteType::ThreeBed);
        assert_eq!(serde_json::to_string(&Row::South).unwrap(), "\"south\"");
    }
}
