//! # Unit Types
//!
//! Type-safe wrappers for building dimensions. These are plain f64 newtypes
//! that serialize as bare numbers.
//!
//! Lengths are metric internally; display conversion belongs to the caller.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::units::{Meters, SqMeters};
//!
//! let width = Meters(3.0);
//! let depth = Meters(8.0);
//! let area: SqMeters = width * depth;
//! assert_eq!(area.0, 24.0);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMeters(pub f64);

impl Mul for Meters {
    type Output = SqMeters;
    fn mul(self, rhs: Meters) -> SqMeters {
        SqMeters(self.0 * rhs.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|v| v.0).sum())
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(SqMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_times_length_is_area() {
        let area = Meters(3.7846) * Meters(2.0);
        assert!((area.0 - 7.5692).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = SqMeters(10.0);
        let b = SqMeters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a * 2.0).0, 20.0);
    }

    #[test]
    fn test_sum() {
        let total: SqMeters = [SqMeters(1.5), SqMeters(2.5)].into_iter().sum();
        assert_eq!(total, SqMeters(4.0));
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
