//! # Floor Bin-Packer
//!
//! Assigns suite instances to floors under a per-floor module capacity.
//!
//! ## Algorithm
//!
//! 1. Expand quotas into one entry per suite and sort descending by module
//!    count (stable, so ties keep catalog order).
//! 2. First-fit: each suite goes to the lowest-indexed floor with enough
//!    remaining capacity. Failing that, it goes to the first floor with any
//!    capacity left (recorded as [`PlacementIssue::Overfilled`]). Failing
//!    that, it is dropped.
//! 3. Gap-fill: every floor with capacity left receives the largest suite
//!    type that fits, repeatedly, until its capacity is exactly zero.
//!
//! This is a greedy heuristic, not an optimal packer.

use serde::{Deserialize, Serialize};

use crate::catalog::{SuiteType, MAX_FLOORS};
use crate::diagnostics::{self, PlacementIssue};
use crate::quota::SuiteQuotas;

/// Suites assigned to one floor, before they are positioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorAllocation {
    /// Physical floor index (0 = lowest)
    pub level: usize,

    /// Suites placed from the requested quotas, in assignment order
    pub requested: Vec<SuiteType>,

    /// Synthetic suites added by gap-fill
    pub gap_fill: Vec<SuiteType>,

    /// Capacity left after packing (zero once gap-fill has run)
    pub remaining: usize,
}

impl FloorAllocation {
    fn new(level: usize, capacity: usize) -> Self {
        FloorAllocation {
            level,
            requested: Vec::new(),
            gap_fill: Vec::new(),
            remaining: capacity,
        }
    }

    /// All suites on the floor: requested first, then gap-fill
    pub fn suites(&self) -> Vec<SuiteType> {
        self.requested.iter().chain(self.gap_fill.iter()).copied().collect()
    }

    /// Modules claimed by all suites on the floor
    pub fn allocated_modules(&self) -> usize {
        self.requested
            .iter()
            .chain(self.gap_fill.iter())
            .map(|s| s.module_count())
            .sum()
    }
}

/// Result of packing: per-floor allocations plus what was lost on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingOutcome {
    pub floors: Vec<FloorAllocation>,
    pub issues: Vec<PlacementIssue>,
}

/// One entry per requested suite, largest module count first.
///
/// Quotas iterate in catalog priority order, which is already descending by
/// module count.
pub fn expand_quotas(quotas: &SuiteQuotas) -> Vec<SuiteType> {
    quotas
        .iter()
        .flat_map(|(suite, count)| std::iter::repeat(suite).take(count))
        .collect()
}

/// Pack `suites` onto `floor_count` floors of `per_floor_capacity` modules.
///
/// `suites` may be in any order; it is stably sorted largest first before
/// first-fit runs. `floor_count` is clamped to `1..=MAX_FLOORS`.
pub fn pack_floors(
    suites: &[SuiteType],
    floor_count: usize,
    per_floor_capacity: usize,
) -> PackingOutcome {
    let floor_count = floor_count.clamp(1, MAX_FLOORS);
    let mut floors: Vec<FloorAllocation> = (0..floor_count)
        .map(|level| FloorAllocation::new(level, per_floor_capacity))
        .collect();
    let mut issues = Vec::new();

    let mut ordered = suites.to_vec();
    ordered.sort_by(|a, b| b.module_count().cmp(&a.module_count()));

    for suite in ordered {
        let need = suite.module_count();
        let target = match floors.iter().position(|f| f.remaining >= need) {
            Some(index) => index,
            None => match floors.iter().position(|f| f.remaining > 0) {
                Some(index) => {
                    diagnostics::record(
                        &mut issues,
                        PlacementIssue::Overfilled {
                            level: floors[index].level,
                            suite,
                        },
                    );
                    index
                }
                None => {
                    diagnostics::record(&mut issues, PlacementIssue::DroppedAtPacking { suite });
                    continue;
                }
            },
        };
        let floor = &mut floors[target];
        floor.requested.push(suite);
        floor.remaining = floor.remaining.saturating_sub(need);
    }

    for floor in &mut floors {
        gap_fill(floor);
    }

    log::debug!(
        "packed {} suites onto {} floors ({} issues)",
        suites.len(),
        floor_count,
        issues.len()
    );

    PackingOutcome { floors, issues }
}

/// Fill a floor's leftover capacity with the largest suites that fit.
fn gap_fill(floor: &mut FloorAllocation) {
    while let Some(filler) = SuiteType::largest_fitting(floor.remaining) {
        floor.gap_fill.push(filler);
        floor.remaining -= filler.module_count();
    }
}
