//! Property-based tests for the placement pipeline.
//!
//! Invariants checked over random envelopes and mixes:
//! - every floor is fully allocated after gap-fill
//! - placed floors are full apart from reported drops
//! - each suite occupies contiguous slots in one row
//! - the elevator never moves and is never overwritten
//! - raising one type's share never lowers its quota
//! - the summary's module totals match the slots

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use suite_core::capacity::Capacity;
use suite_core::catalog::{Row, SuiteType, ALLOWED_FLOOR_HEIGHTS};
use suite_core::layout::generate;
use suite_core::packer::{expand_quotas, pack_floors};
use suite_core::placer::ModuleSlot;
use suite_core::project::{ProjectParameters, SuiteMix};
use suite_core::quota::SuiteQuotas;
use suite_core::summary::summarize;
use suite_core::units::Meters;
use suite_core::PlacementIssue;

fn params_strategy() -> impl Strategy<Value = ProjectParameters> {
    (4.0f64..120.0, 3.0f64..50.0, 0usize..3, any::<bool>()).prop_map(|(width, height, fh, stairs)| {
        ProjectParameters {
            width: Meters(width),
            height: Meters(height),
            floor_height: ALLOWED_FLOOR_HEIGHTS[fh],
            include_stairs: stairs,
        }
    })
}

fn mix_strategy() -> impl Strategy<Value = SuiteMix> {
    (0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0).prop_map(
        |(studio, one_bed, two_bed, three_bed)| SuiteMix {
            studio,
            one_bed,
            two_bed,
            three_bed,
        },
    )
}

// ============================================================================
// Capacity conservation
// ============================================================================

/// Property: after gap-fill every floor is allocated exactly its capacity,
/// unless first-fit had to overfill it.
#[test]
fn proptest_gap_fill_reaches_capacity() {
    proptest!(|(params in params_strategy(), mix in mix_strategy())| {
        let capacity = Capacity::from_parameters(&params);
        let quotas = SuiteQuotas::compute(&mix, capacity.total_residential_modules);
        let packing = pack_floors(
            &expand_quotas(&quotas),
            capacity.floor_count,
            capacity.per_floor_capacity,
        );

        for floor in &packing.floors {
            prop_assert_eq!(floor.remaining, 0);
            let overfilled = packing.issues.iter().any(|i| matches!(
                i,
                PlacementIssue::Overfilled { level, .. } if *level == floor.level
            ));
            if overfilled {
                prop_assert!(floor.allocated_modules() > capacity.per_floor_capacity);
            } else {
                prop_assert_eq!(floor.allocated_modules(), capacity.per_floor_capacity);
            }
        }
    });
}

/// Property: on every floor that was not overfilled, occupied slots plus the
/// modules of suites dropped during placement equal the floor's capacity.
#[test]
fn proptest_placed_floors_reach_capacity() {
    proptest!(|(params in params_strategy(), mix in mix_strategy())| {
        let layout = generate(&params, &mix);
        let per_floor = layout.capacity().per_floor_capacity;

        for floor in layout.floors() {
            let overfilled = layout.issues().iter().any(|i| matches!(
                i,
                PlacementIssue::Overfilled { level, .. } if *level == floor.level
            ));
            if overfilled {
                continue;
            }
            let dropped: usize = layout
                .issues()
                .iter()
                .filter_map(|i| match i {
                    PlacementIssue::DroppedAtPlacement { level, suite, .. }
                        if *level == floor.level => Some(suite.module_count()),
                    _ => None,
                })
                .sum();
            prop_assert_eq!(floor.occupied_modules() + dropped, per_floor);
        }
    });
}

/// Property: a mix that sums to 100 never over-requests the building.
#[test]
fn proptest_quotas_fit_total() {
    proptest!(ProptestConfig { max_global_rejects: 16384, ..ProptestConfig::default() }, |(total in 0usize..2000, a in 0u32..=100, b in 0u32..=100, c in 0u32..=100)| {
        prop_assume!(a + b + c <= 100);
        let mix = SuiteMix {
            studio: f64::from(100 - a - b - c),
            one_bed: f64::from(a),
            two_bed: f64::from(b),
            three_bed: f64::from(c),
        };
        let quotas = SuiteQuotas::compute(&mix, total);
        prop_assert!(quotas.total_modules() <= total);
    });
}

// ============================================================================
// Placement integrity
// ============================================================================

/// Property: every instance's slots are contiguous and in a single row,
/// and ids are unique across the building.
#[test]
fn proptest_instances_contiguous_in_one_row() {
    proptest!(|(params in params_strategy(), mix in mix_strategy())| {
        let layout = generate(&params, &mix);
        let mut seen = HashSet::new();

        for floor in layout.floors() {
            let mut positions: HashMap<_, Vec<(Row, usize)>> = HashMap::new();
            for (row, index, slot) in floor.slots() {
                if let ModuleSlot::Suite(id) = slot {
                    positions.entry(id).or_default().push((row, index));
                }
            }

            for suite in floor.suites() {
                prop_assert!(seen.insert(suite.id), "duplicate instance id {}", suite.id);
                let slots = &positions[&suite.id];
                prop_assert_eq!(slots.len(), suite.module_count());
                prop_assert!(slots.iter().all(|(row, _)| *row == suite.row));
                let indices: Vec<usize> = slots.iter().map(|(_, i)| *i).collect();
                let expected: Vec<usize> = suite.slots().collect();
                prop_assert_eq!(indices, expected);
            }
            prop_assert_eq!(positions.len(), floor.suites().len());
        }
    });
}

/// Property: the elevator sits at south[n / 2] on every floor and nowhere else.
#[test]
fn proptest_elevator_fixed_point() {
    proptest!(|(params in params_strategy(), mix in mix_strategy())| {
        let layout = generate(&params, &mix);
        let n = layout.capacity().single_side_modules;

        for floor in layout.floors() {
            prop_assert_eq!(floor.row(Row::South)[n / 2], ModuleSlot::Elevator);
            let elevators = floor
                .slots()
                .filter(|(_, _, slot)| *slot == ModuleSlot::Elevator)
                .count();
            prop_assert_eq!(elevators, 1);
            prop_assert!(floor.occupied_modules() <= 2 * n - 1);
        }
    });
}

// ============================================================================
// Quota monotonicity
// ============================================================================

/// Property: raising one type's share never lowers its quota.
#[test]
fn proptest_quota_monotonic() {
    proptest!(|(
        total in 0usize..2000,
        mix in mix_strategy(),
        suite_index in 0usize..4,
        bump in 0.0f64..50.0
    )| {
        let suite = SuiteType::ALL[suite_index];
        let before = SuiteQuotas::compute(&mix, total).count(suite);
        let raised = mix.with(suite, mix.percentage(suite) + bump);
        let after = SuiteQuotas::compute(&raised, total).count(suite);
        prop_assert!(after >= before);
    });
}

// ============================================================================
// Aggregation round trip
// ============================================================================

/// Property: summed residential module totals equal the occupied slot count.
#[test]
fn proptest_summary_round_trip() {
    proptest!(|(params in params_strategy(), mix in mix_strategy())| {
        let layout = generate(&params, &mix);
        let summary = summarize(&layout);

        let occupied: usize = layout.floors().iter().map(|f| f.occupied_modules()).sum();
        prop_assert_eq!(summary.residential_modules(), occupied);

        let placed: usize = layout.floors().iter().map(|f| f.suites().len()).sum();
        prop_assert_eq!(summary.total.suite_count, placed);
        prop_assert_eq!(summary.elevator.module_total, layout.capacity().floor_count);
    });
}
