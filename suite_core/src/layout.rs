//! # Building Layout
//!
//! Runs the full pipeline and owns its result:
//!
//! ```text
//! Capacity → Quotas → Bin-packing → Placement per floor → Presentation sort
//! ```
//!
//! A [`BuildingLayout`] is immutable once built. [`LayoutPublisher`] holds
//! the current layout and replaces it in one swap, so readers only ever see
//! a complete layout.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::layout::generate;
//! use suite_core::project::{ProjectParameters, SuiteMix};
//!
//! let layout = generate(&ProjectParameters::default(), &SuiteMix::default());
//! assert_eq!(layout.floors().len(), 3);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::capacity::Capacity;
use crate::diagnostics::PlacementIssue;
use crate::packer::{expand_quotas, pack_floors};
use crate::placer::{place_floor, FloorPlan, InstanceCounter};
use crate::project::{ProjectParameters, SuiteMix};
use crate::quota::SuiteQuotas;

/// Completed layout for one configuration.
///
/// Floors are in presentation order (ascending score), not stacking order;
/// use [`FloorPlan::level`] for the physical floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingLayout {
    parameters: ProjectParameters,
    mix: SuiteMix,
    capacity: Capacity,
    quotas: SuiteQuotas,
    floors: Vec<FloorPlan>,
    issues: Vec<PlacementIssue>,
}

impl BuildingLayout {
    pub fn parameters(&self) -> &ProjectParameters {
        &self.parameters
    }

    pub fn mix(&self) -> &SuiteMix {
        &self.mix
    }

    pub fn capacity(&self) -> &Capacity {
        &self.capacity
    }

    /// Quotas requested before packing
    pub fn quotas(&self) -> &SuiteQuotas {
        &self.quotas
    }

    /// Floor plans in presentation order
    pub fn floors(&self) -> &[FloorPlan] {
        &self.floors
    }

    /// Floor plans in physical order, lowest first
    pub fn floors_by_level(&self) -> Vec<&FloorPlan> {
        let mut floors: Vec<&FloorPlan> = self.floors.iter().collect();
        floors.sort_by_key(|f| f.level);
        floors
    }

    /// Everything the pipeline degraded on
    pub fn issues(&self) -> &[PlacementIssue] {
        &self.issues
    }

    /// Suites requested or gap-filled that are missing from the floors
    pub fn lost_suites(&self) -> usize {
        self.issues.iter().filter(|i| i.is_loss()).count()
    }
}

/// Build a layout from scratch.
pub fn generate(parameters: &ProjectParameters, mix: &SuiteMix) -> BuildingLayout {
    let capacity = Capacity::from_parameters(parameters);
    log::debug!("capacity: {:?}", capacity);

    let quotas = SuiteQuotas::compute(mix, capacity.total_residential_modules);
    let suites = expand_quotas(&quotas);

    let packing = pack_floors(&suites, capacity.floor_count, capacity.per_floor_capacity);
    let mut issues = packing.issues;

    let mut ids = InstanceCounter::new();
    let mut floors: Vec<FloorPlan> = packing
        .floors
        .iter()
        .map(|allocation| {
            place_floor(
                allocation.level,
                &allocation.suites(),
                capacity.single_side_modules,
                &mut ids,
                &mut issues,
            )
        })
        .collect();

    sort_for_presentation(&mut floors);

    let layout = BuildingLayout {
        parameters: *parameters,
        mix: *mix,
        capacity,
        quotas,
        floors,
        issues,
    };
    log::info!(
        "generated layout: {} floors, {} suites placed, {} lost",
        layout.floors.len(),
        layout.floors.iter().map(|f| f.suites().len()).sum::<usize>(),
        layout.lost_suites()
    );
    layout
}

/// Stable sort of floors by ascending score. Display order only.
pub fn sort_for_presentation(floors: &mut [FloorPlan]) {
    floors.sort_by_key(FloorPlan::score);
}

/// Holds the current layout and replaces it atomically on regeneration.
#[derive(Debug)]
pub struct LayoutPublisher {
    current: RwLock<Arc<BuildingLayout>>,
}

impl LayoutPublisher {
    pub fn new(parameters: &ProjectParameters, mix: &SuiteMix) -> Self {
        LayoutPublisher {
            current: RwLock::new(Arc::new(generate(parameters, mix))),
        }
    }

    /// Snapshot of the current layout
    pub fn current(&self) -> Arc<BuildingLayout> {
        self.current.read().clone()
    }

    /// Recompute from scratch and swap in the result.
    ///
    /// The layout is built before the lock is taken, so readers keep the old
    /// snapshot until the new one is complete.
    pub fn regenerate(
        &self,
        parameters: &ProjectParameters,
        mix: &SuiteMix,
    ) -> Arc<BuildingLayout> {
        let next = Arc::new(generate(parameters, mix));
        *self.current.write() = Arc::clone(&next);
        next
    }
}
