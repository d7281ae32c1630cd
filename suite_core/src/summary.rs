//! # Layout Summary
//!
//! Aggregates a finished layout into the comparison table shown to users:
//! one row per suite type, then elevator, stair (when enabled) and total.
//!
//! Counts come from the slots themselves, so the table always describes what
//! was actually placed rather than what was requested.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::catalog::SuiteType;
//! use suite_core::layout::generate;
//! use suite_core::project::{ProjectParameters, SuiteMix};
//! use suite_core::summary::summarize;
//!
//! let layout = generate(&ProjectParameters::default(), &SuiteMix::only(SuiteType::Studio));
//! let summary = summarize(&layout);
//! assert_eq!(summary.suite(SuiteType::Studio).suite_count, 75);
//! assert_eq!(summary.elevator.module_total, 3);
//! ```

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::catalog::{Row, ServiceType, SuiteType, STAIRS_PER_FLOOR, STAIR_MODULE_AREA};
use crate::layout::BuildingLayout;
use crate::placer::{InstanceId, ModuleSlot};
use crate::units::SqMeters;

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    /// Distinct suites placed (zero for service rows)
    pub suite_count: usize,
    pub module_total: usize,
    /// Requested share; `None` for service rows
    pub desired_percentage: Option<f64>,
    /// Share of placed suites; `None` for service rows
    pub actual_percentage: Option<f64>,
    pub total_area: SqMeters,
}

/// Comparison table for a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    /// Suite rows in catalog priority order
    pub suites: Vec<SummaryRow>,
    pub elevator: SummaryRow,
    /// Present only when stairs are enabled
    pub stair: Option<SummaryRow>,
    pub total: SummaryRow,
}

impl LayoutSummary {
    /// Row for one suite type
    pub fn suite(&self, suite: SuiteType) -> &SummaryRow {
        // `suites` is built from SuiteType::ALL, so the index always exists
        &self.suites[SuiteType::ALL.iter().position(|t| *t == suite).unwrap_or(0)]
    }

    /// Residential modules across all suite rows
    pub fn residential_modules(&self) -> usize {
        self.suites.iter().map(|r| r.module_total).sum()
    }

    /// All rows in display order
    pub fn rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.suites
            .iter()
            .chain(std::iter::once(&self.elevator))
            .chain(self.stair.iter())
            .chain(std::iter::once(&self.total))
    }
}

#[derive(Default)]
struct Tally {
    instances: HashSet<InstanceId>,
    modules: usize,
    area: SqMeters,
}

/// Build the comparison table for `layout`.
pub fn summarize(layout: &BuildingLayout) -> LayoutSummary {
    let mut tallies: HashMap<SuiteType, Tally> = HashMap::new();
    let mut elevator_modules = 0;

    for floor in layout.floors() {
        let types: HashMap<InstanceId, SuiteType> =
            floor.suites().iter().map(|s| (s.id, s.suite_type)).collect();

        for (row, _, slot) in floor.slots() {
            match slot {
                ModuleSlot::Empty => {}
                ModuleSlot::Elevator => elevator_modules += 1,
                ModuleSlot::Suite(id) => {
                    let Some(suite) = types.get(&id) else {
                        log::warn!(
                            "slot references unknown instance {} on floor {}",
                            id,
                            floor.level
                        );
                        continue;
                    };
                    let tally = tallies.entry(*suite).or_default();
                    tally.instances.insert(id);
                    tally.modules += 1;
                    tally.area = tally.area + row.module_area();
                }
            }
        }
    }

    let placed_suites: usize = tallies.values().map(|t| t.instances.len()).sum();
    let mix = layout.mix();

    let suites: Vec<SummaryRow> = SuiteType::ALL
        .into_iter()
        .map(|suite| {
            let (count, modules, area) = tallies
                .get(&suite)
                .map(|t| (t.instances.len(), t.modules, t.area))
                .unwrap_or_default();
            SummaryRow {
                id: suite.id(),
                label: suite.display_name(),
                color: suite.color(),
                suite_count: count,
                module_total: modules,
                desired_percentage: Some(mix.percentage(suite)),
                actual_percentage: Some(percent(count, placed_suites)),
                total_area: area,
            }
        })
        .collect();

    let elevator = service_row(
        ServiceType::Elevator,
        elevator_modules,
        Row::South.module_area() * elevator_modules as f64,
    );

    let stair = layout.parameters().include_stairs.then(|| {
        let modules = STAIRS_PER_FLOOR * layout.capacity().floor_count;
        service_row(ServiceType::Stair, modules, STAIR_MODULE_AREA * modules as f64)
    });

    let total_modules = suites.iter().map(|r| r.module_total).sum::<usize>()
        + elevator.module_total
        + stair.as_ref().map_or(0, |s| s.module_total);
    let total_area: SqMeters = suites
        .iter()
        .chain(std::iter::once(&elevator))
        .chain(stair.iter())
        .map(|r| r.total_area)
        .sum();

    let total = SummaryRow {
        id: "total",
        label: "Total",
        color: "#000000",
        suite_count: placed_suites,
        module_total: total_modules,
        desired_percentage: Some(mix.total()),
        actual_percentage: Some(if placed_suites > 0 { 100.0 } else { 0.0 }),
        total_area,
    };

    LayoutSummary {
        suites,
        elevator,
        stair,
        total,
    }
}

fn service_row(service: ServiceType, modules: usize, area: SqMeters) -> SummaryRow {
    SummaryRow {
        id: service.id(),
        label: service.display_name(),
        color: service.color(),
        suite_count: 0,
        module_total: modules,
        desired_percentage: None,
        actual_percentage: None,
        total_area: area,
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
