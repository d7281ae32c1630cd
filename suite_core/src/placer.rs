//! # Intra-Floor Placer
//!
//! Arranges one floor's suites into the two module rows around the elevator,
//! which sits permanently in the middle slot of the south row.
//!
//! ## Large-suite pass
//!
//! Suites of more than one module are placed largest first from four
//! inward-growing cursors, evaluated in this order:
//!
//! ```text
//!   north-left  →  ..........  ←  north-right
//!   south-left  →  ....E.....  ←  south-right
//! ```
//!
//! A cursor is a candidate when the `module_count` slots ahead of it are
//! empty and in bounds. The candidate with the longest empty run ahead wins;
//! ties go to the earliest cursor in the order above. A suite with no
//! candidate is demoted to the small-suite pool.
//!
//! ## Small-suite pass
//!
//! Rows are scanned left to right (north, then south). At each empty slot the
//! first pool entry whose run fits there is placed; otherwise the slot stays
//! empty. Pool order is single-module suites first, then demoted suites.
//! Pool entries that never fit are dropped from the floor and reported.
//!
//! The tie-break order is part of the output contract: changing it changes
//! every golden layout.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::catalog::{Row, SuiteType, MAX_SINGLE_SIDE_MODULES};
use crate::diagnostics::{self, PlacementIssue};

/// Deterministic identifier grouping the modules of one placed suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

/// Monotonic source of [`InstanceId`]s, shared across the floors of one run.
#[derive(Debug, Default)]
pub struct InstanceCounter {
    next: u32,
}

impl InstanceCounter {
    pub fn new() -> Self {
        InstanceCounter::default()
    }

    pub fn next_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }
}

/// One module position in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleSlot {
    Empty,
    Elevator,
    Suite(InstanceId),
}

impl ModuleSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, ModuleSlot::Empty)
    }

    pub fn instance(&self) -> Option<InstanceId> {
        match self {
            ModuleSlot::Suite(id) => Some(*id),
            _ => None,
        }
    }
}

/// A suite positioned on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteInstance {
    pub id: InstanceId,
    pub suite_type: SuiteType,
    pub row: Row,
    /// Index of the leftmost occupied slot
    pub start: usize,
}

impl SuiteInstance {
    pub fn module_count(&self) -> usize {
        self.suite_type.module_count()
    }

    pub fn is_corridor_side(&self) -> bool {
        self.row.is_corridor_side()
    }

    /// Slots occupied in `row`
    pub fn slots(&self) -> Range<usize> {
        self.start..self.start + self.module_count()
    }

    /// Unit code for this suite's row
    pub fn unit_code(&self) -> &'static str {
        self.suite_type.unit_code(self.row)
    }
}

/// Module assignment for one floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Physical floor index (0 = lowest); presentation order may differ
    pub level: usize,
    north: Vec<ModuleSlot>,
    south: Vec<ModuleSlot>,
    suites: Vec<SuiteInstance>,
}

impl FloorPlan {
    fn empty(level: usize, single_side_modules: usize) -> Self {
        let mut south = vec![ModuleSlot::Empty; single_side_modules];
        south[single_side_modules / 2] = ModuleSlot::Elevator;
        FloorPlan {
            level,
            north: vec![ModuleSlot::Empty; single_side_modules],
            south,
            suites: Vec::new(),
        }
    }

    pub fn row(&self, row: Row) -> &[ModuleSlot] {
        match row {
            Row::North => &self.north,
            Row::South => &self.south,
        }
    }

    fn row_mut(&mut self, row: Row) -> &mut [ModuleSlot] {
        match row {
            Row::North => &mut self.north,
            Row::South => &mut self.south,
        }
    }

    /// Modules per row
    pub fn single_side_modules(&self) -> usize {
        self.north.len()
    }

    /// Index of the elevator in the south row
    pub fn elevator_index(&self) -> usize {
        self.single_side_modules() / 2
    }

    /// Placed suites, in placement order
    pub fn suites(&self) -> &[SuiteInstance] {
        &self.suites
    }

    pub fn suite(&self, id: InstanceId) -> Option<&SuiteInstance> {
        self.suites.iter().find(|s| s.id == id)
    }

    /// Presentation score: total modules of placed suites
    pub fn score(&self) -> usize {
        self.suites.iter().map(|s| s.module_count()).sum()
    }

    /// Slots holding a residential suite
    pub fn occupied_modules(&self) -> usize {
        self.north
            .iter()
            .chain(self.south.iter())
            .filter(|slot| slot.instance().is_some())
            .count()
    }

    /// All `(row, index, slot)` triples, north row first
    pub fn slots(&self) -> impl Iterator<Item = (Row, usize, ModuleSlot)> + '_ {
        Row::ALL.into_iter().flat_map(move |row| {
            self.row(row)
                .iter()
                .enumerate()
                .map(move |(index, slot)| (row, index, *slot))
        })
    }

    fn run_is_free(&self, row: Row, run: Range<usize>) -> bool {
        run.end <= self.single_side_modules() && self.row(row)[run].iter().all(ModuleSlot::is_empty)
    }

    fn occupy(&mut self, suite_type: SuiteType, id: InstanceId, row: Row, start: usize) {
        let instance = SuiteInstance {
            id,
            suite_type,
            row,
            start,
        };
        for slot in &mut self.row_mut(row)[instance.slots()] {
            *slot = ModuleSlot::Suite(id);
        }
        self.suites.push(instance);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
}

/// An inward-growing boundary. Left cursors hold the next free index;
/// right cursors hold the exclusive end of the free region.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    row: Row,
    edge: Edge,
    boundary: usize,
}

impl Cursor {
    fn left(row: Row) -> Self {
        Cursor {
            row,
            edge: Edge::Left,
            boundary: 0,
        }
    }

    fn right(row: Row, end: usize) -> Self {
        Cursor {
            row,
            edge: Edge::Right,
            boundary: end,
        }
    }

    /// Empty slots ahead of the cursor, stopping at the first occupied one
    fn span(&self, plan: &FloorPlan) -> usize {
        let slots = plan.row(self.row);
        match self.edge {
            Edge::Left => slots[self.boundary.min(slots.len())..]
                .iter()
                .take_while(|s| s.is_empty())
                .count(),
            Edge::Right => slots[..self.boundary]
                .iter()
                .rev()
                .take_while(|s| s.is_empty())
                .count(),
        }
    }

    /// Start index of a run of `len` slots taken at this cursor
    fn start_for(&self, len: usize) -> usize {
        match self.edge {
            Edge::Left => self.boundary,
            Edge::Right => self.boundary - len,
        }
    }

    fn advance(&mut self, len: usize) {
        match self.edge {
            Edge::Left => self.boundary += len,
            Edge::Right => self.boundary -= len,
        }
    }
}

/// Position one floor's suites.
///
/// `ids` is shared across floors so instance ids are unique per building.
/// Demotions and drops are appended to `issues`. Row length is clamped to
/// `1..=MAX_SINGLE_SIDE_MODULES`.
pub fn place_floor(
    level: usize,
    suites: &[SuiteType],
    single_side_modules: usize,
    ids: &mut InstanceCounter,
    issues: &mut Vec<PlacementIssue>,
) -> FloorPlan {
    let n = single_side_modules.clamp(1, MAX_SINGLE_SIDE_MODULES);
    let mut plan = FloorPlan::empty(level, n);

    let mut large: Vec<SuiteType> = suites
        .iter()
        .copied()
        .filter(|s| s.module_count() > 1)
        .collect();
    large.sort_by(|a, b| b.module_count().cmp(&a.module_count()));

    let mut pool: Vec<(SuiteType, InstanceId)> = Vec::new();
    let mut demoted: Vec<(SuiteType, InstanceId)> = Vec::new();

    let mut cursors = [
        Cursor::left(Row::North),
        Cursor::left(Row::South),
        Cursor::right(Row::North, n),
        Cursor::right(Row::South, n),
    ];

    for suite in large {
        let id = ids.next_id();
        let len = suite.module_count();

        let mut best: Option<(usize, usize)> = None;
        for (index, cursor) in cursors.iter().enumerate() {
            let span = cursor.span(&plan);
            if span < len {
                continue;
            }
            if best.map_or(true, |(_, best_span)| span > best_span) {
                best = Some((index, span));
            }
        }

        match best {
            Some((index, _)) => {
                let cursor = &mut cursors[index];
                let start = cursor.start_for(len);
                let row = cursor.row;
                cursor.advance(len);
                plan.occupy(suite, id, row, start);
            }
            None => {
                diagnostics::record(
                    issues,
                    PlacementIssue::Demoted {
                        level,
                        suite,
                        instance: id,
                    },
                );
                demoted.push((suite, id));
            }
        }
    }

    for suite in suites.iter().copied().filter(|s| s.module_count() == 1) {
        pool.push((suite, ids.next_id()));
    }
    pool.extend(demoted);

    for row in Row::ALL {
        let mut index = 0;
        while index < n {
            if !plan.row(row)[index].is_empty() {
                index += 1;
                continue;
            }
            let fit = pool
                .iter()
                .position(|(suite, _)| plan.run_is_free(row, index..index + suite.module_count()));
            match fit {
                Some(position) => {
                    let (suite, id) = pool.remove(position);
                    plan.occupy(suite, id, row, index);
                    index += suite.module_count();
                }
                None => index += 1,
            }
        }
    }

    for (suite, id) in pool {
        diagnostics::record(
            issues,
            PlacementIssue::DroppedAtPlacement {
                level,
                suite,
                instance: id,
            },
        );
    }

    plan
}
