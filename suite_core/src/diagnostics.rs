//! Placement diagnostics.
//!
//! The pipeline never fails; instead it records what it could not do as
//! [`PlacementIssue`]s on the finished layout. Each issue is also logged at
//! `warn` level when it is recorded.

use serde::{Deserialize, Serialize};

use crate::catalog::SuiteType;
use crate::placer::InstanceId;

/// Something the pipeline degraded on while building a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementIssue {
    /// No floor had any capacity left for a requested suite
    DroppedAtPacking { suite: SuiteType },

    /// First-fit fell back to a floor that lacked room for the whole suite
    Overfilled { level: usize, suite: SuiteType },

    /// Large-suite pass found no valid cursor; suite moved to the small pool
    Demoted {
        level: usize,
        suite: SuiteType,
        instance: InstanceId,
    },

    /// Demoted suite found no contiguous run and is missing from the floor
    DroppedAtPlacement {
        level: usize,
        suite: SuiteType,
        instance: InstanceId,
    },
}

impl PlacementIssue {
    /// Whether the suite is absent from the final layout
    pub fn is_loss(&self) -> bool {
        matches!(
            self,
            PlacementIssue::DroppedAtPacking { .. } | PlacementIssue::DroppedAtPlacement { .. }
        )
    }

    pub fn suite(&self) -> SuiteType {
        match *self {
            PlacementIssue::DroppedAtPacking { suite }
            | PlacementIssue::Overfilled { suite, .. }
            | PlacementIssue::Demoted { suite, .. }
            | PlacementIssue::DroppedAtPlacement { suite, .. } => suite,
        }
    }
}

impl std::fmt::Display for PlacementIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementIssue::DroppedAtPacking { suite } => {
                write!(f, "{} dropped: no floor capacity left", suite)
            }
            PlacementIssue::Overfilled { level, suite } => {
                write!(f, "{} forced onto floor {} without enough room", suite, level)
            }
            PlacementIssue::Demoted { level, suite, instance } => {
                write!(f, "{} {} demoted to small-suite pass on floor {}", suite, instance, level)
            }
            PlacementIssue::DroppedAtPlacement { level, suite, instance } => {
                write!(f, "{} {} dropped from floor {}: no contiguous run", suite, instance, level)
            }
        }
    }
}

/// Append an issue and log it.
pub(crate) fn record(issues: &mut Vec<PlacementIssue>, issue: PlacementIssue) {
    log::warn!("{}", issue);
    issues.push(issue);
}
