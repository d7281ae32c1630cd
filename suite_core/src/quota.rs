//! # Suite Quota Calculator
//!
//! Converts percentage targets into whole suite counts against the nominal
//! residential module total.
//!
//! Each type's target is taken from the full total, not from what is left
//! after larger types, and always rounds down. The quotas can therefore
//! undershoot the total; gap-fill in the packer absorbs the slack.
//!
//! ## Example
//!
//! ```rust
//! use suite_core::catalog::SuiteType;
//! use suite_core::project::SuiteMix;
//! use suite_core::quota::SuiteQuotas;
//!
//! let quotas = SuiteQuotas::compute(&SuiteMix::only(SuiteType::ThreeBed), 75);
//! assert_eq!(quotas.count(SuiteType::ThreeBed), 18);
//! assert_eq!(quotas.total_modules(), 72);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::SuiteType;
use crate::project::SuiteMix;

/// Whole-suite counts per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuiteQuotas {
    counts: [usize; 4],
}

impl SuiteQuotas {
    /// Compute quotas, processing types largest first.
    pub fn compute(mix: &SuiteMix, total_residential_modules: usize) -> Self {
        let mut quotas = SuiteQuotas::default();
        for suite in SuiteType::ALL {
            let target = total_residential_modules as f64 * mix.percentage(suite) / 100.0;
            quotas.counts[slot(suite)] = suites_in(target, suite.module_count());
        }
        log::debug!(
            "quotas for {} modules: {:?}",
            total_residential_modules,
            quotas.iter().collect::<Vec<_>>()
        );
        quotas
    }

    /// Number of suites of `suite`
    pub fn count(&self, suite: SuiteType) -> usize {
        self.counts[slot(suite)]
    }

    /// Suite counts in priority order
    pub fn iter(&self) -> impl Iterator<Item = (SuiteType, usize)> + '_ {
        SuiteType::ALL.into_iter().map(move |t| (t, self.count(t)))
    }

    /// Total suites across all types
    pub fn total_suites(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Modules consumed by all quotas
    pub fn total_modules(&self) -> usize {
        self.iter().map(|(t, n)| t.module_count() * n).sum()
    }
}

fn slot(suite: SuiteType) -> usize {
    match suite {
        SuiteType::ThreeBed => 0,
        SuiteType::TwoBed => 1,
        SuiteType::OneBed => 2,
        SuiteType::Studio => 3,
    }
}

/// Whole suites of `module_count` modules in `target` modules, rounded down.
fn suites_in(target: f64, module_count: usize) -> usize {
    let count = (target / module_count as f64).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}
