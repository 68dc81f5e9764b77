//! Evaluation metrics.
//!
//! Timings and counters for one compile → enumerate → render cycle. They are
//! opt-in: [`crate::evaluate`] does not collect them, while
//! [`crate::evaluate_verbose`] does.
//!
//! The counters come straight from the enumerator's [`ScanStats`], so a
//! pattern that matches the empty string shows up as a high
//! `empty_advances` count relative to the number of matches.

use super::enumerate::ScanStats;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EvalMetrics {
    /// Total elapsed time for the cycle.
    pub total: Duration,
    /// Time spent compiling the pattern.
    pub compile: Duration,
    /// Time spent enumerating matches.
    pub enumerate: Duration,
    /// Time spent rendering the output template.
    pub render: Duration,
    /// Scan counters from the enumerator.
    pub scan: ScanStats,
}
