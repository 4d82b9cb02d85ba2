//! SUMMARY: DESCRIPTIVE STATISTICS
//!
//! The eight-row summary table of the daily word counts: count, mean,
//! sample standard deviation, minimum, quartiles, maximum. Matches pandas
//! `describe()` semantics (n − 1 std, R-7 percentiles).

use crate::stats;
use anyhow::{ensure, Result};
use serde::Serialize;

/// Result of the summary calculation
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (0 for a single reading)
    pub std: f64,
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    pub max: f64,
}

/// Calculate the descriptive summary of the daily word counts.
///
/// Fails only on empty input. Quartiles come from one shared sort.
pub fn calculate_summary(counts: &[f64]) -> Result<SummaryResult> {
    ensure!(!counts.is_empty(), "cannot summarize an empty plan");

    let mut sorted = counts.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q = |p: f64| stats::quantile_sorted(&sorted, p).unwrap_or(f64::NAN);

    Ok(SummaryResult {
        count: counts.len(),
        mean: stats::mean(counts).unwrap_or(f64::NAN),
        std: stats::sample_std(counts).unwrap_or(0.0),
        min: sorted[0],
        q1: q(0.25),
        median: q(0.5),
        q3: q(0.75),
        max: sorted[sorted.len() - 1],
    })
}
