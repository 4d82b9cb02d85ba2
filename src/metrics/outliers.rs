//! OUTLIER DETECTION (1.5 × IQR RULE)
//!
//! Fences the whole-year distribution at [Q1 − 1.5·IQR, Q3 + 1.5·IQR] and
//! reports every day strictly outside the fence, heaviest first. An IQR of
//! zero is a legal degenerate case: everything off the repeated value gets
//! flagged.

use crate::calendar;
use crate::data::PlanData;
use crate::stats;
use anyhow::{ensure, Result};
use serde::Serialize;

/// A single flagged day
#[derive(Debug, Clone, Serialize)]
pub struct Outlier {
    pub day_index: u16,
    /// Calendar date like "Oct 05"
    pub date: String,
    pub word_count: u32,
}

/// Result of the outlier scan
#[derive(Debug, Clone, Serialize)]
pub struct OutlierResult {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Flagged days, sorted by descending word count (ties by day order)
    pub outliers: Vec<Outlier>,
}

/// Scan the plan for days outside the interquartile fence.
pub fn calculate_outliers(data: &PlanData) -> Result<OutlierResult> {
    ensure!(!data.is_empty(), "cannot scan an empty plan for outliers");

    let mut sorted = data.counts().to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    // quantile_sorted only fails on empty input, which is excluded above
    let q1 = stats::quantile_sorted(&sorted, 0.25).unwrap_or(f64::NAN);
    let q3 = stats::quantile_sorted(&sorted, 0.75).unwrap_or(f64::NAN);
    let iqr = q3 - q1;
    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;

    let mut outliers: Vec<Outlier> = data
        .readings()
        .iter()
        .filter(|r| {
            let count = r.word_count as f64;
            count < lower_bound || count > upper_bound
        })
        .map(|r| Outlier {
            day_index: r.day_index,
            date: calendar::day_label(r.day_index),
            word_count: r.word_count,
        })
        .collect();

    outliers.sort_by(|a, b| {
        b.word_count
            .cmp(&a.word_count)
            .then(a.day_index.cmp(&b.day_index))
    });

    Ok(OutlierResult {
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DailyReading;
    use approx::assert_relative_eq;

    fn plan(counts: &[u32]) -> PlanData {
        let readings = counts
            .iter()
            .enumerate()
            .map(|(i, &word_count)| DailyReading {
                day_index: (i + 1) as u16,
                word_count,
            })
            .collect();
        PlanData::from_readings(readings).unwrap()
    }

    #[test]
    fn test_bounds_follow_quartiles() {
        let counts: Vec<u32> = (0..365u32).map(|i| 2000 + (i * 37) % 1500).collect();
        let data = plan(&counts);
        let result = calculate_outliers(&data).unwrap();
        assert_relative_eq!(result.iqr, result.q3 - result.q1, epsilon = 1e-12);
        assert_relative_eq!(
            result.lower_bound,
            result.q1 - 1.5 * result.iqr,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            result.upper_bound,
            result.q3 + 1.5 * result.iqr,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_extreme_days_flagged_heaviest_first() {
        // Flat plan with two spikes and one crater
        let mut counts = vec![2800_u32; 365];
        counts[122] = 9000; // day 123
        counts[277] = 9500; // day 278
        counts[9] = 10; // day 10
        let data = plan(&counts);
        let result = calculate_outliers(&data).unwrap();

        let flagged: Vec<(u16, u32)> = result
            .outliers
            .iter()
            .map(|o| (o.day_index, o.word_count))
            .collect();
        assert_eq!(flagged, vec![(278, 9500), (123, 9000), (10, 10)]);
        assert_eq!(result.outliers[0].date, "Oct 05");
    }

    #[test]
    fn test_no_outliers_in_uniform_spread() {
        let counts: Vec<u32> = (0..100u32).map(|i| 1000 + i * 10).collect();
        let data = plan(&counts);
        let result = calculate_outliers(&data).unwrap();
        assert!(result.outliers.is_empty());
    }

    #[test]
    fn test_zero_iqr_flags_everything_else() {
        // 9 repeated values, one off: IQR collapses to 0
        let mut counts = vec![500_u32; 9];
        counts.push(501);
        let data = plan(&counts);
        let result = calculate_outliers(&data).unwrap();
        assert_relative_eq!(result.iqr, 0.0, epsilon = 1e-12);
        assert_eq!(result.outliers.len(), 1);
        assert_eq!(result.outliers[0].word_count, 501);
    }
}
