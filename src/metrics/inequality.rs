//! MONTHLY READING LOAD INEQUALITY (GINI COEFFICIENT)
//!
//! Partitions the year by calendar month and computes the Gini coefficient
//! of the daily word counts inside each month: 0 means every day carries
//! the same load, values toward 1 mean a few days carry most of it.

use crate::calendar;
use crate::data::PlanData;
use anyhow::{ensure, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Gini coefficient of one month
#[derive(Debug, Clone, Serialize)]
pub struct MonthInequality {
    /// Calendar month (1..=12)
    pub month: u8,
    pub month_name: &'static str,
    pub n_days: usize,
    pub gini: f64,
}

/// Result of the inequality calculation
#[derive(Debug, Clone, Serialize)]
pub struct InequalityResult {
    /// One entry per represented month, in calendar order
    pub months: Vec<MonthInequality>,
    pub most_unequal: &'static str,
    pub least_unequal: &'static str,
}

/// Gini coefficient of a sample.
///
/// Computed from the sorted sequence:
///
/// ```text
/// G = Σᵢ (2i − n − 1)·x₍ᵢ₎ / (n · Σx)      (i = 1..n, x sorted ascending)
/// ```
///
/// which is the mean-absolute-difference definition rearranged to run in
/// O(n log n). Empty and all-zero samples yield 0 by convention; any
/// non-negative sample lands in [0, 1).
pub fn gini(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = sorted.iter().sum();
    if total == 0.0 {
        return 0.0;
    }
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(idx, &x)| (2.0 * (idx + 1) as f64 - n as f64 - 1.0) * x)
        .sum();
    weighted / (n as f64 * total)
}

/// Compute the Gini coefficient of every calendar month's word counts.
pub fn calculate_inequality(data: &PlanData) -> Result<InequalityResult> {
    ensure!(!data.is_empty(), "cannot compute inequality of an empty plan");

    let mut by_month: FxHashMap<u8, Vec<f64>> = FxHashMap::default();
    for reading in data.readings() {
        by_month
            .entry(calendar::month_of_day(reading.day_index))
            .or_default()
            .push(reading.word_count as f64);
    }

    let months: Vec<MonthInequality> = (1..=12u8)
        .filter_map(|month| {
            by_month.get(&month).map(|counts| MonthInequality {
                month,
                month_name: calendar::month_name(month),
                n_days: counts.len(),
                gini: gini(counts),
            })
        })
        .collect();

    // months is non-empty because data is non-empty
    let most = months
        .iter()
        .max_by(|a, b| {
            a.gini
                .partial_cmp(&b.gini)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|m| m.month_name)
        .unwrap_or("");
    let least = months
        .iter()
        .min_by(|a, b| {
            a.gini
                .partial_cmp(&b.gini)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|m| m.month_name)
        .unwrap_or("");

    Ok(InequalityResult {
        months,
        most_unequal: most,
        least_unequal: least,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DailyReading;
    use approx::assert_relative_eq;

    #[test]
    fn test_gini_equal_values_is_zero() {
        assert_relative_eq!(gini(&[100.0; 31]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gini_conventions() {
        assert_relative_eq!(gini(&[]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(gini(&[0.0, 0.0, 0.0]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gini_known_value() {
        // [0, 0, 0, 1]: G = (n−1)/n = 0.75
        assert_relative_eq!(gini(&[0.0, 0.0, 0.0, 1.0]), 0.75, epsilon = 1e-12);
        // [1, 2, 3]: Σᵢⱼ|xᵢ−xⱼ| = 8, so G = 8/(2·n²·mean) = 8/36 = 2/9
        assert_relative_eq!(gini(&[1.0, 2.0, 3.0]), 2.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_year_produces_twelve_months() {
        let readings = (1..=365)
            .map(|day_index| DailyReading {
                day_index,
                word_count: 2000 + (day_index as u32 * 13) % 900,
            })
            .collect();
        let data = PlanData::from_readings(readings).unwrap();
        let result = calculate_inequality(&data).unwrap();

        assert_eq!(result.months.len(), 12);
        assert_eq!(result.months[0].month_name, "January");
        assert_eq!(result.months[0].n_days, 31);
        assert_eq!(result.months[1].n_days, 28);
        for m in &result.months {
            assert!((0.0..1.0).contains(&m.gini), "{} out of range", m.gini);
        }
    }

    #[test]
    fn test_constant_month_is_least_unequal() {
        // January flat, the rest wobbling
        let readings = (1..=365)
            .map(|day_index| DailyReading {
                day_index,
                word_count: if day_index <= 31 {
                    2500
                } else {
                    2000 + (day_index as u32 * 389) % 1700
                },
            })
            .collect();
        let data = PlanData::from_readings(readings).unwrap();
        let result = calculate_inequality(&data).unwrap();
        assert_eq!(result.least_unequal, "January");
        assert_relative_eq!(result.months[0].gini, 0.0, epsilon = 1e-12);
    }
}
