//! READING CHALLENGE SCORE (VOLUME + VOLATILITY)
//!
//! Scores how demanding each stretch of the plan is. For every day, a
//! trailing 14-day window (clipped at day 1, so the first 13 days use a
//! shorter window) yields a rolling mean (volume) and rolling sample
//! standard deviation (volatility). Both are normalized by the whole-year
//! mean and standard deviation and summed:
//!
//! ```text
//! score(i) = volume(i) / year_mean + volatility(i) / year_std
//! ```
//!
//! The combination is monotonically non-decreasing in both window
//! statistics. Weeks are contiguous 7-day blocks from day 1; the weekly
//! ranking averages the daily scores inside each block.

use crate::calendar;
use crate::data::PlanData;
use crate::stats;
use anyhow::{ensure, Result};
use serde::Serialize;

/// Trailing window length in days.
pub const WINDOW: usize = 14;

/// How many weeks the ranking reports.
pub const TOP_WEEKS: usize = 3;

/// Average challenge score of one 7-day week
#[derive(Debug, Clone, Serialize)]
pub struct WeekScore {
    /// 1-based week number (1..=53)
    pub week: u16,
    pub mean_score: f64,
}

/// Result of the challenge score calculation
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeResult {
    /// One score per day, in day order; no undefined entries
    pub daily_scores: Vec<f64>,
    /// Every week, ranked by descending average score
    pub ranked_weeks: Vec<WeekScore>,
    /// The `TOP_WEEKS` head of `ranked_weeks`
    pub top_weeks: Vec<WeekScore>,
    /// Day with the maximum score (earliest on ties)
    pub peak_day_index: u16,
    /// Calendar date of the peak day, like "Oct 05"
    pub peak_date: String,
    pub peak_score: f64,
}

/// Combine a window's volume and volatility into one score.
///
/// Pure and monotone: for fixed baselines, a larger rolling mean or a
/// larger rolling standard deviation never lowers the score. Degenerate
/// baselines (zero mean or zero spread) contribute nothing instead of
/// dividing by zero.
pub fn challenge_score(volume: f64, volatility: f64, year_mean: f64, year_std: f64) -> f64 {
    let volume_term = if year_mean > 0.0 {
        volume / year_mean
    } else {
        0.0
    };
    let volatility_term = if year_std > 0.0 {
        volatility / year_std
    } else {
        0.0
    };
    volume_term + volatility_term
}

/// Rolling volume/volatility profile over trailing clipped windows.
///
/// Returns one `(mean, sample_std)` pair per day; single-element windows
/// report zero volatility.
pub fn rolling_profile(counts: &[f64]) -> Vec<(f64, f64)> {
    (0..counts.len())
        .map(|i| {
            let start = i.saturating_sub(WINDOW - 1);
            let window = &counts[start..=i];
            let volume = stats::mean(window).unwrap_or(0.0);
            let volatility = stats::sample_std(window).unwrap_or(0.0);
            (volume, volatility)
        })
        .collect()
}

/// Calculate the per-day challenge series, the weekly ranking and the
/// peak day.
pub fn calculate_challenge(data: &PlanData) -> Result<ChallengeResult> {
    ensure!(!data.is_empty(), "cannot score an empty plan");

    let counts = data.counts();
    let year_mean = stats::mean(counts).unwrap_or(0.0);
    let year_std = stats::sample_std(counts).unwrap_or(0.0);

    let daily_scores: Vec<f64> = rolling_profile(counts)
        .into_iter()
        .map(|(volume, volatility)| challenge_score(volume, volatility, year_mean, year_std))
        .collect();

    // Weekly aggregation: average the daily scores inside each 7-day block
    let mut week_sums: Vec<(f64, usize)> = vec![(0.0, 0); calendar::WEEKS_IN_YEAR];
    for (reading, &score) in data.readings().iter().zip(daily_scores.iter()) {
        let week = calendar::week_of_day(reading.day_index) as usize;
        let slot = &mut week_sums[week - 1];
        slot.0 += score;
        slot.1 += 1;
    }

    let mut ranked_weeks: Vec<WeekScore> = week_sums
        .iter()
        .enumerate()
        .filter(|(_, &(_, n))| n > 0)
        .map(|(idx, &(sum, n))| WeekScore {
            week: (idx + 1) as u16,
            mean_score: sum / n as f64,
        })
        .collect();
    ranked_weeks.sort_by(|a, b| {
        b.mean_score
            .partial_cmp(&a.mean_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.week.cmp(&b.week))
    });
    let top_weeks: Vec<WeekScore> = ranked_weeks.iter().take(TOP_WEEKS).cloned().collect();

    // Peak day: earliest argmax of the daily series
    let (peak_pos, &peak_score) = daily_scores
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| {
            a.partial_cmp(b)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(ib.cmp(ia))
        })
        .expect("non-empty checked above");
    let peak_day_index = data.readings()[peak_pos].day_index;

    Ok(ChallengeResult {
        daily_scores,
        ranked_weeks,
        top_weeks,
        peak_day_index,
        peak_date: calendar::day_label(peak_day_index),
        peak_score,
    })
}
