//! Data loading and validation.
//!
//! Loads the daily word-count table (CSV with `Day,WordCount` columns)
//! using Polars and normalizes it into an ordered, immutable sequence of
//! [`DailyReading`] values.
//!
//! Day keys come in two encodings: plain day-of-year (1..=365) or the
//! plan's `MMDD` integers (101..=1231). The encoding is detected per file,
//! never per row: if every key fits 1..=365 the file is treated as
//! day-indexed, otherwise every key must be a valid `MMDD` date.

use crate::calendar;
use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One day of the plan: 1-based day-of-year plus the words assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReading {
    pub day_index: u16,
    pub word_count: u32,
}

/// Validation failures while assembling the daily sequence.
#[derive(Debug, Error)]
pub enum PlanDataError {
    #[error("reading plan is empty")]
    Empty,

    #[error("day key {key} is not a day-of-year (1..=365) or a valid MMDD date")]
    BadDayKey { key: i64 },

    #[error("negative word count {count} for day key {key}")]
    NegativeCount { key: i64, count: i64 },

    #[error("missing value in row {row}")]
    MissingValue { row: usize },

    #[error("duplicate entry for day {day}")]
    DuplicateDay { day: u16 },
}

/// The loaded plan: readings sorted by day, immutable after construction.
#[derive(Debug, Clone)]
pub struct PlanData {
    readings: Vec<DailyReading>,
    /// Word counts as f64, in day order. Cached because every analysis
    /// consumes the same numeric view.
    counts: Vec<f64>,
}

impl PlanData {
    /// Build from raw readings: sorts by day, rejects duplicates and empty
    /// input, warns when the sequence is not a full 365-day year (plan
    /// length is a domain assumption, not an invariant).
    pub fn from_readings(mut readings: Vec<DailyReading>) -> Result<Self, PlanDataError> {
        if readings.is_empty() {
            return Err(PlanDataError::Empty);
        }
        readings.sort_by_key(|r| r.day_index);
        for pair in readings.windows(2) {
            if pair[0].day_index == pair[1].day_index {
                return Err(PlanDataError::DuplicateDay {
                    day: pair[0].day_index,
                });
            }
        }
        if readings.len() != calendar::DAYS_IN_YEAR {
            tracing::warn!(
                "expected {} days, got {}; continuing with partial plan",
                calendar::DAYS_IN_YEAR,
                readings.len()
            );
        }
        let counts = readings.iter().map(|r| r.word_count as f64).collect();
        Ok(Self { readings, counts })
    }

    /// Load the daily word-count table from CSV.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading daily word counts: {:?}", path);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load word counts CSV: {:?}", path))?;

        let readings = Self::readings_from_frame(&df)
            .with_context(|| format!("Invalid daily word counts in {:?}", path))?;

        let data = Self::from_readings(readings)?;
        tracing::info!("Loaded {} daily readings", data.len());
        Ok(data)
    }

    /// Extract and validate `(Day, WordCount)` rows from a DataFrame.
    fn readings_from_frame(df: &DataFrame) -> Result<Vec<DailyReading>> {
        let day_col = df
            .column("Day")
            .context("Column 'Day' not found")?
            .cast(&DataType::Int64)
            .context("Column 'Day' is not numeric")?;
        let count_col = df
            .column("WordCount")
            .context("Column 'WordCount' not found")?
            .cast(&DataType::Int64)
            .context("Column 'WordCount' is not numeric")?;

        let days = day_col.i64().context("Column 'Day' is not integer-typed")?;
        let counts = count_col
            .i64()
            .context("Column 'WordCount' is not integer-typed")?;

        let mut keyed: Vec<(i64, i64)> = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            match (days.get(row), counts.get(row)) {
                (Some(day), Some(count)) => keyed.push((day, count)),
                _ => return Err(PlanDataError::MissingValue { row }.into()),
            }
        }

        // Encoding detection over the whole file: MMDD keys start at 101
        // and run past 365, day indices never do.
        let day_indexed = keyed
            .iter()
            .all(|&(day, _)| (1..=calendar::DAYS_IN_YEAR as i64).contains(&day));

        let mut readings = Vec::with_capacity(keyed.len());
        for (key, count) in keyed {
            if count < 0 {
                return Err(PlanDataError::NegativeCount { key, count }.into());
            }
            let day_index = if day_indexed {
                key as u16
            } else {
                u32::try_from(key)
                    .ok()
                    .and_then(calendar::day_index_from_mmdd)
                    .ok_or(PlanDataError::BadDayKey { key })?
            };
            readings.push(DailyReading {
                day_index,
                word_count: count as u32,
            });
        }
        Ok(readings)
    }

    /// Readings in day order.
    pub fn readings(&self) -> &[DailyReading] {
        &self.readings
    }

    /// Word counts as f64, in day order.
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
