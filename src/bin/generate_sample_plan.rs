//! Generate a synthetic daily word-count CSV shaped like a real plan year:
//! counts hover around an ideal daily target with banded noise plus the
//! occasional heavy feast day.
//!
//! Usage: generate_sample_plan [OUT_CSV] [SEED]

use anyhow::{Context, Result};
use plan_analyzer_rust::calendar;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;

/// Ideal daily word target the generator balances around.
const DAILY_TARGET: i64 = 2780;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let out_path = args
        .next()
        .unwrap_or_else(|| "daily_word_counts_sample.csv".to_string());
    let seed: u64 = args
        .next()
        .map(|s| s.parse().context("SEED must be an integer"))
        .transpose()?
        .unwrap_or(42);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut days: Vec<i64> = Vec::with_capacity(calendar::DAYS_IN_YEAR);
    let mut counts: Vec<i64> = Vec::with_capacity(calendar::DAYS_IN_YEAR);

    for day_index in 1..=calendar::DAYS_IN_YEAR as u16 {
        let mut count = DAILY_TARGET + rng.gen_range(-450..=450);
        // Occasional feast day with a long reading
        if rng.gen_ratio(1, 40) {
            count += rng.gen_range(800..1400);
        }
        let mmdd = calendar::mmdd_of_day(day_index).expect("day within plan year");
        days.push(mmdd as i64);
        counts.push(count);
    }

    let mut df = df!("Day" => &days, "WordCount" => &counts)?;
    let mut file =
        File::create(&out_path).with_context(|| format!("Failed to create {}", out_path))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write {}", out_path))?;

    println!(
        "Wrote {} synthetic daily readings to {} (seed {})",
        df.height(),
        out_path,
        seed
    );
    Ok(())
}
