//! Run the full reading plan analysis over a daily word-count CSV.
//!
//! Usage: analyze_plan [CSV_PATH] [JSON_OUT]
//!
//! CSV_PATH defaults to `daily_word_counts.csv`. When JSON_OUT is given
//! the report is also written there as JSON.

use anyhow::{Context, Result};
use plan_analyzer_rust::PlanAnalyzer;
use std::env;
use std::fs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let csv_path = args
        .next()
        .unwrap_or_else(|| "daily_word_counts.csv".to_string());
    let json_out = args.next();

    let analyzer = PlanAnalyzer::from_csv(&csv_path)?;
    let report = analyzer.analyze()?;

    println!("{}", report.render_text());

    if let Some(path) = json_out {
        fs::write(&path, report.to_json()?)
            .with_context(|| format!("Failed to write report JSON: {}", path))?;
        println!("Report JSON saved to {}", path);
    }

    Ok(())
}
