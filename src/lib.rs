//! Reading Plan Analyzer
//!
//! Statistical analysis of a yearly reading plan: 365 daily word counts,
//! one per calendar day of a non-leap year.
//!
//! The crate is organized the same way the analysis itself is:
//! - `calendar/`: Fixed day-of-year ↔ calendar date mapping
//! - `data/`: CSV loading and validation with Polars
//! - `stats/`: Descriptive statistics and distribution-tail primitives
//! - `metrics/`: Individual analyses (summary, outliers, normality,
//!   challenge score, monthly inequality)
//! - `analyzer/`: Coordinator that runs every analysis over one dataset

pub mod analyzer;
pub mod calendar;
pub mod data;
pub mod metrics;
pub mod stats;

// Re-export commonly used types
pub use analyzer::{AnalysisReport, PlanAnalyzer};
pub use data::{DailyReading, PlanData, PlanDataError};
pub use metrics::*;
