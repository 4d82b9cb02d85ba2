//! Plan Analyzer - Main coordinator for the yearly reading plan analyses
//!
//! Owns the loaded daily sequence and runs every analysis over it. The
//! analyses are independent: each consumes the same immutable data and
//! none feeds another, so the report is assembled in one pass.

use crate::data::PlanData;
use crate::metrics::*;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Main plan analyzer
pub struct PlanAnalyzer {
    data: PlanData,
}

/// Full analysis of one plan
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: SummaryResult,
    pub outliers: OutlierResult,
    pub normality: NormalityResult,
    pub challenge: ChallengeResult,
    pub inequality: InequalityResult,
}

impl PlanAnalyzer {
    pub fn new(data: PlanData) -> Self {
        Self { data }
    }

    /// Load the daily word-count CSV and wrap it for analysis.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(PlanData::load_csv(path)?))
    }

    pub fn data(&self) -> &PlanData {
        &self.data
    }

    /// Run every analysis and assemble the report.
    pub fn analyze(&self) -> Result<AnalysisReport> {
        tracing::info!("Analyzing {} daily readings", self.data.len());

        let summary = calculate_summary(self.data.counts())
            .context("Failed to compute summary statistics")?;
        let outliers =
            calculate_outliers(&self.data).context("Failed to run outlier detection")?;
        let normality = calculate_normality(self.data.counts());
        let challenge =
            calculate_challenge(&self.data).context("Failed to compute challenge scores")?;
        let inequality =
            calculate_inequality(&self.data).context("Failed to compute monthly inequality")?;

        Ok(AnalysisReport {
            summary,
            outliers,
            normality,
            challenge,
            inequality,
        })
    }
}

impl AnalysisReport {
    /// Serialize the full report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Render the report as the text layout the plan's README uses.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "--- Summary Statistics for Daily Word Counts ---");
        let s = &self.summary;
        let _ = writeln!(out, "count    {}", s.count);
        let _ = writeln!(out, "mean     {:.6}", s.mean);
        let _ = writeln!(out, "std      {:.6}", s.std);
        let _ = writeln!(out, "min      {:.6}", s.min);
        let _ = writeln!(out, "25%      {:.6}", s.q1);
        let _ = writeln!(out, "50%      {:.6}", s.median);
        let _ = writeln!(out, "75%      {:.6}", s.q3);
        let _ = writeln!(out, "max      {:.6}", s.max);

        let o = &self.outliers;
        let _ = writeln!(out, "\n--- Outlier Detection (using 1.5*IQR method) ---");
        let _ = writeln!(
            out,
            "Days with reading counts outside the range ({:.0} to {:.0} words):",
            o.lower_bound, o.upper_bound
        );
        if o.outliers.is_empty() {
            let _ = writeln!(out, "No significant outliers found.");
        } else {
            let _ = writeln!(out, " Day        Date  WordCount");
            for outlier in &o.outliers {
                let _ = writeln!(
                    out,
                    "{:>4}  {:>10}  {:>9}",
                    outlier.day_index, outlier.date, outlier.word_count
                );
            }
        }

        let _ = writeln!(out, "\n--- Normality Test (D'Agostino's K^2) ---");
        match &self.normality.test {
            Some(test) => {
                let _ = writeln!(out, "Statistic: {:.4}", test.statistic);
                let _ = writeln!(out, "P-value: {:.4}", test.p_value);
                if test.rejects_normality {
                    let _ = writeln!(
                        out,
                        "The p-value is less than 0.05, so we reject the null hypothesis."
                    );
                    let _ = writeln!(out, "Conclusion: The data is likely NOT normally distributed.");
                } else {
                    let _ = writeln!(
                        out,
                        "The p-value is greater than 0.05, so we cannot reject the null hypothesis."
                    );
                    let _ = writeln!(out, "Conclusion: The data could be normally distributed.");
                }
            }
            None => {
                let _ = writeln!(
                    out,
                    "Not computable: need at least 8 non-constant readings, got {}.",
                    self.normality.n
                );
            }
        }

        let c = &self.challenge;
        let _ = writeln!(out, "\n--- Reading Challenge Score (14-day window) ---");
        let _ = writeln!(
            out,
            "Peak challenge score {:.4} around: {} (day {}).",
            c.peak_score, c.peak_date, c.peak_day_index
        );
        let _ = writeln!(out, "Top {} most challenging weeks (by average score):", c.top_weeks.len());
        for week in &c.top_weeks {
            let _ = writeln!(out, "  Week {:>2}  {:.6}", week.week, week.mean_score);
        }

        let g = &self.inequality;
        let _ = writeln!(out, "\n--- Monthly Reading Load Inequality (Gini) ---");
        for month in &g.months {
            let _ = writeln!(out, "  {:<10} {:.4}", month.month_name, month.gini);
        }
        let _ = writeln!(out, "Most unequal month: {}", g.most_unequal);
        let _ = writeln!(out, "Least unequal month: {}", g.least_unequal);

        out
    }
}
