//! Analyzer Integration Tests
//!
//! Drives the whole pipeline from CSV on disk to the rendered report over
//! synthetic plan years.

use plan_analyzer_rust::{calendar, DailyReading, PlanAnalyzer, PlanData};
use std::fmt::Write as _;
use std::io::Write as _;

/// A deterministic synthetic year: banded noise around the usual daily
/// target with one heavy day injected in October.
fn synthetic_year() -> Vec<DailyReading> {
    (1..=365)
        .map(|day_index| {
            let word_count = if day_index == 278 {
                // Oct 5: far above the fence
                6200
            } else {
                2300 + (day_index as u32 * 97) % 950
            };
            DailyReading {
                day_index,
                word_count,
            }
        })
        .collect()
}

fn write_mmdd_csv(readings: &[DailyReading]) -> tempfile::NamedTempFile {
    let mut body = String::from("Day,WordCount\n");
    for r in readings {
        let mmdd = calendar::mmdd_of_day(r.day_index).unwrap();
        let _ = writeln!(body, "{},{}", mmdd, r.word_count);
    }
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_pipeline_from_mmdd_csv() {
    let readings = synthetic_year();
    let csv = write_mmdd_csv(&readings);

    let analyzer = PlanAnalyzer::from_csv(csv.path()).unwrap();
    assert_eq!(analyzer.data().len(), 365);

    let report = analyzer.analyze().unwrap();

    // Summary invariants
    assert_eq!(report.summary.count, 365);
    assert!(report.summary.min <= report.summary.q1);
    assert!(report.summary.q1 <= report.summary.median);
    assert!(report.summary.median <= report.summary.q3);
    assert!(report.summary.q3 <= report.summary.max);

    // Bounds recompute from the reported quartiles
    let o = &report.outliers;
    assert!((o.lower_bound - (o.q1 - 1.5 * o.iqr)).abs() < 1e-9);
    assert!((o.upper_bound - (o.q3 + 1.5 * o.iqr)).abs() < 1e-9);

    // The injected heavy day surfaces first, with its calendar date
    assert_eq!(o.outliers[0].day_index, 278);
    assert_eq!(o.outliers[0].date, "Oct 05");
    assert_eq!(o.outliers[0].word_count, 6200);

    // Challenge series covers every day; every week is ranked
    assert_eq!(report.challenge.daily_scores.len(), 365);
    assert_eq!(report.challenge.ranked_weeks.len(), calendar::WEEKS_IN_YEAR);
    assert_eq!(report.challenge.top_weeks.len(), 3);

    // The heavy day drags its trailing windows up: peak lands on or soon
    // after Oct 5
    assert!((278..278 + 14).contains(&(report.challenge.peak_day_index as u32)));

    // Twelve months of Gini values inside [0, 1)
    assert_eq!(report.inequality.months.len(), 12);
    for m in &report.inequality.months {
        assert!((0.0..1.0).contains(&m.gini));
    }
    // October holds the heavy day, so it cannot be the flattest month
    assert_ne!(report.inequality.least_unequal, "October");
}

#[test]
fn report_round_trips_to_json() {
    let data = PlanData::from_readings(synthetic_year()).unwrap();
    let report = PlanAnalyzer::new(data).analyze().unwrap();

    let json = report.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["summary"]["count"], 365);
    assert_eq!(parsed["challenge"]["daily_scores"].as_array().unwrap().len(), 365);
    assert_eq!(parsed["inequality"]["months"].as_array().unwrap().len(), 12);

    let text = report.render_text();
    assert!(text.contains("Oct 05"));
    assert!(text.contains("--- Normality Test"));
}

#[test]
fn day_indexed_csv_loads_like_mmdd() {
    // Same year written with plain 1..=365 keys
    let readings = synthetic_year();
    let mut body = String::from("Day,WordCount\n");
    for r in &readings {
        let _ = writeln!(body, "{},{}", r.day_index, r.word_count);
    }
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();

    let from_index = PlanAnalyzer::from_csv(file.path()).unwrap();
    let from_mmdd = PlanAnalyzer::from_csv(write_mmdd_csv(&readings).path()).unwrap();
    assert_eq!(from_index.data().counts(), from_mmdd.data().counts());
}

#[test]
fn short_plan_still_analyzes() {
    // A two-week excerpt: warns, does not fail; normality is computable
    // (n >= 8), weeks beyond the data are simply absent
    let readings: Vec<DailyReading> = (1..=14)
        .map(|day_index| DailyReading {
            day_index,
            word_count: 1500 + day_index as u32 * 120,
        })
        .collect();
    let data = PlanData::from_readings(readings).unwrap();
    let report = PlanAnalyzer::new(data).analyze().unwrap();

    assert_eq!(report.summary.count, 14);
    assert!(report.normality.test.is_some());
    assert_eq!(report.challenge.ranked_weeks.len(), 2);
    assert_eq!(report.inequality.months.len(), 1);
    assert_eq!(report.inequality.months[0].month_name, "January");
}

#[test]
fn tiny_plan_reports_normality_as_not_computable() {
    let readings: Vec<DailyReading> = (1..=5)
        .map(|day_index| DailyReading {
            day_index,
            word_count: 2000 + day_index as u32,
        })
        .collect();
    let data = PlanData::from_readings(readings).unwrap();
    let report = PlanAnalyzer::new(data).analyze().unwrap();
    assert!(report.normality.test.is_none());
    assert!(report.render_text().contains("Not computable"));
}
