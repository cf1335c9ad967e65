//! Combined summaries and the range analysis pipeline.
//!
//! [`daily_summary`] folds every aggregator into one [`DailySummary`];
//! [`analyze_range`] loads a date range and summarizes it overall and per day.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use daylog_core::error::Result;
use daylog_core::models::NormalizedEvent;
use daylog_core::time_utils::parse_date;
use serde::Serialize;
use tracing::debug;

use crate::aggregator::{
    efficiency_stats, energy_stats, focus_stats, mood_distribution, time_by_category,
    time_by_category_percentage, total_minutes, EfficiencyStats, RatingStats,
};
use crate::reader::load_range_dates;

// ── Public types ──────────────────────────────────────────────────────────────

/// Every aggregate for one set of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySummary {
    pub total_events: usize,
    pub total_minutes: u64,
    pub time_by_category: BTreeMap<String, u64>,
    pub time_percentage: BTreeMap<String, f64>,
    pub mood_distribution: BTreeMap<String, u64>,
    pub efficiency: EfficiencyStats,
    pub focus: RatingStats,
    pub energy: RatingStats,
}

/// The summary of the events filed under one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateSummary {
    pub date: NaiveDate,
    pub summary: DailySummary,
}

/// Metadata produced alongside a [`RangeAnalysis`].
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Calendar days in the requested range (0 for a reversed range).
    pub days_requested: usize,
    /// Days in the range that had at least one event.
    pub days_with_events: usize,
    pub events_loaded: usize,
    /// Wall-clock seconds spent reading day files.
    pub load_time_seconds: f64,
}

/// The complete output of [`analyze_range`].
#[derive(Debug, Clone, Serialize)]
pub struct RangeAnalysis {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Summary over the whole range.
    pub summary: DailySummary,
    /// One entry per day that had events, oldest first.
    pub days: Vec<DateSummary>,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Summarize `events` with every aggregator.
pub fn daily_summary(events: &[NormalizedEvent]) -> DailySummary {
    DailySummary {
        total_events: events.len(),
        total_minutes: total_minutes(events),
        time_by_category: time_by_category(events),
        time_percentage: time_by_category_percentage(events),
        mood_distribution: mood_distribution(events),
        efficiency: efficiency_stats(events),
        focus: focus_stats(events),
        energy: energy_stats(events),
    }
}

/// Group `events` by their `_date` and summarize each group.
///
/// Returns one entry per date present, sorted by date (ascending).
pub fn summarize_by_date(events: &[NormalizedEvent]) -> Vec<DateSummary> {
    let mut by_date: BTreeMap<NaiveDate, Vec<NormalizedEvent>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.date()).or_default().push(event.clone());
    }

    by_date
        .into_iter()
        .map(|(date, day_events)| DateSummary {
            date,
            summary: daily_summary(&day_events),
        })
        .collect()
}

/// Load `start_date..=end_date` from `data_root` and summarize it.
///
/// Date strings are `YYYY-MM-DD`. Any load error aborts the analysis.
pub fn analyze_range(data_root: &Path, start_date: &str, end_date: &str) -> Result<RangeAnalysis> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    let load_start = std::time::Instant::now();
    let events = load_range_dates(data_root, start, end)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let summary = daily_summary(&events);
    let days = summarize_by_date(&events);

    let days_requested = if start > end {
        0
    } else {
        (end - start).num_days() as usize + 1
    };

    debug!(
        "Analyzed {} events over {} days ({} with events)",
        events.len(),
        days_requested,
        days.len()
    );

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        days_requested,
        days_with_events: days.len(),
        events_loaded: events.len(),
        load_time_seconds: load_time,
    };

    Ok(RangeAnalysis {
        start,
        end,
        summary,
        days,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{day_file_path, load_range};
    use daylog_core::formatting::format_minutes;
    use daylog_core::settings::Settings;
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_day(root: &Path, day: NaiveDate, records: &[serde_json::Value]) {
        let path = day_file_path(root, day);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = std::fs::File::create(&path).unwrap();
        for record in records {
            writeln!(file, "{}", record).unwrap();
        }
    }

    /// Day 1: 90 minutes of work. Day 2: 30 minutes of rest.
    fn two_day_store() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_day(
            dir.path(),
            date(2024, 1, 1),
            &[json!({"start": "0900", "end": "1030", "category": "work"})],
        );
        write_day(
            dir.path(),
            date(2024, 1, 2),
            &[json!({"start": "2200", "end": "2230", "category": "rest"})],
        );
        dir
    }

    // ── daily_summary ─────────────────────────────────────────────────────────

    #[test]
    fn test_daily_summary_end_to_end() {
        let dir = two_day_store();
        let events = load_range(dir.path(), "2024-01-01", "2024-01-02").unwrap();
        let summary = daily_summary(&events);

        assert_eq!(summary.total_events, 2);
        assert_eq!(summary.total_minutes, 120);
        assert_eq!(
            summary.time_by_category,
            BTreeMap::from([("rest".to_string(), 30), ("work".to_string(), 90)])
        );
        assert!((summary.time_percentage["work"] - 75.0).abs() < 1e-9);
        assert_eq!(summary.mood_distribution.get("neutral"), Some(&2));
        assert_eq!(summary.efficiency.counts.get("medium"), Some(&2));
        assert_eq!(summary.focus.count, 2);
        assert!((summary.energy.average - 3.0).abs() < 1e-9);
        assert_eq!(format_minutes(summary.total_minutes), "2h");
    }

    #[test]
    fn test_daily_summary_empty() {
        let summary = daily_summary(&[]);
        assert_eq!(summary, DailySummary::default());
        assert!(summary.time_percentage.is_empty());
        assert_eq!(summary.focus.count, 0);
    }

    #[test]
    fn test_daily_summary_serialized_shape() {
        let value = serde_json::to_value(daily_summary(&[])).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "total_events",
            "total_minutes",
            "time_by_category",
            "time_percentage",
            "mood_distribution",
            "efficiency",
            "focus",
            "energy",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(value["efficiency"], json!({"counts": {}, "percentages": {}}));
    }

    // ── summarize_by_date ─────────────────────────────────────────────────────

    #[test]
    fn test_summarize_by_date_groups_per_day() {
        let dir = two_day_store();
        let events = load_range(dir.path(), "2024-01-01", "2024-01-02").unwrap();
        let days = summarize_by_date(&events);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(2024, 1, 1));
        assert_eq!(days[0].summary.total_minutes, 90);
        assert_eq!(days[1].date, date(2024, 1, 2));
        assert_eq!(days[1].summary.time_by_category.get("rest"), Some(&30));
    }

    #[test]
    fn test_summarize_by_date_empty() {
        assert!(summarize_by_date(&[]).is_empty());
    }

    // ── analyze_range ─────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_range_metadata() {
        let dir = two_day_store();
        let analysis = analyze_range(dir.path(), "2023-12-31", "2024-01-03").unwrap();

        assert_eq!(analysis.start, date(2023, 12, 31));
        assert_eq!(analysis.end, date(2024, 1, 3));
        assert_eq!(analysis.summary.total_minutes, 120);
        assert_eq!(analysis.days.len(), 2);
        assert_eq!(analysis.metadata.days_requested, 4);
        assert_eq!(analysis.metadata.days_with_events, 2);
        assert_eq!(analysis.metadata.events_loaded, 2);
    }

    #[test]
    fn test_analyze_range_reversed_is_empty() {
        let dir = two_day_store();
        let analysis = analyze_range(dir.path(), "2024-01-02", "2024-01-01").unwrap();

        assert_eq!(analysis.metadata.days_requested, 0);
        assert_eq!(analysis.summary, DailySummary::default());
        assert!(analysis.days.is_empty());
    }

    #[test]
    fn test_analyze_range_with_settings_root() {
        let dir = two_day_store();
        let settings = Settings {
            data_root: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };

        let analysis = analyze_range(&settings.resolve_data_root(), "2024-01-01", "2024-01-01")
            .unwrap();
        assert_eq!(analysis.summary.time_by_category.get("work"), Some(&90));
        assert_eq!(analysis.metadata.days_requested, 1);
    }

    #[test]
    fn test_analyze_range_invalid_date() {
        let dir = TempDir::new().unwrap();
        let err = analyze_range(dir.path(), "2024-01-01", "2024-13-01").unwrap_err();
        assert!(err.is_format_error());
    }
}
