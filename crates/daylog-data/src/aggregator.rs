//! Pure aggregations over normalized events.
//!
//! Every function takes a slice of [`NormalizedEvent`]s and reads fields
//! through the record accessors, so missing fields always fall back to the
//! same defaults.

use std::collections::BTreeMap;

use daylog_core::models::NormalizedEvent;
use serde::Serialize;

// ── Result types ──────────────────────────────────────────────────────────────

/// Count and share of each efficiency label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EfficiencyStats {
    pub counts: BTreeMap<String, u64>,
    /// Percent of events per label (0-100). Empty when there are no events.
    pub percentages: BTreeMap<String, f64>,
}

/// Descriptive statistics for an integer rating such as focus or energy.
///
/// All fields are zero for an empty input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatingStats {
    pub average: f64,
    pub min: i64,
    pub max: i64,
    pub count: usize,
}

// ── Time ──────────────────────────────────────────────────────────────────────

/// Total minutes per category.
pub fn time_by_category(events: &[NormalizedEvent]) -> BTreeMap<String, u64> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        *totals.entry(event.category().to_string()).or_default() +=
            u64::from(event.duration_minutes());
    }
    totals
}

/// Percent of total minutes per category (0-100).
///
/// Empty when the events add up to zero minutes.
pub fn time_by_category_percentage(events: &[NormalizedEvent]) -> BTreeMap<String, f64> {
    let totals = time_by_category(events);
    let total_time: u64 = totals.values().sum();
    shares(&totals, total_time)
}

/// Sum of all event durations.
pub fn total_minutes(events: &[NormalizedEvent]) -> u64 {
    events.iter().map(|e| u64::from(e.duration_minutes())).sum()
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// Number of events per mood.
pub fn mood_distribution(events: &[NormalizedEvent]) -> BTreeMap<String, u64> {
    count_by(events, NormalizedEvent::mood)
}

/// Counts and percentages per efficiency label.
pub fn efficiency_stats(events: &[NormalizedEvent]) -> EfficiencyStats {
    let counts = count_by(events, NormalizedEvent::efficiency);
    let total: u64 = counts.values().sum();
    let percentages = shares(&counts, total);
    EfficiencyStats {
        counts,
        percentages,
    }
}

// ── Ratings ───────────────────────────────────────────────────────────────────

/// Average, min and max of the `focused` rating.
pub fn focus_stats(events: &[NormalizedEvent]) -> RatingStats {
    rating_stats(events.iter().map(NormalizedEvent::focused))
}

/// Average, min and max of the `energy` rating.
pub fn energy_stats(events: &[NormalizedEvent]) -> RatingStats {
    rating_stats(events.iter().map(NormalizedEvent::energy))
}

// ── Private ───────────────────────────────────────────────────────────────────

fn count_by<'a>(
    events: &'a [NormalizedEvent],
    label: impl Fn(&'a NormalizedEvent) -> &'a str,
) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        *counts.entry(label(event).to_string()).or_default() += 1;
    }
    counts
}

/// Each value as a percentage of `total`; empty when `total` is zero.
fn shares(values: &BTreeMap<String, u64>, total: u64) -> BTreeMap<String, f64> {
    if total == 0 {
        return BTreeMap::new();
    }
    values
        .iter()
        .map(|(key, &value)| (key.clone(), value as f64 / total as f64 * 100.0))
        .collect()
}

fn rating_stats(values: impl Iterator<Item = i64>) -> RatingStats {
    let values: Vec<i64> = values.collect();
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return RatingStats::default();
    };

    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    RatingStats {
        average: sum as f64 / values.len() as f64,
        min,
        max,
        count: values.len(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
