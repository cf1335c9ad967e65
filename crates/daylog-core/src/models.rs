use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time_utils::duration_minutes;

/// Category used when an event carries none.
pub const DEFAULT_CATEGORY: &str = "unknown";
/// Mood used when an event carries none.
pub const DEFAULT_MOOD: &str = "neutral";
/// Efficiency label used when an event carries none.
pub const DEFAULT_EFFICIENCY: &str = "medium";
/// Focus and energy rating used when an event carries none.
pub const DEFAULT_RATING: i64 = 3;

/// A single activity record as stored on one line of a day file.
///
/// Only the fields below are examined; anything else on the line is kept in
/// [`EventRecord::extra`] and written back out unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Start time of day, `HHMM`.
    pub start: String,
    /// End time of day, `HHMM`. May be earlier than `start` for overnight events.
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,
    /// Focus rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<i64>,
    /// Energy rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<i64>,
    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EventRecord {
    /// Create a record with only the required time fields set.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            category: None,
            mood: None,
            efficiency: None,
            focused: None,
            energy: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Category, or [`DEFAULT_CATEGORY`].
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Mood, or [`DEFAULT_MOOD`].
    pub fn mood(&self) -> &str {
        self.mood.as_deref().unwrap_or(DEFAULT_MOOD)
    }

    /// Efficiency label, or [`DEFAULT_EFFICIENCY`].
    pub fn efficiency(&self) -> &str {
        self.efficiency.as_deref().unwrap_or(DEFAULT_EFFICIENCY)
    }

    /// Focus rating, or [`DEFAULT_RATING`].
    pub fn focused(&self) -> i64 {
        self.focused.unwrap_or(DEFAULT_RATING)
    }

    /// Energy rating, or [`DEFAULT_RATING`].
    pub fn energy(&self) -> i64 {
        self.energy.unwrap_or(DEFAULT_RATING)
    }
}

/// An [`EventRecord`] with its calendar date and duration attached.
///
/// Serializes as the stored record plus `_date` (`YYYY-MM-DD`) and
/// `_duration_minutes`. The derived fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEvent {
    #[serde(flatten)]
    record: EventRecord,
    #[serde(rename = "_date")]
    date: NaiveDate,
    #[serde(rename = "_duration_minutes")]
    duration_minutes: u32,
}

impl NormalizedEvent {
    /// Attach `date` (the day the record was filed under) and compute the
    /// duration from `start`/`end`.
    ///
    /// Stored `_date` / `_duration_minutes` keys are replaced by the derived
    /// values.
    pub fn from_record(mut record: EventRecord, date: NaiveDate) -> Result<Self> {
        record.extra.remove("_date");
        record.extra.remove("_duration_minutes");
        let duration_minutes = duration_minutes(&record.start, &record.end)?;
        Ok(Self {
            record,
            date,
            duration_minutes,
        })
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    /// Calendar date taken from the day file path.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn category(&self) -> &str {
        self.record.category()
    }

    pub fn mood(&self) -> &str {
        self.record.mood()
    }

    pub fn efficiency(&self) -> &str {
        self.record.efficiency()
    }

    pub fn focused(&self) -> i64 {
        self.record.focused()
    }

    pub fn energy(&self) -> i64 {
        self.record.energy()
    }
}
