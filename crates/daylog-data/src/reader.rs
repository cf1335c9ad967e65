//! Day-file discovery and loading.
//!
//! Events live at `<data_root>/<YYYY>/<MM>/<DD>/events.jsonl`, one JSON
//! record per line. Loading attaches each record's date and duration and
//! returns [`NormalizedEvent`]s in date order, file order within a day.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use daylog_core::error::{DaylogError, Result};
use daylog_core::models::{EventRecord, NormalizedEvent};
use daylog_core::time_utils::{date_from_ymd, parse_date};
use tracing::{debug, warn};

/// File name of a day's event log.
pub const EVENTS_FILE_NAME: &str = "events.jsonl";

// ── Public API ───────────────────────────────────────────────────────────────

/// Path of the event file for `date` under `data_root`.
pub fn day_file_path(data_root: &Path, date: NaiveDate) -> PathBuf {
    data_root
        .join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}", date.day()))
        .join(EVENTS_FILE_NAME)
}

/// Load the events logged on `year-month-day`.
///
/// A day without an event file yields an empty vector. A line that is not a
/// valid record, or carries an invalid `HHMM` time, fails the whole call.
pub fn load_for_date(
    data_root: &Path,
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<NormalizedEvent>> {
    let date = date_from_ymd(year, month, day)?;
    load_for_day(data_root, date)
}

/// Same as [`load_for_date`] for an already-validated date.
pub fn load_for_day(data_root: &Path, date: NaiveDate) -> Result<Vec<NormalizedEvent>> {
    let path = day_file_path(data_root, date);

    let file = match std::fs::File::open(&path) {
        Ok(f) => f,
        Err(_) if !path.exists() => {
            debug!("No events logged for {}", date);
            return Ok(Vec::new());
        }
        Err(source) => return Err(DaylogError::FileRead { path, source }),
    };

    let events = parse_day_file(&path, BufReader::new(file), date)?;
    debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load every event between `start_date` and `end_date` (`YYYY-MM-DD`,
/// both inclusive).
///
/// A start after the end yields an empty vector.
pub fn load_range(
    data_root: &Path,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<NormalizedEvent>> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    load_range_dates(data_root, start, end)
}

/// Date-typed form of [`load_range`].
pub fn load_range_dates(
    data_root: &Path,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NormalizedEvent>> {
    let mut events = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        events.extend(load_for_day(data_root, date)?);
    }
    Ok(events)
}

/// Find all day event files under `data_root`, sorted by path.
///
/// Only files at `YYYY/MM/DD/events.jsonl` depth are returned.
pub fn find_event_files(data_root: &Path) -> Vec<PathBuf> {
    if !data_root.exists() {
        warn!("Data root does not exist: {}", data_root.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_root)
        .min_depth(4)
        .max_depth(4)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == EVENTS_FILE_NAME)
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Calendar dates that have an event file, ascending.
///
/// Directories whose names do not form a real date are skipped.
pub fn logged_dates(data_root: &Path) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = find_event_files(data_root)
        .iter()
        .filter_map(|path| date_from_day_path(data_root, path))
        .collect();
    dates.sort();
    dates.dedup();
    dates
}

// ── Internal helpers ─────────────────────────────────────────────────────────

/// Parse every non-blank line of a day file.
fn parse_day_file(
    path: &Path,
    reader: impl BufRead,
    date: NaiveDate,
) -> Result<Vec<NormalizedEvent>> {
    let mut events = Vec::new();

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| DaylogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: EventRecord =
            serde_json::from_str(trimmed).map_err(|source| DaylogError::RecordParse {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })?;

        let event = NormalizedEvent::from_record(record, date).map_err(|e| {
            debug!("Rejected event at {}:{}: {}", path.display(), index + 1, e);
            e
        })?;
        events.push(event);
    }

    Ok(events)
}

/// Recover the date from a `<root>/YYYY/MM/DD/events.jsonl` path.
fn date_from_day_path(data_root: &Path, path: &Path) -> Option<NaiveDate> {
    let relative = path.strip_prefix(data_root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;

    let [year, month, day, _file] = parts.as_slice() else {
        return None;
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }

    date_from_ymd(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?).ok()
}

// ── Tests ────────────────────────────────────────────────────────────────────
