use chrono::NaiveDate;

use crate::error::{DaylogError, Result};

/// Minutes in one day, added to the end time of an overnight event.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Date format used for range bounds and the `_date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ── HHMM parsing ──────────────────────────────────────────────────────────────

/// Parse an `HHMM` time-of-day into `(hour, minute)`.
///
/// The input must be exactly four ASCII digits with `hour <= 23` and
/// `minute <= 59`. Anything else is an [`DaylogError::InvalidTime`].
pub fn parse_hhmm(time: &str) -> Result<(u32, u32)> {
    let bytes = time.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(DaylogError::InvalidTime(time.to_string()));
    }

    let digit = |i: usize| u32::from(bytes[i] - b'0');
    let hour = digit(0) * 10 + digit(1);
    let minute = digit(2) * 10 + digit(3);

    if hour > 23 || minute > 59 {
        return Err(DaylogError::InvalidTime(time.to_string()));
    }
    Ok((hour, minute))
}

/// Minutes since midnight for an `HHMM` string.
pub fn minutes_since_midnight(time: &str) -> Result<u32> {
    let (hour, minute) = parse_hhmm(time)?;
    Ok(hour * 60 + minute)
}

/// Duration in minutes between two `HHMM` times.
///
/// An end time earlier than the start time is read as crossing midnight, so
/// the result is always in `0..1440`.
///
/// # Examples
///
/// ```
/// use daylog_core::time_utils::duration_minutes;
///
/// assert_eq!(duration_minutes("0900", "1000").unwrap(), 60);
/// assert_eq!(duration_minutes("2330", "0030").unwrap(), 60);
/// ```
pub fn duration_minutes(start: &str, end: &str) -> Result<u32> {
    let start_total = minutes_since_midnight(start)?;
    let mut end_total = minutes_since_midnight(end)?;
    if end_total < start_total {
        end_total += MINUTES_PER_DAY;
    }
    Ok(end_total - start_total)
}

// ── Dates ─────────────────────────────────────────────────────────────────────

/// Parse a `YYYY-MM-DD` string into a [`NaiveDate`].
///
/// The string must be exactly ten characters; surrounding whitespace or
/// unpadded components are rejected.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DaylogError::InvalidDate(date.to_string()));
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| DaylogError::InvalidDate(date.to_string()))
}

/// Build a [`NaiveDate`] from its components, rejecting impossible dates
/// such as February 30th.
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DaylogError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
