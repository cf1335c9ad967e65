/// Format a whole number of minutes as a compact duration string.
///
/// * hours and minutes → `"1h 30m"`
/// * whole hours → `"2h"`
/// * under an hour (including zero) → `"45m"`
///
/// # Examples
///
/// ```
/// use daylog_core::formatting::format_minutes;
///
/// assert_eq!(format_minutes(90),  "1h 30m");
/// assert_eq!(format_minutes(120), "2h");
/// assert_eq!(format_minutes(45),  "45m");
/// assert_eq!(format_minutes(0),   "0m");
/// ```
pub fn format_minutes(minutes: u64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
