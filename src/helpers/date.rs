//! Date helper functions

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::time::SystemTime;

/// Long-form display layout, e.g. "January 15, 2024"
pub const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Format a date in full format (like "January 15, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a file timestamp in local time
pub fn full_date_from_system_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    full_date(&local.date_naive())
}

/// Parse a display string produced by [`full_date`]
pub fn parse_full_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DISPLAY_FORMAT).ok()
}

/// Parse a front-matter date string in the common layouts
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 keeps the calendar date as written
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}
