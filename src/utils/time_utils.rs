use chrono::{DateTime, Local, NaiveDateTime};

use crate::config::MS_IN_DAY;

pub struct TimeUtils;

impl TimeUtils {
    /// Python `isoformat()` without an offset, with or without microseconds.
    pub const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
    pub const RU_DATE_FORMAT: &str = "%d.%m.%Y";
    pub const RU_DATETIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";
}

/// Parse a ledger timestamp. Offset-less values are wall-clock local time; values with an
/// offset are converted to local time.
pub fn parse_api_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, TimeUtils::API_TIME_FORMAT) {
        return Some(naive);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Whole days remaining until `ends`, rounded up, never negative.
pub fn days_left(ends: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let ms = (ends - now).num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    (ms + MS_IN_DAY - 1) / MS_IN_DAY
}

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_ru_date(dt: NaiveDateTime) -> String {
    dt.format(TimeUtils::RU_DATE_FORMAT).to_string()
}

pub fn format_ru_datetime(dt: NaiveDateTime) -> String {
    dt.format(TimeUtils::RU_DATETIME_FORMAT).to_string()
}
