//! Date parsing, display formatting and day arithmetic
//!
//! All formatting is total: input that cannot be parsed is echoed back
//! unchanged instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%d %b %Y";
const TIMESTAMP_FORMAT: &str = "%d %b %Y, %H:%M:%S";
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parse an ISO-8601 date or date-time into a local naive instant.
///
/// Accepts `2025-10-25`, `2025-07-27T03:12:50.877218` and RFC 3339 strings
/// with an offset (converted to UTC). Date-only input is taken at midnight.
pub fn parse_instant(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Parse an ISO-8601 string down to its calendar date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_instant(input).map(|dt| dt.date())
}

/// Format an ISO date as `25 Oct 2025`, or return the input unchanged
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Format an ISO instant as `27 Jul 2025, 03:12:50`, or return the input unchanged
pub fn format_timestamp(input: &str) -> String {
    match parse_instant(input) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Whole days from `from` to `to`, rounding any partial day up.
///
/// `T` to `T + 2.3 days` is 3; `T` to `T - 2.3 days` is -2.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let millis = (to - from).num_milliseconds();
    -((-millis).div_euclid(MILLIS_PER_DAY))
}

/// Whole calendar days from `from` to `to`; time of day never shifts the result
pub fn calendar_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Days from `today` until the ISO date `target`, `None` if it does not parse
pub fn days_until(target: &str, today: NaiveDate) -> Option<i64> {
    parse_date(target).map(|date| calendar_days_between(today, date))
}
