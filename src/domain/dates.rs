//! Parsing and labelling for the API's timestamp formats. The API sends
//! naive local times for the requested timezone; nothing here touches UTC.

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an hourly/current timestamp ("2026-02-12T10:30"). `None` means
/// the entry is dropped rather than failing the whole response.
#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// "Thu"
#[must_use]
pub fn short_weekday(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// "Thursday"
#[must_use]
pub fn long_weekday(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// "10 AM", "12 PM"
#[must_use]
pub fn hour_label(time: NaiveDateTime) -> String {
    time.format("%-I %p").to_string()
}

/// "Thursday, Feb 12, 2026, 10:30 AM"
#[must_use]
pub fn current_label(time: NaiveDateTime) -> String {
    time.format("%A, %b %-d, %Y, %-I:%M %p").to_string()
}
