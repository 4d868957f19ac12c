//! Timestamp helpers.
//!
//! Two different representations are in play and must not be mixed up:
//!
//! * the *query* timestamp sent to `/api/news/count`, produced by
//!   [`iso_timestamp`] and never reformatted afterwards;
//! * the *display* form of an item's date, produced by [`format_date`].

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Shown in place of a date the server sent in an unreadable form.
pub const INVALID_DATE: &str = "Invalid Date";

/// Russian numeric date-time layout: `18.10.2026, 14:05:09`.
const RU_DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// ISO-8601 UTC timestamp with millisecond precision and a `Z` suffix,
/// e.g. `2026-10-18T11:05:09.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render an item's RFC 3339 date for display in the local time zone.
pub fn format_date(date: &str) -> String {
    format_date_in(date, &Local)
}

/// [`format_date`] with an explicit time zone.
pub fn format_date_in<Tz>(date: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(date.trim()) {
        Ok(dt) => dt
            .with_timezone(tz)
            .format(RU_DISPLAY_FORMAT)
            .to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
