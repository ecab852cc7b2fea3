// ABOUTME: Date normalization from heterogeneous stored representations to calendar dates
// ABOUTME: Lenient "native" parse first, strict ISO-8601 second, unparseable otherwise; never panics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Fittrack Contributors

//! Date normalization.
//!
//! Every date that enters the engine passes through [`DateNormalizer`]. The output
//! is a `NaiveDate` in the user's calendar (a fixed UTC offset), or `None` when the
//! input cannot be understood. Two inputs denoting the same wall-clock day map to
//! the same date regardless of their time-of-day component.
//!
//! Interpretation rules:
//! - date-only strings denote that calendar date verbatim (no UTC shift)
//! - date-times without an offset are wall-clock times in the user's calendar
//! - date-times with an offset, and epoch milliseconds, are shifted into the
//!   user's offset before the date is taken

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use fittrack_core::RawDate;

/// Naive date-time layouts accepted by the primary parse
const NATIVE_NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y, %I:%M:%S %p",
];

/// Date-only layouts accepted by the primary parse
const NATIVE_DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%a %b %d %Y",
    "%d %B %Y",
];

/// Browser `Date.prototype.toString()` layout once the trailing zone name is removed
const BROWSER_TO_STRING_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Offset-bearing ISO-8601 layouts not covered by RFC 3339 (basic format, no colon)
const ISO_OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y%m%dT%H%M%S%z",
    "%Y%m%dT%H%M%z",
];

/// Naive ISO-8601 layouts (basic format)
const ISO_NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y%m%dT%H%M%S", "%Y%m%dT%H%M"];

/// ISO-8601 basic calendar date (`YYYYMMDD`)
const ISO_BASIC_DATE_FORMAT: &str = "%Y%m%d";

/// ISO-8601 ordinal date (`YYYY-DDD`)
const ISO_ORDINAL_DATE_FORMAT: &str = "%Y-%j";

/// ISO-8601 week date (`YYYY-Www-D`)
const ISO_WEEK_DATE_FORMAT: &str = "%G-W%V-%u";

/// Converts stored date values to calendar dates in the user's calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    offset: FixedOffset,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::utc()
    }
}

impl DateNormalizer {
    /// Normalizer for a calendar at the given offset from UTC
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Normalizer for a UTC calendar
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// The calendar offset in use
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Normalize an optional stored value; `None` means absent or unparseable
    #[must_use]
    pub fn normalize(&self, raw: Option<&RawDate>) -> Option<NaiveDate> {
        match raw? {
            RawDate::EpochMillis(millis) => self.epoch_millis_date(*millis),
            RawDate::Text(text) => self.normalize_text(text),
        }
    }

    /// Normalize a textual date
    ///
    /// Tries the lenient native layouts first, then strict ISO-8601.
    #[must_use]
    pub fn normalize_text(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.parse_native(text)
            .or_else(|| self.parse_iso8601_strict(text))
    }

    /// Calendar date of an epoch-milliseconds timestamp in the user's calendar
    #[must_use]
    pub fn epoch_millis_date(&self, millis: i64) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .and_then(|instant| self.local_date(&instant))
    }

    /// Wall-clock date at the calendar offset; `None` if the shift leaves chrono's range
    fn local_date<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<NaiveDate> {
        let shift = Duration::seconds(i64::from(self.offset.local_minus_utc()));
        instant
            .naive_utc()
            .checked_add_signed(shift)
            .map(|local| local.date())
    }

    fn parse_native(&self, text: &str) -> Option<NaiveDate> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return self.local_date(&instant);
        }

        if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
            return self.local_date(&instant);
        }

        if let Some(date) = self.parse_browser_string(text) {
            return Some(date);
        }

        NATIVE_NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|datetime| datetime.date())
            .or_else(|| {
                NATIVE_DATE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            })
    }

    /// `Tue Mar 05 2024 18:45:00 GMT+0100 (Central European Standard Time)`
    fn parse_browser_string(&self, text: &str) -> Option<NaiveDate> {
        let without_zone_name = text
            .split_once(" (")
            .map_or(text, |(head, _)| head)
            .trim_end();

        DateTime::parse_from_str(without_zone_name, BROWSER_TO_STRING_FORMAT)
            .ok()
            .and_then(|instant| self.local_date(&instant))
    }

    fn parse_iso8601_strict(&self, text: &str) -> Option<NaiveDate> {
        // Basic-format UTC designator ("20240305T184500Z") is not accepted by %z
        let zulu_normalized = text
            .strip_suffix('Z')
            .map_or_else(|| text.to_owned(), |head| format!("{head}+0000"));

        if let Some(instant) = ISO_OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(&zulu_normalized, format).ok())
        {
            return self.local_date(&instant);
        }

        ISO_NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|datetime| datetime.date())
            .or_else(|| parse_iso8601_date(text))
    }
}

/// ISO-8601 date without a time part
///
/// chrono's numeric specifiers accept fewer digits than ISO-8601 requires, so
/// the shape is checked before parsing. Reduced precision `YYYY-MM` denotes the
/// first of that month.
fn parse_iso8601_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let digits_at = |from: usize, to: usize| {
        bytes
            .get(from..to)
            .is_some_and(|part| part.iter().all(u8::is_ascii_digit))
    };
    let dash_at_year_end = bytes.get(4) == Some(&b'-');

    match bytes.len() {
        8 if digits_at(0, 8) => NaiveDate::parse_from_str(text, ISO_BASIC_DATE_FORMAT).ok(),
        8 if dash_at_year_end && digits_at(0, 4) && digits_at(5, 8) => {
            NaiveDate::parse_from_str(text, ISO_ORDINAL_DATE_FORMAT).ok()
        }
        7 if dash_at_year_end && digits_at(0, 4) && digits_at(5, 7) => {
            NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()
        }
        _ => NaiveDate::parse_from_str(text, ISO_WEEK_DATE_FORMAT).ok(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_browser_to_string_drops_zone_name() {
        let normalizer = DateNormalizer::new(FixedOffset::east_opt(3600).unwrap());
        let browser = "Tue Mar 05 2024 23:50:00 GMT+0100 (Central European Standard Time)";
        assert_eq!(normalizer.normalize_text(browser), Some(date(2024, 3, 5)));
    }

    #[test]
    fn test_basic_format_zulu_is_strict_iso() {
        let normalizer = DateNormalizer::utc();
        assert_eq!(normalizer.parse_native("20240305T184500Z"), None);
        assert_eq!(
            normalizer.normalize_text("20240305T184500Z"),
            Some(date(2024, 3, 5))
        );
    }

    #[test]
    fn test_iso_week_date() {
        let normalizer = DateNormalizer::utc();
        // ISO week 10 of 2024, Tuesday
        assert_eq!(normalizer.normalize_text("2024-W10-2"), Some(date(2024, 3, 5)));
    }

    #[test]
    fn test_ordinal_date() {
        let normalizer = DateNormalizer::utc();
        assert_eq!(normalizer.normalize_text("2024-065"), Some(date(2024, 3, 5)));
    }

    #[test]
    fn test_short_ordinal_day_is_not_accepted() {
        let normalizer = DateNormalizer::utc();
        assert_eq!(normalizer.normalize_text("2024-5"), None);
        assert_eq!(normalizer.normalize_text("2024-65"), None);
    }

    #[test]
    fn test_year_month_is_first_of_month() {
        let normalizer = DateNormalizer::utc();
        assert_eq!(normalizer.normalize_text("2024-12"), Some(date(2024, 12, 1)));
        assert_eq!(normalizer.normalize_text("2024-13"), None);
    }

    #[test]
    fn test_offset_shift_past_max_date_is_unparseable() {
        let normalizer = DateNormalizer::new(FixedOffset::east_opt(3600).unwrap());
        assert_eq!(normalizer.normalize_text("+262142-12-31T23:59:59+0000"), None);
        assert_eq!(
            normalizer.normalize_text("+262142-12-31T22:59:59+0000"),
            Some(NaiveDate::MAX)
        );
    }
}
