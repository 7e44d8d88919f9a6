//! Due date serialization for TodoItem
//!
//! Due dates are persisted as ISO-8601 date-time strings at UTC midnight
//! (`2024-01-10T00:00:00.000Z`). Reading is lenient: RFC 3339 date-times,
//! naive date-times and bare `YYYY-MM-DD` dates all decode to the same
//! calendar date. The date is always reparsed into a `NaiveDate`, never kept
//! as a string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format a due date the way it is stored
pub fn format_due_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format(DUE_DATE_FORMAT)
        .to_string()
}

/// Parse a stored due date string back into a calendar date
///
/// For date-times carrying an offset, the calendar date is taken in that
/// offset, so a value written by `format_due_date` always comes back as the
/// same date. Years outside 0..=9999 are written with a sign
/// (`+10000-01-01T00:00:00.000Z`), which RFC 3339 does not allow, so the
/// stored format itself is tried as well.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub(crate) mod due_date {
    use super::{format_due_date, parse_due_date};
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_due_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            // An empty string is how a blank date input ends up in storage
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_due_date(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid due date '{}'", s))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_due_date() {
        assert_eq!(format_due_date(date(2024, 1, 10)), "2024-01-10T00:00:00.000Z");
    }

    #[test]
    fn test_parse_accepted_forms() {
        let expected = Some(date(2024, 1, 10));
        assert_eq!(parse_due_date("2024-01-10T00:00:00.000Z"), expected);
        assert_eq!(parse_due_date("2024-01-10T00:00:00+09:00"), expected);
        assert_eq!(parse_due_date("2024-01-10T08:30:00"), expected);
        assert_eq!(parse_due_date("2024-01-10"), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_due_date("next tuesday"), None);
        assert_eq!(parse_due_date("2024-02-30"), None);
    }

    #[test]
    fn test_signed_years_survive_format_then_parse() {
        for d in [date(10000, 1, 1), date(-1, 12, 31), date(0, 1, 1), date(9999, 12, 31)] {
            assert_eq!(parse_due_date(&format_due_date(d)), Some(d), "{}", format_due_date(d));
        }
        assert_eq!(format_due_date(date(10000, 1, 1)), "+10000-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_format_then_parse_keeps_calendar_date() {
        for d in [date(2000, 2, 29), date(2024, 12, 31), date(1999, 1, 1)] {
            assert_eq!(parse_due_date(&format_due_date(d)), Some(d));
        }
    }
}
