use chrono::{DateTime, Months, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Date-time layouts accepted in `Timestamp` / `Expires`, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];

/// Date-only layouts, mapped to midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized date '{value}'")]
pub struct DateParseError {
    pub value: String,
}

/// Parse a completion or expiration date.
///
/// Accepts ISO dates (`2023-08-01`), US dates (`8/1/2023`), either with an
/// optional `HH:MM:SS` time, and RFC 3339 timestamps. An RFC 3339 offset is
/// dropped and the wall-clock time kept.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, DateParseError> {
    let trimmed = value.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.and_time(chrono::NaiveTime::MIN));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    Err(DateParseError {
        value: value.to_string(),
    })
}

/// Add calendar months, clamping to the last day of the target month.
/// Returns None only when the result is out of chrono's range.
pub fn add_months(start: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    start.checked_add_months(Months::new(months))
}
