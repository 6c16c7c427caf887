//! Publication date parsing.
//!
//! Callers send dates in a few shapes (full RFC 3339 from the admin editor,
//! bare calendar dates from hand-written payloads). Everything is normalized to
//! a UTC timestamp before it reaches the store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::DomainError;

/// Parse a publication date into its canonical UTC form.
///
/// Accepts RFC 3339 (any offset), `YYYY-MM-DDTHH:MM:SS[.f]` as UTC, and
/// `YYYY-MM-DD` as midnight UTC.
pub fn parse(input: &str) -> Result<DateTime<Utc>, DomainError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(DomainError::Validation(format!(
        "Unrecognized date format: {input}"
    )))
}

/// Serde helper for a required date field.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Serde helper for an optional date field. `null` maps to `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse("2024-03-10T12:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let parsed = parse("2024-03-10T08:15:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 8, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_calendar_date_as_midnight() {
        let parsed = parse("2024-03-10").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = parse("last tuesday");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
