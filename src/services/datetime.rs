//! Lenient timestamp parsing for write payloads
//!
//! The previous system accepted ISO-8601 timestamps with or without an
//! offset and assumed UTC when none was given. Loan and fine date fields
//! keep that contract, so they arrive as raw strings and are parsed here
//! instead of through serde.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{AppError, AppResult};

/// Parse an ISO-8601 timestamp, assuming UTC when no offset is present
pub fn parse_datetime(field: &str, value: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(AppError::Validation(format!(
        "Invalid datetime format for {}: {}",
        field, value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let dt = parse_datetime("fecha", "2030-06-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parses_rfc3339_zulu() {
        let dt = parse_datetime("fecha", "2030-06-15T10:30:00Z").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_naive_timestamp_assumed_utc() {
        let dt = parse_datetime("fecha", "2030-06-15T10:30:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.timezone(), Utc);
    }

    #[test]
    fn test_space_separated_timestamp() {
        let dt = parse_datetime("fecha", "2030-06-15 10:30:00.250").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let dt = parse_datetime("fecha", "2030-06-15").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_datetime("fecha_pago", "next tuesday").unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("fecha_pago"));
    }
}
