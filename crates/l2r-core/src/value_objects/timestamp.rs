//! Timestamp parsing
//!
//! The backend emits naive ISO-8601 strings (no offset) while users type
//! plain dates. Both are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DomainError;

/// Parse RFC 3339, naive ISO-8601 (`2024-05-01T10:30:00[.ffffff]`) or a bare
/// `YYYY-MM-DD` date (midnight UTC)
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, DomainError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(DomainError::InvalidExpiryDate(s.to_string()))
}
