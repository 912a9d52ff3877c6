//! Time handling for tide predictions.
//!
//! Predictions are indexed by CNES julian day: the fractional number of days
//! elapsed since 1950-01-01T00:00:00 UTC, the reference epoch used by
//! oceanographic and altimetry datasets.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Unix timestamp of 1950-01-01T00:00:00Z.
const CNES_EPOCH_UNIX_SECONDS: i64 = -631_152_000;

/// The CNES reference epoch, 1950-01-01T00:00:00Z.
pub fn cnes_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(CNES_EPOCH_UNIX_SECONDS, 0).expect("CNES epoch is representable")
}

/// Fractional days elapsed between the CNES epoch and `instant`.
///
/// The instant is taken at whole-second resolution before dividing, so
/// sub-second components never leak into the day fraction.
pub fn cnes_julian_day(instant: DateTime<Utc>) -> f64 {
    (instant.timestamp() - CNES_EPOCH_UNIX_SECONDS) as f64 / SECONDS_PER_DAY
}

/// Rebuild a calendar instant from a fractional CNES julian day.
///
/// The day count is resolved to the nearest microsecond (ties to even).
/// Returns `None` for non-finite input or instants chrono cannot represent.
pub fn from_cnes_julian_day(julian_day: f64) -> Option<DateTime<Utc>> {
    if !julian_day.is_finite() {
        return None;
    }

    let micros = (julian_day * MICROS_PER_DAY).round_ties_even();
    if micros.abs() >= i64::MAX as f64 {
        return None;
    }

    let epoch_micros = CNES_EPOCH_UNIX_SECONDS.checked_mul(1_000_000)?;
    let unix_micros = epoch_micros.checked_add(micros as i64)?;
    DateTime::from_timestamp_micros(unix_micros)
}

/// Whole days between two instants, truncating any remainder toward zero.
///
/// `2024-01-01T00:00` to `2024-01-03T23:00` is 2 days, not 3.
pub fn whole_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_days()
}

/// Drop the time-of-day of an instant, keeping its UTC calendar date.
pub fn truncate_to_midnight(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN))
}

/// Parse a request date.
///
/// Accepts `YYYY-MM-DD` as well as full ISO 8601 date-times, with or without
/// an offset. Values without an offset are taken as UTC.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(TimeParseError::InvalidFormat(s.to_string()))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
}
