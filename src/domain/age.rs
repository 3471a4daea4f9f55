//! Relative "N days and M hours ago" ages for transfer timestamps.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

use super::WalletError;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Offset-less layouts tried after RFC 3339 and RFC 2822. Read as local time.
const NAIVE_DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// ============================================================================
// Relative Age
// ============================================================================

/// Whole days and leftover whole hours between a timestamp and "now".
///
/// Minutes and seconds are dropped. Timestamps in the future produce
/// negative counts; both components are floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeAge {
    pub days: i64,
    pub hours: i64,
}

impl RelativeAge {
    /// Splits an elapsed duration in milliseconds into days and hours.
    #[must_use]
    pub const fn from_millis(elapsed_ms: i64) -> Self {
        let days = elapsed_ms.div_euclid(MILLIS_PER_DAY);
        let hours = (elapsed_ms % MILLIS_PER_DAY).div_euclid(MILLIS_PER_HOUR);
        Self { days, hours }
    }

    /// Age of `then` as seen from `now`.
    #[must_use]
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((now - then).num_milliseconds())
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days and {} hours ago", self.days, self.hours)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a backend timestamp into UTC.
///
/// Accepts RFC 3339, RFC 2822, ISO 8601 without an offset (taken as the
/// machine's local time) and a bare `YYYY-MM-DD` (midnight UTC). This is
/// how browsers read the same strings.
///
/// # Errors
///
/// Returns [`WalletError::MalformedRecord`] if no layout matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, WalletError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in NAIVE_DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(local_to_utc(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(WalletError::malformed("time", raw))
}

/// A wall-clock time that does not exist locally (skipped by a DST change)
/// falls back to UTC.
fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    naive
        .and_local_timezone(Local)
        .earliest()
        .map_or_else(|| naive.and_utc(), |local| local.with_timezone(&Utc))
}

/// Formats `raw` as a relative age from `now`.
///
/// # Errors
///
/// Returns [`WalletError::MalformedRecord`] if `raw` is not a date.
pub fn format_relative_time(raw: &str, now: DateTime<Utc>) -> Result<String, WalletError> {
    parse_timestamp(raw).map(|then| RelativeAge::between(then, now).to_string())
}

// ============================================================================
// Tests
// ============================================================================
