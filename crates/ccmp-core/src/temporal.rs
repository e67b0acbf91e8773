//! # Temporal Types — UTC-Only Timestamps and Coverage Periods
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision, and `Period`, the half-open interval an evidence artifact
//! covers.
//!
//! ## Invariant
//!
//! All timestamps in the system are UTC. Local timezone offsets would make
//! recency-window evaluation depend on where the process runs; non-UTC
//! inputs are rejected by the strict parser rather than silently converted.

use chrono::{DateTime, Months, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CcmpError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted — even `+00:00`, which is semantically equivalent, is
    /// rejected so that persisted state has exactly one representation per
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, CcmpError> {
        if !s.ends_with('Z') {
            return Err(CcmpError::Validation(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CcmpError::Validation(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// The timestamp `months` calendar months before this one.
    ///
    /// Saturates at the minimum representable datetime; the trailing-window
    /// checks in the matcher treat a saturated cutoff as "everything is
    /// recent", which is the only sensible reading that far in the past.
    pub fn months_back(&self, months: u32) -> Self {
        let dt = self
            .0
            .checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self(truncate_to_seconds(dt))
    }

    /// Render as ISO 8601 with Z suffix (e.g. `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Period ──────────────────────────────────────────────────────────

/// A half-open interval `[start, end)` that a piece of evidence covers.
///
/// The `end` bound drives the matcher's recency signals: evidence whose
/// period ended within the trailing 12 months (and, additionally, the
/// trailing 3 months) of the evaluation instant scores higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Inclusive start of the covered interval.
    pub start: Timestamp,
    /// Exclusive end of the covered interval.
    pub end: Timestamp,
}

impl Period {
    /// Create a period, validating that `start <= end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, CcmpError> {
        if start > end {
            return Err(CcmpError::Validation(format!(
                "period start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Whether the period's end falls within the trailing `months` calendar
    /// months of `now`. Periods ending in the future count as within any
    /// trailing window.
    pub fn ends_within_months(&self, now: Timestamp, months: u32) -> bool {
        self.end >= now.months_back(months)
    }

    /// Whether an instant falls inside the half-open interval.
    pub fn contains(&self, ts: Timestamp) -> bool {
        ts >= self.start && ts < self.end
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_utc(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(Timestamp::now().as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_to_iso8601_format() {
        assert_eq!(ts(2026, 1, 15).to_iso8601(), "2026-01-15T00:00:00Z");
    }

    #[test]
    fn test_parse_z_suffix_accepted() {
        let parsed = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(parsed.to_iso8601(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_offset_rejected() {
        assert!(Timestamp::parse("2026-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2026-01-15T17:00:00+05:00").is_err());
    }

    #[test]
    fn test_parse_subseconds_truncated() {
        let parsed = Timestamp::parse("2026-01-15T12:00:00.123456Z").unwrap();
        assert_eq!(parsed.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_months_back() {
        let now = ts(2026, 8, 15);
        assert_eq!(now.months_back(12), ts(2025, 8, 15));
        assert_eq!(now.months_back(3), ts(2026, 5, 15));
    }

    #[test]
    fn test_period_rejects_inverted_bounds() {
        assert!(Period::new(ts(2026, 2, 1), ts(2026, 1, 1)).is_err());
    }

    #[test]
    fn test_period_contains_is_half_open() {
        let p = Period::new(ts(2026, 1, 1), ts(2026, 2, 1)).unwrap();
        assert!(p.contains(ts(2026, 1, 1)));
        assert!(p.contains(ts(2026, 1, 31)));
        assert!(!p.contains(ts(2026, 2, 1)));
    }

    #[test]
    fn test_ends_within_trailing_window() {
        let now = ts(2026, 8, 1);
        let recent = Period::new(ts(2026, 5, 1), ts(2026, 7, 1)).unwrap();
        let stale = Period::new(ts(2024, 1, 1), ts(2024, 6, 30)).unwrap();

        assert!(recent.ends_within_months(now, 12));
        assert!(recent.ends_within_months(now, 3));
        assert!(!stale.ends_within_months(now, 12));
        assert!(!stale.ends_within_months(now, 3));
    }

    #[test]
    fn test_future_end_counts_as_recent() {
        let now = ts(2026, 8, 1);
        let future = Period::new(ts(2026, 7, 1), ts(2026, 10, 1)).unwrap();
        assert!(future.ends_within_months(now, 3));
        assert!(future.ends_within_months(now, 12));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // A period ending exactly at the cutoff is still within the window.
        let now = ts(2026, 8, 15);
        let edge = Period::new(ts(2025, 1, 1), ts(2025, 8, 15)).unwrap();
        assert!(edge.ends_within_months(now, 12));
        assert!(!edge.ends_within_months(now, 3));
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = Period::new(ts(2026, 1, 1), ts(2026, 4, 1)).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
