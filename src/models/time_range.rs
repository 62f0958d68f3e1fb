//! Time range model
//!
//! A closed instant range with strict (open-interval) containment tests.
//! Two samples that touch exactly at a boundary do not overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing a time range
#[derive(Debug, Error)]
pub enum TimeRangeError {
    #[error("range start {start} is after end {end}")]
    Inverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// An immutable instant range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unvalidated mirror used to re-check the invariant on deserialization
#[derive(Deserialize)]
struct RawTimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = TimeRangeError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// Create a new range, rejecting inverted bounds
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if start > end {
            return Err(TimeRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether an instant falls strictly inside this range.
    ///
    /// Exclusive on both bounds: a sample ending exactly when another
    /// starts does not overlap it.
    pub fn contains_instant(&self, instant: DateTime<Utc>) -> bool {
        self.start < instant && instant < self.end
    }

    /// Whether another range is strictly nested inside this one
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start < other.start && other.end < self.end
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(TimeRange::new(instant(11, 0), instant(10, 0)).is_err());
        assert!(TimeRange::new(instant(10, 0), instant(10, 0)).is_ok());
    }

    #[test]
    fn test_contains_instant_is_exclusive() {
        let range = TimeRange::new(instant(10, 0), instant(10, 5)).unwrap();
        assert!(range.contains_instant(instant(10, 2)));
        assert!(!range.contains_instant(instant(10, 0)));
        assert!(!range.contains_instant(instant(10, 5)));
        assert!(!range.contains_instant(instant(10, 6)));
    }

    #[test]
    fn test_contains_range_is_strict_nesting() {
        let outer = TimeRange::new(instant(10, 0), instant(11, 0)).unwrap();
        let inner = TimeRange::new(instant(10, 10), instant(10, 50)).unwrap();
        let touching = TimeRange::new(instant(10, 0), instant(10, 30)).unwrap();

        assert!(outer.contains_range(&inner));
        assert!(!inner.contains_range(&outer));
        assert!(!outer.contains_range(&touching));
        assert!(!outer.contains_range(&outer));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        let first = TimeRange::new(instant(10, 0), instant(10, 5)).unwrap();
        let second = TimeRange::new(instant(10, 5), instant(10, 10)).unwrap();
        assert!(!first.contains_instant(second.start()));
        assert!(!second.contains_instant(first.end()));
    }
}
