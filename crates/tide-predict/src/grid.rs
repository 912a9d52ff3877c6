//! Hourly time grid construction.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use tide_common::time::{truncate_to_midnight, whole_days_between};

use crate::error::{PredictionError, Result};

/// Samples per day on an hourly grid.
pub const SAMPLES_PER_DAY: i64 = 24;

/// Spacing between grid samples, in seconds.
pub const SAMPLE_SPACING_SECONDS: i64 = 3600;

/// A regular hourly sequence of UTC timestamps.
///
/// Always starts at midnight and holds `24 * num_days` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    timestamps: Vec<DateTime<Utc>>,
    num_days: i64,
}

impl TimeGrid {
    /// The grid timestamps in chronological order.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Number of whole days covered.
    pub fn num_days(&self) -> i64 {
        self.num_days
    }

    /// First timestamp.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.timestamps.first().copied()
    }

    /// Exclusive upper bound of the grid.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.start()
            .map(|start| start + Duration::days(self.num_days))
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateTime<Utc>> {
        self.timestamps.iter()
    }
}

impl AsRef<[DateTime<Utc>]> for TimeGrid {
    fn as_ref(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }
}

/// Builds hourly time grids from a date range.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeGridBuilder;

impl TimeGridBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the grid covering `[start, start + num_days)`.
    ///
    /// `num_days` is the whole-day difference between `end` and `start`,
    /// with any remainder truncated. The grid itself starts at `start`'s
    /// midnight. Ranges shorter than one whole day are rejected.
    pub fn build(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<TimeGrid> {
        let num_days = whole_days_between(start, end);
        if num_days <= 0 {
            return Err(PredictionError::InvalidRange {
                start,
                end,
                num_days,
            });
        }

        let origin = truncate_to_midnight(start);
        let samples = num_days * SAMPLES_PER_DAY;
        let timestamps: Vec<DateTime<Utc>> = (0..samples)
            .map(|i| origin + Duration::seconds(i * SAMPLE_SPACING_SECONDS))
            .collect();

        debug!(
            start = %origin,
            num_days,
            samples = timestamps.len(),
            "Built hourly time grid"
        );

        Ok(TimeGrid {
            timestamps,
            num_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_single_day_grid() {
        let grid = TimeGridBuilder::new()
            .build(utc(1983, 1, 1, 0), utc(1983, 1, 2, 0))
            .unwrap();

        assert_eq!(grid.len(), 24);
        assert_eq!(grid.num_days(), 1);
        assert_eq!(grid.start(), Some(utc(1983, 1, 1, 0)));
        assert_eq!(grid.timestamps()[23], utc(1983, 1, 1, 23));
        assert_eq!(grid.end(), Some(utc(1983, 1, 2, 0)));
    }

    #[test]
    fn test_spacing_is_one_hour() {
        let grid = TimeGridBuilder::new()
            .build(utc(2024, 2, 27, 0), utc(2024, 3, 2, 0))
            .unwrap();

        assert_eq!(grid.len(), 4 * 24);
        for pair in grid.timestamps().windows(2) {
            assert_eq!((pair[1] - pair[0]).num_seconds(), SAMPLE_SPACING_SECONDS);
        }
    }

    #[test]
    fn test_start_time_of_day_is_dropped() {
        let grid = TimeGridBuilder::new()
            .build(utc(2024, 1, 1, 15), utc(2024, 1, 4, 0))
            .unwrap();

        // 2 days 9 hours -> 2 whole days, grid anchored at midnight
        assert_eq!(grid.num_days(), 2);
        assert_eq!(grid.len(), 48);
        assert_eq!(grid.start().unwrap().hour(), 0);
        assert_eq!(grid.start(), Some(utc(2024, 1, 1, 0)));
    }

    #[test]
    fn test_same_day_is_invalid() {
        let result = TimeGridBuilder::new().build(utc(2024, 1, 1, 0), utc(2024, 1, 1, 0));
        assert!(matches!(
            result,
            Err(PredictionError::InvalidRange { num_days: 0, .. })
        ));

        let result = TimeGridBuilder::new().build(utc(2024, 1, 1, 0), utc(2024, 1, 1, 20));
        assert!(matches!(result, Err(PredictionError::InvalidRange { .. })));
    }

    #[test]
    fn test_reversed_range_is_invalid() {
        let result = TimeGridBuilder::new().build(utc(2024, 1, 5, 0), utc(2024, 1, 1, 0));
        assert!(matches!(
            result,
            Err(PredictionError::InvalidRange { num_days: -4, .. })
        ));
    }
}
