//! Prediction request types.
//!
//! # Examples
//!
//! ```rust
//! use tide_predict::PredictionQuery;
//!
//! let query = PredictionQuery::parse(59.195, -7.688, "1983-01-01", "1983-01-02")
//!     .unwrap()
//!     .with_constants_dir("/data/fes2014");
//! assert_eq!(query.latitude, 59.195);
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tide_common::time::parse_date;
use tide_common::TimeParseError;

/// A tide prediction request for one point and a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionQuery {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,

    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,

    /// First day of the prediction. Time of day is dropped.
    pub start: DateTime<Utc>,

    /// End of the prediction range (exclusive, whole days).
    pub end: DateTime<Utc>,

    /// Directory holding the tide model constants. Falls back to the
    /// predictor configuration when unset.
    pub constants_dir: Option<PathBuf>,
}

impl PredictionQuery {
    pub fn new(latitude: f64, longitude: f64, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            start,
            end,
            constants_dir: None,
        }
    }

    /// Create a query from `YYYY-MM-DD` date strings.
    pub fn parse(
        latitude: f64,
        longitude: f64,
        start: &str,
        end: &str,
    ) -> Result<Self, TimeParseError> {
        Ok(Self::new(latitude, longitude, parse_date(start)?, parse_date(end)?))
    }

    /// Read the constants from `dir`.
    pub fn with_constants_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.constants_dir = Some(dir.into());
        self
    }

    pub fn constants_dir(&self) -> Option<&Path> {
        self.constants_dir.as_deref()
    }
}
