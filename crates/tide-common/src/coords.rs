//! Geographic point and longitude convention handling.

use serde::{Deserialize, Serialize};

/// A WGS84 point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point without validating it.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point, rejecting latitudes outside [-90, 90], longitudes
    /// outside [-180, 180] and non-finite values.
    pub fn validated(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        let point = Self::new(lat, lon);
        point.validate()?;
        Ok(point)
    }

    /// Check that the point lies in the valid geographic domain.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lon));
        }
        Ok(())
    }

    /// Longitude expressed in the given convention.
    pub fn lon_in(&self, convention: LongitudeConvention) -> f64 {
        convention.normalize(self.lon)
    }
}

/// Longitude range expected by a tide model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LongitudeConvention {
    /// [-180, 180], longitudes are passed through as given.
    #[default]
    Signed180,
    /// [0, 360), western longitudes are wrapped.
    Positive360,
}

impl LongitudeConvention {
    /// Parse from string (case-insensitive). `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "signed180" | "-180_180" | "180" => Some(Self::Signed180),
            "positive360" | "0_360" | "360" => Some(Self::Positive360),
            _ => None,
        }
    }

    /// Parse from string (case-insensitive). Unknown values fall back to
    /// `Signed180`.
    pub fn from_str(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signed180 => "signed180",
            Self::Positive360 => "positive360",
        }
    }

    /// Express an already validated longitude in this convention.
    pub fn normalize(&self, lon: f64) -> f64 {
        match self {
            Self::Signed180 => lon,
            Self::Positive360 => {
                let wrapped = lon.rem_euclid(360.0);
                // rem_euclid can round up to exactly 360 for tiny negatives
                if wrapped >= 360.0 {
                    0.0
                } else {
                    wrapped
                }
            }
        }
    }
}

impl std::fmt::Display for LongitudeConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),
}
