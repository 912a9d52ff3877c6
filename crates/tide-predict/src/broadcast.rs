//! Per-sample coordinate arrays for a single-point prediction.

use tide_common::{GeoPoint, LongitudeConvention};

use crate::error::Result;

/// Parallel latitude/longitude arrays, one entry per grid sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleCoordinates {
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
}

impl SampleCoordinates {
    pub fn len(&self) -> usize {
        self.latitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latitudes.is_empty()
    }
}

/// Repeats one validated point across a grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateBroadcaster {
    convention: LongitudeConvention,
}

impl CoordinateBroadcaster {
    /// Create a broadcaster emitting longitudes in `convention`.
    pub fn new(convention: LongitudeConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> LongitudeConvention {
        self.convention
    }

    /// Validate `(lat, lon)` and repeat it `grid_length` times.
    ///
    /// The longitude is converted to the evaluator convention once, so both
    /// evaluator calls and the output table see the same value.
    pub fn broadcast(&self, lat: f64, lon: f64, grid_length: usize) -> Result<SampleCoordinates> {
        let point = GeoPoint::validated(lat, lon)?;
        let lon = point.lon_in(self.convention);

        Ok(SampleCoordinates {
            latitudes: vec![point.lat; grid_length],
            longitudes: vec![lon; grid_length],
        })
    }
}
