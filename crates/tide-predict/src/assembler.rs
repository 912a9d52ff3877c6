//! Turns a time grid and evaluated tide series into a prediction table.

use tracing::debug;

use tide_common::time::{cnes_julian_day, from_cnes_julian_day};
use tide_common::RoundingMode;

use crate::broadcast::SampleCoordinates;
use crate::config::PredictionConfig;
use crate::error::{PredictionError, Result};
use crate::grid::TimeGrid;
use crate::table::{PredictionRow, PredictionTable};
use crate::types::TideComponents;

/// Builds [`PredictionTable`]s.
///
/// For each grid timestamp:
/// 1. the CNES julian day (fractional days since 1950-01-01) is derived;
/// 2. the hour of day is `(julian_day mod 1) * 24`;
/// 3. pure and geo tides are summed from the unrounded components;
/// 4. every value except the julian day is rounded;
/// 5. the julian day is truncated to an integer;
/// 6. the calendar date is rebuilt from the unrounded julian day.
///
/// NaN and infinite tide values are carried through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TidePredictionAssembler {
    rounding: RoundingMode,
    decimals: u32,
}

impl Default for TidePredictionAssembler {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfEven,
            decimals: 3,
        }
    }
}

impl TidePredictionAssembler {
    pub fn new(rounding: RoundingMode, decimals: u32) -> Self {
        Self { rounding, decimals }
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        Self::new(config.rounding, config.decimals)
    }

    /// Assemble the table. Every series must have one value per grid
    /// timestamp; the load long-period series is ignored.
    pub fn assemble(
        &self,
        grid: &TimeGrid,
        coords: &SampleCoordinates,
        components: &TideComponents,
    ) -> Result<PredictionTable> {
        let n = grid.len();
        check_len("latitudes", n, coords.latitudes.len())?;
        check_len("longitudes", n, coords.longitudes.len())?;
        check_len("short_tide", n, components.short_tide.len())?;
        check_len("long_period_tide", n, components.long_period_tide.len())?;
        check_len("load_tide", n, components.load_tide.len())?;

        let round = |v: f64| self.rounding.round(v, self.decimals);

        let mut rows = Vec::with_capacity(n);
        for (i, timestamp) in grid.iter().enumerate() {
            let julian_day = cnes_julian_day(*timestamp);
            let hour_of_day = julian_day.rem_euclid(1.0) * 24.0;

            let short = components.short_tide[i];
            let long_period = components.long_period_tide[i];
            let load = components.load_tide[i];
            let pure = short + long_period;
            let geo = short + long_period + load;

            let calendar_date = from_cnes_julian_day(julian_day)
                .ok_or(PredictionError::InvalidJulianDay(julian_day))?;

            rows.push(PredictionRow {
                julian_day: julian_day as i64,
                calendar_date,
                latitude: round(coords.latitudes[i]),
                longitude: round(coords.longitudes[i]),
                short_tide: round(short),
                long_period_tide: round(long_period),
                pure_tide: round(pure),
                geo_tide: round(geo),
                radial_tide: round(load),
                hour_of_day: round(hour_of_day),
            });
        }

        debug!(
            rows = rows.len(),
            rounding = %self.rounding,
            decimals = self.decimals,
            "Assembled prediction table"
        );

        Ok(PredictionTable::new(rows))
    }
}

fn check_len(series: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(PredictionError::shape_mismatch(series, expected, actual));
    }
    Ok(())
}
