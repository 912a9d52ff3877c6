//! Common types and utilities shared across the tide prediction crates.

pub mod coords;
pub mod rounding;
pub mod time;

pub use coords::{CoordinateError, GeoPoint, LongitudeConvention};
pub use rounding::RoundingMode;
pub use time::{
    cnes_epoch, cnes_julian_day, from_cnes_julian_day, parse_date, whole_days_between,
    TimeParseError, SECONDS_PER_DAY,
};
