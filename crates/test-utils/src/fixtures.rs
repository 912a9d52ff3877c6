//! Common test fixtures for tide prediction tests.

/// Geographic points as `(lat, lon)` in degrees.
pub mod points {
    /// West of the Hebrides, near Rockall trough. Reference example point.
    pub const HEBRIDES: (f64, f64) = (59.195, -7.688);

    /// Brest tide gauge.
    pub const BREST: (f64, f64) = (48.383, -4.495);

    /// On the antimeridian.
    pub const DATELINE: (f64, f64) = (0.0, 180.0);

    /// Geographic north pole.
    pub const NORTH_POLE: (f64, f64) = (90.0, 0.0);

    /// Latitude just past the pole.
    pub const INVALID_LAT: (f64, f64) = (90.001, 0.0);

    /// Longitude just past the antimeridian.
    pub const INVALID_LON: (f64, f64) = (0.0, -180.5);
}

/// Request dates (`YYYY-MM-DD`).
pub mod dates {
    /// Reference example: one day starting 1983-01-01.
    pub const EXAMPLE_START: &str = "1983-01-01";
    pub const EXAMPLE_END: &str = "1983-01-02";

    /// CNES julian day of 1983-01-01.
    pub const EXAMPLE_JULIAN_DAY: i64 = 12053;

    /// Range covering a leap day (2 days).
    pub const LEAP_START: &str = "2024-02-28";
    pub const LEAP_END: &str = "2024-03-01";

    /// Range straddling the CNES epoch (3 days).
    pub const EPOCH_START: &str = "1949-12-30";
    pub const EPOCH_END: &str = "1950-01-02";

    /// A full non-leap year.
    pub const YEAR_START: &str = "2023-01-01";
    pub const YEAR_END: &str = "2024-01-01";
}

/// Tidal constituent periods in hours.
pub mod constituents {
    /// Principal lunar semi-diurnal.
    pub const M2_PERIOD_HOURS: f64 = 12.420_601_2;

    /// Principal solar semi-diurnal.
    pub const S2_PERIOD_HOURS: f64 = 12.0;

    /// Luni-solar diurnal.
    pub const K1_PERIOD_HOURS: f64 = 23.934_469_6;

    /// Principal lunar diurnal.
    pub const O1_PERIOD_HOURS: f64 = 25.819_341_7;

    /// Lunar fortnightly (long period).
    pub const MF_PERIOD_HOURS: f64 = 327.859_938_7;
}
