//! Generators for synthetic tide series.
//!
//! These produce deterministic, tide-like values so tests can stand in for a
//! real tide model without any constants on disk.

use crate::fixtures::constituents;

/// Creates a single harmonic: `amplitude * cos(2π t / period + phase)`.
///
/// # Arguments
///
/// * `len` - Number of hourly samples
/// * `amplitude` - Amplitude in the series unit (centimeters for tides)
/// * `period_hours` - Period of the constituent
/// * `phase_deg` - Phase lag in degrees
///
/// # Example
///
/// ```
/// use test_utils::create_harmonic_series;
///
/// let series = create_harmonic_series(24, 100.0, 24.0, 0.0);
/// assert_eq!(series.len(), 24);
/// assert!((series[0] - 100.0).abs() < 1e-9);
/// assert!((series[12] + 100.0).abs() < 1e-9);
/// ```
pub fn create_harmonic_series(
    len: usize,
    amplitude: f64,
    period_hours: f64,
    phase_deg: f64,
) -> Vec<f64> {
    let phase = phase_deg.to_radians();
    (0..len)
        .map(|h| {
            let omega = std::f64::consts::TAU * h as f64 / period_hours;
            amplitude * (omega + phase).cos()
        })
        .collect()
}

/// Creates a semi-diurnal/diurnal mix resembling a mid-latitude ocean tide,
/// in centimeters.
pub fn create_ocean_tide_series(len: usize) -> Vec<f64> {
    let parts = [
        create_harmonic_series(len, 120.0, constituents::M2_PERIOD_HOURS, 35.0),
        create_harmonic_series(len, 42.0, constituents::S2_PERIOD_HOURS, 70.0),
        create_harmonic_series(len, 9.5, constituents::K1_PERIOD_HOURS, 180.0),
        create_harmonic_series(len, 6.1, constituents::O1_PERIOD_HOURS, 330.0),
    ];
    sum_series(&parts)
}

/// Creates a fortnightly long-period tide, a few centimeters in amplitude.
pub fn create_long_period_series(len: usize) -> Vec<f64> {
    create_harmonic_series(len, 2.3, constituents::MF_PERIOD_HOURS, 10.0)
}

/// Creates a radial load tide: a scaled, phase-shifted copy of the M2 signal.
pub fn create_load_tide_series(len: usize) -> Vec<f64> {
    create_harmonic_series(len, 1.4, constituents::M2_PERIOD_HOURS, 215.0)
}

/// Creates a series filled with a single value.
pub fn create_constant_series(len: usize, value: f64) -> Vec<f64> {
    vec![value; len]
}

/// Creates deterministic values with many significant decimals in
/// [-200, 200), for rounding checks.
///
/// Same seed, same output.
pub fn create_precision_series(len: usize, seed: u32) -> Vec<f64> {
    let mut state = seed as u64 ^ 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            // Simple LCG for deterministic "random" values
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            unit * 400.0 - 200.0
        })
        .collect()
}

/// Element-wise sum of equally long series.
pub fn sum_series(parts: &[Vec<f64>]) -> Vec<f64> {
    let len = parts.first().map(Vec::len).unwrap_or(0);
    (0..len)
        .map(|i| parts.iter().map(|p| p[i]).sum())
        .collect()
}
