//! Core types exchanged with the tide evaluator.

use serde::{Deserialize, Serialize};

/// The two constituent sets a prediction evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstituentSet {
    /// Ocean tide elevation.
    OceanTide,
    /// Radial (load) tide: elastic deformation of the solid Earth under the
    /// ocean tide mass.
    RadialLoad,
}

impl ConstituentSet {
    /// Name of the set in tide model configurations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OceanTide => "tide",
            Self::RadialLoad => "radial",
        }
    }

    /// Both sets, in evaluation order.
    pub fn all() -> &'static [ConstituentSet] {
        &[ConstituentSet::OceanTide, ConstituentSet::RadialLoad]
    }
}

impl std::fmt::Display for ConstituentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OceanTide => write!(f, "ocean tide"),
            Self::RadialLoad => write!(f, "radial load tide"),
        }
    }
}

/// Output of one evaluator call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluatedTide {
    /// Short-period tide height, in the model's native unit.
    pub primary: Vec<f64>,
    /// Long-period tide height.
    pub long_period: Vec<f64>,
    /// Per-sample quality flags (interpolation diagnostics). Not retained.
    pub quality_flags: Vec<i8>,
}

impl EvaluatedTide {
    pub fn new(primary: Vec<f64>, long_period: Vec<f64>, quality_flags: Vec<i8>) -> Self {
        Self {
            primary,
            long_period,
            quality_flags,
        }
    }

    /// Number of samples with a NaN or infinite height in either series.
    pub fn non_finite_count(&self) -> usize {
        self.primary
            .iter()
            .zip(self.long_period.iter())
            .filter(|(p, l)| !p.is_finite() || !l.is_finite())
            .count()
    }
}

/// The four series a prediction is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TideComponents {
    pub short_tide: Vec<f64>,
    pub long_period_tide: Vec<f64>,
    pub load_tide: Vec<f64>,
    /// Long-period part of the load tide. Evaluated but not part of the table.
    pub load_long_period_tide: Vec<f64>,
}

impl TideComponents {
    /// Combine an ocean tide and a radial load tide evaluation.
    pub fn from_evaluations(ocean: EvaluatedTide, radial: EvaluatedTide) -> Self {
        Self {
            short_tide: ocean.primary,
            long_period_tide: ocean.long_period,
            load_tide: radial.primary,
            load_long_period_tide: radial.long_period,
        }
    }
}
