//! Decimal rounding of table values.

use serde::{Deserialize, Serialize};

const MAX_FRACTIONAL_SCALED: f64 = 4_503_599_627_370_496.0;

/// How a value exactly halfway between two decimal steps is resolved.
///
/// Values are scaled by `10^decimals`, rounded to an integer and scaled back,
/// so the tie rule applies to the scaled binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// Ties go away from zero.
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Parse from string (case-insensitive). `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "half_even" | "even" | "bankers" => Some(Self::HalfEven),
            "half_away_from_zero" | "half_up" | "away" => Some(Self::HalfAwayFromZero),
            _ => None,
        }
    }

    /// Parse from string (case-insensitive). Unknown values fall back to
    /// `HalfEven`.
    pub fn from_str(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HalfEven => "half_even",
            Self::HalfAwayFromZero => "half_away_from_zero",
        }
    }

    /// Round `value` to `decimals` places. NaN and infinities are returned
    /// unchanged, as are values too large to carry a fractional part at
    /// this scale.
    pub fn round(&self, value: f64, decimals: u32) -> f64 {
        if !value.is_finite() {
            return value;
        }

        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        // At or above 2^52 every f64 is already an integer.
        if !scaled.is_finite() || scaled.abs() >= MAX_FRACTIONAL_SCALED {
            return value;
        }
        let rounded = match self {
            Self::HalfEven => scaled.round_ties_even(),
            Self::HalfAwayFromZero => scaled.round(),
        };
        rounded / factor
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
