//! Configuration for tide predictions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tide_common::{LongitudeConvention, RoundingMode};
use tracing::warn;

/// Largest supported number of decimals in the output table.
pub const MAX_DECIMALS: u32 = 12;

/// Configuration for the tide predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Parallelism hint passed to the tide evaluator.
    pub num_threads: usize,

    /// Longitude range the evaluator expects.
    pub longitude_convention: LongitudeConvention,

    /// Tie-breaking rule when rounding table values.
    pub rounding: RoundingMode,

    /// Decimal places kept in every rounded column.
    pub decimals: u32,

    /// Constants directory used when a request does not name one.
    pub constants_dir: Option<PathBuf>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            num_threads: 1,
            longitude_convention: LongitudeConvention::Signed180,
            rounding: RoundingMode::HalfEven,
            decimals: 3,
            constants_dir: None,
        }
    }
}

impl PredictionConfig {
    /// Load configuration from environment variables.
    ///
    /// Only numeric and mode settings are read. The constants directory is
    /// never taken from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TIDE_NUM_THREADS") {
            if let Ok(threads) = val.parse() {
                config.num_threads = threads;
            }
        }

        if let Ok(val) = std::env::var("TIDE_LONGITUDE_CONVENTION") {
            match LongitudeConvention::parse(&val) {
                Some(convention) => config.longitude_convention = convention,
                None => warn!(
                    value = %val,
                    default = %config.longitude_convention,
                    "Unknown TIDE_LONGITUDE_CONVENTION, using default"
                ),
            }
        }

        if let Ok(val) = std::env::var("TIDE_ROUNDING_MODE") {
            match RoundingMode::parse(&val) {
                Some(mode) => config.rounding = mode,
                None => warn!(
                    value = %val,
                    default = %config.rounding,
                    "Unknown TIDE_ROUNDING_MODE, using default"
                ),
            }
        }

        if let Ok(val) = std::env::var("TIDE_DECIMALS") {
            if let Ok(decimals) = val.parse() {
                config.decimals = decimals;
            }
        }

        config
    }

    /// Set the default constants directory.
    pub fn with_constants_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.constants_dir = Some(dir.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_threads == 0 {
            return Err("num_threads must be > 0".to_string());
        }

        if self.decimals > MAX_DECIMALS {
            return Err(format!("decimals must be <= {}", MAX_DECIMALS));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PredictionConfig::default();
        assert_eq!(config.num_threads, 1);
        assert_eq!(config.longitude_convention, LongitudeConvention::Signed180);
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.decimals, 3);
        assert!(config.constants_dir.is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PredictionConfig::default();
        assert!(config.validate().is_ok());

        config.num_threads = 0;
        assert!(config.validate().is_err());

        config = PredictionConfig::default();
        config.decimals = MAX_DECIMALS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: PredictionConfig =
            serde_json::from_str(r#"{"rounding": "HalfAwayFromZero", "num_threads": 4}"#).unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.num_threads, 4);
        assert_eq!(config.decimals, 3);
    }

    const ENV_VARS: [&str; 4] = [
        "TIDE_NUM_THREADS",
        "TIDE_LONGITUDE_CONVENTION",
        "TIDE_ROUNDING_MODE",
        "TIDE_DECIMALS",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    // Single test so the variables are never set concurrently.
    #[test]
    fn test_from_env() {
        clear_env();
        assert_eq!(PredictionConfig::from_env(), PredictionConfig::default());

        std::env::set_var("TIDE_NUM_THREADS", "6");
        std::env::set_var("TIDE_LONGITUDE_CONVENTION", "positive360");
        std::env::set_var("TIDE_ROUNDING_MODE", "HALF_AWAY_FROM_ZERO");
        std::env::set_var("TIDE_DECIMALS", "4");
        let config = PredictionConfig::from_env();
        assert_eq!(config.num_threads, 6);
        assert_eq!(config.longitude_convention, LongitudeConvention::Positive360);
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.decimals, 4);
        assert!(config.constants_dir.is_none());

        std::env::set_var("TIDE_NUM_THREADS", "many");
        std::env::set_var("TIDE_LONGITUDE_CONVENTION", "postive360");
        std::env::set_var("TIDE_ROUNDING_MODE", "half-evn");
        std::env::set_var("TIDE_DECIMALS", "-2");
        let config = PredictionConfig::from_env();
        assert_eq!(config, PredictionConfig::default());

        clear_env();
    }

    #[test]
    fn test_with_constants_dir() {
        let config = PredictionConfig::default().with_constants_dir("/data/fes2014");
        assert_eq!(config.constants_dir, Some(PathBuf::from("/data/fes2014")));
    }
}
