//! Error types for tide prediction.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use tide_common::{CoordinateError, TimeParseError};

use crate::types::ConstituentSet;

/// Opaque error raised by an external collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building a tide prediction.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// A request date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] TimeParseError),

    /// The end date is not at least one whole day after the start date.
    #[error("invalid date range {start} to {end}: {num_days} whole days, need at least 1")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        num_days: i64,
    },

    /// The requested point lies outside the valid geographic domain.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    /// A series does not have one value per grid timestamp.
    #[error("series '{series}' has {actual} samples, expected {expected}")]
    ShapeMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The tide evaluator failed.
    #[error("tide evaluation failed for {set}: {source}")]
    Evaluator {
        set: ConstituentSet,
        #[source]
        source: BoxError,
    },

    /// Neither the request nor the configuration names a constants directory.
    #[error("no constants directory given")]
    MissingConstantsDir,

    /// The constants directory does not exist.
    #[error("constants directory not found: {}", .0.display())]
    ConstantsDirNotFound(PathBuf),

    /// The constants loader failed.
    #[error("failed to load tide constants from {}: {source}", .dir.display())]
    ConstantsLoad {
        dir: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A julian day could not be turned back into a calendar date.
    #[error("julian day {0} has no calendar representation")]
    InvalidJulianDay(f64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PredictionError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(series: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            series,
            expected,
            actual,
        }
    }

    /// Create an Evaluator error.
    pub fn evaluator(set: ConstituentSet, source: BoxError) -> Self {
        Self::Evaluator { set, source }
    }

    /// Create a ConstantsLoad error.
    pub fn constants_load(dir: impl Into<PathBuf>, source: BoxError) -> Self {
        Self::ConstantsLoad {
            dir: dir.into(),
            source,
        }
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error was caused by the caller's input rather than a
    /// collaborator or the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_) | Self::InvalidRange { .. } | Self::InvalidCoordinate(_)
        )
    }
}

/// Result type for tide prediction operations.
pub type Result<T> = std::result::Result<T, PredictionError>;
