//! Hourly astronomical tide predictions for a single point.
//!
//! This crate turns a `(latitude, longitude, start, end)` request into a
//! table of ocean, long-period and radial load tides. The harmonic
//! evaluation is delegated to an external tide model through the
//! [`ConstantsLoader`] and [`TideEvaluator`] traits; this crate owns the
//! time grid, the CNES julian day and calendar columns, rounding and
//! column ordering.
//!
//! # Architecture
//!
//! ```text
//! PredictionQuery (lat, lon, start, end, constants dir)
//!      │
//!      ▼
//! TidePredictor::predict
//!      │
//!      ├─► TimeGridBuilder::build        hourly grid, whole days
//!      │
//!      ├─► CoordinateBroadcaster         validated point, one per sample
//!      │
//!      ├─► ConstantsLoader::load(dir)    tide + radial models
//!      │
//!      ├─► TideEvaluator::evaluate ×2    ocean tide, radial load tide
//!      │
//!      └─► TidePredictionAssembler       julian day, hour, sums, rounding
//!               │
//!               ▼
//!          PredictionTable
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tide_predict::{PredictionConfig, PredictionQuery, TidePredictor};
//!
//! let predictor = TidePredictor::new(loader, evaluator, PredictionConfig::from_env())?;
//! let query = PredictionQuery::parse(59.195, -7.688, "1983-01-01", "1983-01-02")?
//!     .with_constants_dir("/data/fes2014");
//!
//! let table = predictor.predict(&query)?;
//! assert_eq!(table.len(), 24);
//! ```

pub mod assembler;
pub mod broadcast;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod query;
pub mod service;
pub mod table;
pub mod types;

// Re-export commonly used types at crate root
pub use assembler::TidePredictionAssembler;
pub use broadcast::{CoordinateBroadcaster, SampleCoordinates};
pub use config::PredictionConfig;
pub use error::{BoxError, PredictionError, Result};
pub use evaluator::{ConstantsLoader, TideEvaluator, TideModels};
pub use grid::{TimeGrid, TimeGridBuilder};
pub use query::PredictionQuery;
pub use service::{expected_rows, predict_tide, TidePredictor};
pub use table::{Column, PredictionRow, PredictionTable};
pub use types::{ConstituentSet, EvaluatedTide, TideComponents};

pub use tide_common::{LongitudeConvention, RoundingMode};
