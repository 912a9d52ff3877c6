//! High-level tide prediction service.
//!
//! `TidePredictor` is the entry point for callers. It validates the request,
//! builds the hourly grid, loads the tide constants from an explicit
//! directory, evaluates the ocean and radial load tides and assembles the
//! table.
//!
//! # Example
//!
//! ```rust,ignore
//! let predictor = TidePredictor::new(loader, evaluator, PredictionConfig::default())?;
//!
//! let query = PredictionQuery::parse(59.195, -7.688, "1983-01-01", "1983-01-02")?
//!     .with_constants_dir("/data/fes2014");
//! let table = predictor.predict(&query)?;
//! println!("{}", table);
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tide_common::GeoPoint;
use tracing::{debug, info, warn};

use crate::assembler::TidePredictionAssembler;
use crate::broadcast::{CoordinateBroadcaster, SampleCoordinates};
use crate::config::PredictionConfig;
use crate::error::{PredictionError, Result};
use crate::evaluator::{ConstantsLoader, TideEvaluator, TideModels};
use crate::grid::{TimeGrid, TimeGridBuilder};
use crate::query::PredictionQuery;
use crate::table::PredictionTable;
use crate::types::{ConstituentSet, EvaluatedTide, TideComponents};

/// Tide prediction service over a constants loader and a tide evaluator.
///
/// Holds no per-request state; `predict` may be called repeatedly and from
/// several predictors at once.
pub struct TidePredictor<L, E> {
    loader: L,
    evaluator: E,
    config: PredictionConfig,
    grid_builder: TimeGridBuilder,
    broadcaster: CoordinateBroadcaster,
    assembler: TidePredictionAssembler,
}

impl<L, E> TidePredictor<L, E>
where
    L: ConstantsLoader,
    E: TideEvaluator<L::Model>,
{
    /// Create a predictor, validating the configuration.
    pub fn new(loader: L, evaluator: E, config: PredictionConfig) -> Result<Self> {
        config.validate().map_err(PredictionError::config)?;

        Ok(Self {
            loader,
            evaluator,
            grid_builder: TimeGridBuilder::new(),
            broadcaster: CoordinateBroadcaster::new(config.longitude_convention),
            assembler: TidePredictionAssembler::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict the tide table for a query.
    ///
    /// Calls the evaluator exactly twice, once per [`ConstituentSet`], with
    /// identical timestamps and coordinates. Quality flags and the load
    /// long-period series are discarded.
    pub fn predict(&self, query: &PredictionQuery) -> Result<PredictionTable> {
        info!(
            lat = query.latitude,
            lon = query.longitude,
            start = %query.start,
            end = %query.end,
            "Tide prediction requested"
        );

        // Validate the point before anything expensive.
        GeoPoint::validated(query.latitude, query.longitude)?;

        let grid = self.grid_builder.build(query.start, query.end)?;
        let coords = self
            .broadcaster
            .broadcast(query.latitude, query.longitude, grid.len())?;

        let constants_dir = self.resolve_constants_dir(query)?;
        let models = self.load_models(&constants_dir)?;

        let ocean = self.evaluate(&models, ConstituentSet::OceanTide, &grid, &coords)?;
        let radial = self.evaluate(&models, ConstituentSet::RadialLoad, &grid, &coords)?;

        let components = TideComponents::from_evaluations(ocean, radial);
        let table = self.assembler.assemble(&grid, &coords, &components)?;

        info!(rows = table.len(), "Tide prediction complete");
        Ok(table)
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// The query's directory wins over the configured default.
    fn resolve_constants_dir(&self, query: &PredictionQuery) -> Result<PathBuf> {
        let dir = query
            .constants_dir()
            .or(self.config.constants_dir.as_deref())
            .ok_or(PredictionError::MissingConstantsDir)?;

        if !dir.is_dir() {
            return Err(PredictionError::ConstantsDirNotFound(dir.to_path_buf()));
        }
        Ok(dir.to_path_buf())
    }

    fn load_models(&self, constants_dir: &Path) -> Result<TideModels<L::Model>> {
        debug!(dir = %constants_dir.display(), "Loading tide constants");
        self.loader
            .load(constants_dir)
            .map_err(|e| PredictionError::constants_load(constants_dir, e))
    }

    fn evaluate(
        &self,
        models: &TideModels<L::Model>,
        set: ConstituentSet,
        grid: &TimeGrid,
        coords: &SampleCoordinates,
    ) -> Result<EvaluatedTide> {
        debug!(
            set = set.as_str(),
            samples = grid.len(),
            num_threads = self.config.num_threads,
            "Evaluating tide"
        );

        let evaluated = self
            .evaluator
            .evaluate(
                models.get(set),
                grid.timestamps(),
                &coords.longitudes,
                &coords.latitudes,
                self.config.num_threads,
            )
            .map_err(|e| PredictionError::evaluator(set, e))?;

        let non_finite = evaluated.non_finite_count();
        if non_finite > 0 {
            warn!(
                set = set.as_str(),
                non_finite,
                samples = grid.len(),
                "Tide evaluator returned non-finite values; point may lie outside model coverage"
            );
        }

        Ok(evaluated)
    }
}

/// One-call tide prediction from date strings.
///
/// Uses the default configuration with `constants_dir` as the constants
/// directory.
pub fn predict_tide<L, E>(
    loader: L,
    evaluator: E,
    latitude: f64,
    longitude: f64,
    start_date: &str,
    end_date: &str,
    constants_dir: impl AsRef<Path>,
) -> Result<PredictionTable>
where
    L: ConstantsLoader,
    E: TideEvaluator<L::Model>,
{
    let query = PredictionQuery::parse(latitude, longitude, start_date, end_date)?
        .with_constants_dir(constants_dir.as_ref());
    TidePredictor::new(loader, evaluator, PredictionConfig::default())?.predict(&query)
}

/// Number of hourly samples a date range produces, without evaluating it.
pub fn expected_rows(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<usize> {
    TimeGridBuilder::new().build(start, end).map(|grid| grid.len())
}
