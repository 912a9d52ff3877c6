//! Seams to the external tide model.
//!
//! The harmonic evaluation itself lives outside this crate. A prediction
//! needs two collaborators:
//!
//! - a [`ConstantsLoader`] that opens the constituent database found in a
//!   caller-supplied directory and yields one model per [`ConstituentSet`];
//! - a [`TideEvaluator`] that evaluates a model at a list of timestamps and
//!   positions.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::BoxError;
use crate::types::{ConstituentSet, EvaluatedTide};

/// The loaded models for both constituent sets.
#[derive(Debug, Clone)]
pub struct TideModels<M> {
    pub ocean: M,
    pub radial: M,
}

impl<M> TideModels<M> {
    pub fn new(ocean: M, radial: M) -> Self {
        Self { ocean, radial }
    }

    /// The model for a constituent set.
    pub fn get(&self, set: ConstituentSet) -> &M {
        match set {
            ConstituentSet::OceanTide => &self.ocean,
            ConstituentSet::RadialLoad => &self.radial,
        }
    }
}

/// Loads tide models from a constants directory.
///
/// The directory is always passed explicitly; implementations must not read
/// it from process-wide state.
pub trait ConstantsLoader {
    /// Handle to one loaded constituent set.
    type Model;

    fn load(&self, constants_dir: &Path) -> Result<TideModels<Self::Model>, BoxError>;
}

/// Evaluates a loaded tide model.
///
/// Implementations must return series with one value per timestamp. Points
/// outside the model's mesh may be reported as NaN. `num_threads` is a
/// parallelism hint; the output must not depend on it.
pub trait TideEvaluator<M> {
    fn evaluate(
        &self,
        model: &M,
        timestamps: &[DateTime<Utc>],
        longitudes: &[f64],
        latitudes: &[f64],
        num_threads: usize,
    ) -> Result<EvaluatedTide, BoxError>;
}

impl<L: ConstantsLoader + ?Sized> ConstantsLoader for &L {
    type Model = L::Model;

    fn load(&self, constants_dir: &Path) -> Result<TideModels<Self::Model>, BoxError> {
        (**self).load(constants_dir)
    }
}

impl<M, E: TideEvaluator<M> + ?Sized> TideEvaluator<M> for &E {
    fn evaluate(
        &self,
        model: &M,
        timestamps: &[DateTime<Utc>],
        longitudes: &[f64],
        latitudes: &[f64],
        num_threads: usize,
    ) -> Result<EvaluatedTide, BoxError> {
        (**self).evaluate(model, timestamps, longitudes, latitudes, num_threads)
    }
}
