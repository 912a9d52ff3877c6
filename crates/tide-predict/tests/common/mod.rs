//! Mock tide model collaborators shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tide_predict::{
    BoxError, ConstantsLoader, ConstituentSet, EvaluatedTide, TideEvaluator, TideModels,
};

/// A loaded synthetic constituent set.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticModel {
    pub set: ConstituentSet,
    pub dir: PathBuf,
}

/// Loader that records every directory it is asked to open.
#[derive(Default)]
pub struct SyntheticLoader {
    pub fail: bool,
    pub loaded: RefCell<Vec<PathBuf>>,
}

impl SyntheticLoader {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl ConstantsLoader for SyntheticLoader {
    type Model = SyntheticModel;

    fn load(&self, constants_dir: &Path) -> Result<TideModels<SyntheticModel>, BoxError> {
        self.loaded.borrow_mut().push(constants_dir.to_path_buf());
        if self.fail {
            return Err("constituent database is corrupt".into());
        }

        Ok(TideModels::new(
            SyntheticModel {
                set: ConstituentSet::OceanTide,
                dir: constants_dir.to_path_buf(),
            },
            SyntheticModel {
                set: ConstituentSet::RadialLoad,
                dir: constants_dir.to_path_buf(),
            },
        ))
    }
}

/// One recorded evaluator call.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateCall {
    pub set: ConstituentSet,
    pub timestamps: Vec<DateTime<Utc>>,
    pub longitudes: Vec<f64>,
    pub latitudes: Vec<f64>,
    pub num_threads: usize,
}

/// Evaluator producing the synthetic series from `test_utils`.
#[derive(Default)]
pub struct SyntheticEvaluator {
    /// Drop this many samples from the primary series of `short_set`.
    pub truncate: usize,
    pub short_set: Option<ConstituentSet>,
    /// Fail when evaluating this set.
    pub fail_on: Option<ConstituentSet>,
    /// Sample indices returned as NaN (outside the mesh).
    pub nan_indices: Vec<usize>,
    pub calls: RefCell<Vec<EvaluateCall>>,
}

impl SyntheticEvaluator {
    pub fn truncating(set: ConstituentSet, by: usize) -> Self {
        Self {
            truncate: by,
            short_set: Some(set),
            ..Default::default()
        }
    }

    pub fn failing_on(set: ConstituentSet) -> Self {
        Self {
            fail_on: Some(set),
            ..Default::default()
        }
    }

    pub fn with_nans(indices: &[usize]) -> Self {
        Self {
            nan_indices: indices.to_vec(),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

/// The unrounded series the evaluator returns for `set`.
pub fn expected_series(set: ConstituentSet, len: usize) -> (Vec<f64>, Vec<f64>) {
    match set {
        ConstituentSet::OceanTide => (
            test_utils::create_ocean_tide_series(len),
            test_utils::create_long_period_series(len),
        ),
        ConstituentSet::RadialLoad => (
            test_utils::create_load_tide_series(len),
            test_utils::create_constant_series(len, 0.05),
        ),
    }
}

impl TideEvaluator<SyntheticModel> for SyntheticEvaluator {
    fn evaluate(
        &self,
        model: &SyntheticModel,
        timestamps: &[DateTime<Utc>],
        longitudes: &[f64],
        latitudes: &[f64],
        num_threads: usize,
    ) -> Result<EvaluatedTide, BoxError> {
        self.calls.borrow_mut().push(EvaluateCall {
            set: model.set,
            timestamps: timestamps.to_vec(),
            longitudes: longitudes.to_vec(),
            latitudes: latitudes.to_vec(),
            num_threads,
        });

        if self.fail_on == Some(model.set) {
            return Err(format!("mesh lookup failed for {}", model.set.as_str()).into());
        }

        let n = timestamps.len();
        let (mut primary, mut long_period) = expected_series(model.set, n);

        for &i in &self.nan_indices {
            if i < n && model.set == ConstituentSet::OceanTide {
                primary[i] = f64::NAN;
                long_period[i] = f64::NAN;
            }
        }

        if self.short_set == Some(model.set) {
            primary.truncate(n.saturating_sub(self.truncate));
        }

        Ok(EvaluatedTide::new(primary, long_period, vec![1; n]))
    }
}
