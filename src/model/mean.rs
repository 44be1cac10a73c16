//! Running-mean regressor
//!
//! Ignores its input and predicts the mean of every target seen so far. This
//! is the prediction an incremental regression tree makes before its first
//! split, which makes it a useful baseline for the iterative forecaster.

use super::{OnlineRegressor, Regressor};
use crate::error::{Error, Result};
use crate::observation::Observation;

/// Baseline regressor predicting the running target mean
#[derive(Debug, Clone, Default)]
pub struct RunningMeanRegressor {
    /// Current mean of the targets
    mean: f64,
    /// Number of samples seen
    n_samples: u64,
}

impl RunningMeanRegressor {
    /// Create an empty regressor (predicts 0.0 until updated)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of samples seen
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    /// Current running mean
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Regressor for RunningMeanRegressor {
    fn predict_one(&self, _x: Option<&Observation>) -> Result<f64> {
        Ok(self.mean)
    }
}

impl OnlineRegressor for RunningMeanRegressor {
    fn learn_one(&mut self, _x: &Observation, y: f64) -> Result<()> {
        if !y.is_finite() {
            return Err(Error::InvalidInput(format!("target must be finite, got {}", y)));
        }
        self.n_samples += 1;
        self.mean += (y - self.mean) / self.n_samples as f64;
        Ok(())
    }
}
