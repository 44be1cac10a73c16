//! Single-step regressor contracts and reference implementations
//!
//! The forecaster only ever calls [`Regressor::predict_one`]. Online updates
//! live on the separate [`OnlineRegressor`] extension so that prediction-only
//! code cannot mutate model state.

pub mod linear;
pub mod mean;

pub use linear::OnlineLinearRegressor;
pub use mean::RunningMeanRegressor;

use crate::error::Result;
use crate::observation::Observation;

/// A model predicting one scalar target from one observation
pub trait Regressor {
    /// Predict the target for a single observation.
    ///
    /// `None` means no input is available; implementations decide the default
    /// prediction for that case.
    fn predict_one(&self, x: Option<&Observation>) -> Result<f64>;
}

/// A regressor that can be updated one sample at a time
pub trait OnlineRegressor: Regressor {
    /// Update the model with a single `(x, y)` pair
    fn learn_one(&mut self, x: &Observation, y: f64) -> Result<()>;
}

impl<R: Regressor + ?Sized> Regressor for &R {
    fn predict_one(&self, x: Option<&Observation>) -> Result<f64> {
        (**self).predict_one(x)
    }
}

impl<R: Regressor + ?Sized> Regressor for Box<R> {
    fn predict_one(&self, x: Option<&Observation>) -> Result<f64> {
        (**self).predict_one(x)
    }
}

impl<R: OnlineRegressor + ?Sized> OnlineRegressor for Box<R> {
    fn learn_one(&mut self, x: &Observation, y: f64) -> Result<()> {
        (**self).learn_one(x, y)
    }
}
