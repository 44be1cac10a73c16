//! Iterative (open-loop) multi-step forecasting
//!
//! Wraps a single-step regressor and forecasts several steps ahead by feeding
//! each prediction back in as the next input.

use log::{debug, trace};

use super::feedback::{FeedbackAdapter, FeedbackKind, ScalarFeedback};
use super::horizon::Horizon;
use crate::config::ForecastSettings;
use crate::error::Result;
use crate::model::{OnlineRegressor, Regressor};
use crate::observation::Observation;

/// Multi-step forecaster built on top of a single-step regressor
///
/// # Example
///
/// ```
/// use pandrs_horizon::forecast::IterativeForecaster;
/// use pandrs_horizon::model::{OnlineRegressor, RunningMeanRegressor};
/// use pandrs_horizon::Observation;
///
/// let mut forecaster = IterativeForecaster::new(RunningMeanRegressor::new());
/// forecaster.learn_one(&Observation::Scalar(0.0), 2.0).unwrap();
/// let forecast = forecaster.forecast(3, None).unwrap();
/// assert_eq!(forecast, vec![2.0, 2.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct IterativeForecaster<R, A = ScalarFeedback> {
    /// Single-step model
    regressor: R,
    /// Turns a prediction into the next input
    feedback: A,
}

impl<R: Regressor> IterativeForecaster<R> {
    /// Create a forecaster that feeds raw scalar predictions back in
    pub fn new(regressor: R) -> Self {
        Self {
            regressor,
            feedback: ScalarFeedback,
        }
    }
}

impl<R: Regressor> IterativeForecaster<R, FeedbackKind> {
    /// Create a forecaster using the feedback selected in `settings`
    pub fn from_config(regressor: R, settings: &ForecastSettings) -> Self {
        Self::with_feedback(regressor, settings.feedback.clone())
    }
}

impl<R: Regressor, A: FeedbackAdapter> IterativeForecaster<R, A> {
    /// Create a forecaster with a custom feedback adapter
    pub fn with_feedback(regressor: R, feedback: A) -> Self {
        Self {
            regressor,
            feedback,
        }
    }

    /// Forecast `horizon` steps ahead starting from `seed`.
    ///
    /// The first step predicts from `seed` (or `None`); every following step
    /// predicts from the previous prediction after it passed through the
    /// feedback adapter. A zero horizon returns an empty vector without calling
    /// the regressor. Prediction errors are returned as-is.
    pub fn forecast(&self, horizon: usize, seed: Option<&Observation>) -> Result<Vec<f64>> {
        debug!(
            "forecasting {} steps (seeded: {})",
            horizon,
            seed.is_some()
        );

        let mut forecasts = Vec::with_capacity(horizon);
        let mut current = seed.cloned();

        for step in 0..horizon {
            let prediction = self.regressor.predict_one(current.as_ref())?;
            trace!("step {}: {}", step + 1, prediction);
            forecasts.push(prediction);
            current = Some(self.feedback.next_input(step, prediction));
        }

        Ok(forecasts)
    }

    /// Forecast over a [`Horizon`]
    pub fn forecast_horizon(&self, horizon: Horizon, seed: Option<&Observation>) -> Result<Vec<f64>> {
        self.forecast(horizon.steps(), seed)
    }

    /// Forecast with a signed step count. Negative values are rejected with
    /// [`Error::InvalidHorizon`](crate::error::Error::InvalidHorizon) before
    /// the regressor is called.
    pub fn forecast_signed(&self, horizon: i64, seed: Option<&Observation>) -> Result<Vec<f64>> {
        let horizon = Horizon::try_from(horizon)?;
        self.forecast_horizon(horizon, seed)
    }

    /// The wrapped regressor
    pub fn regressor(&self) -> &R {
        &self.regressor
    }

    /// Mutable access to the wrapped regressor, e.g. for training
    pub fn regressor_mut(&mut self) -> &mut R {
        &mut self.regressor
    }

    /// The feedback adapter
    pub fn feedback(&self) -> &A {
        &self.feedback
    }

    /// Unwrap into the regressor
    pub fn into_inner(self) -> R {
        self.regressor
    }
}

impl<R: Regressor, A: FeedbackAdapter> Regressor for IterativeForecaster<R, A> {
    fn predict_one(&self, x: Option<&Observation>) -> Result<f64> {
        self.regressor.predict_one(x)
    }
}

impl<R: OnlineRegressor, A: FeedbackAdapter> OnlineRegressor for IterativeForecaster<R, A> {
    fn learn_one(&mut self, x: &Observation, y: f64) -> Result<()> {
        self.regressor.learn_one(x, y)
    }
}
