//! Online Linear Regression
//!
//! Stochastic gradient descent over named features with L2 regularization.
//! Weights are created lazily the first time a feature is seen, so the model
//! accepts feature maps of varying shape as well as bare scalars.

use std::collections::HashMap;

use super::{OnlineRegressor, Regressor};
use crate::error::{Error, Result};
use crate::observation::Observation;

/// Online linear regression with SGD
#[derive(Debug, Clone)]
pub struct OnlineLinearRegressor {
    /// Feature weights
    weights: HashMap<String, f64>,
    /// Bias term
    intercept: f64,
    /// Learning rate
    learning_rate: f64,
    /// L2 regularization strength
    l2_reg: f64,
    /// Number of samples seen
    n_samples: u64,
}

impl OnlineLinearRegressor {
    /// Create a new online linear regressor
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - Step size for SGD
    pub fn new(learning_rate: f64) -> Self {
        Self {
            weights: HashMap::new(),
            intercept: 0.0,
            learning_rate,
            l2_reg: 0.0,
            n_samples: 0,
        }
    }

    /// Set the L2 regularization strength
    pub fn with_l2(mut self, l2_reg: f64) -> Self {
        self.l2_reg = l2_reg;
        self
    }

    /// Current weights
    pub fn weights(&self) -> &HashMap<String, f64> {
        &self.weights
    }

    /// Current intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of samples seen
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    fn check_finite(x: &Observation) -> Result<()> {
        for (name, value) in x.features() {
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "feature '{}' is not finite: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    fn raw_predict(&self, x: &Observation) -> f64 {
        x.features().fold(self.intercept, |acc, (name, value)| {
            acc + self.weights.get(name).copied().unwrap_or(0.0) * value
        })
    }
}

impl Default for OnlineLinearRegressor {
    fn default() -> Self {
        Self::new(0.01)
    }
}

impl Regressor for OnlineLinearRegressor {
    fn predict_one(&self, x: Option<&Observation>) -> Result<f64> {
        match x {
            None => Ok(self.intercept),
            Some(x) => {
                Self::check_finite(x)?;
                Ok(self.raw_predict(x))
            }
        }
    }
}

impl OnlineRegressor for OnlineLinearRegressor {
    fn learn_one(&mut self, x: &Observation, y: f64) -> Result<()> {
        Self::check_finite(x)?;
        if !y.is_finite() {
            return Err(Error::InvalidInput(format!("target must be finite, got {}", y)));
        }

        let error = self.raw_predict(x) - y;
        for (name, value) in x.features() {
            let weight = self.weights.entry(name.to_string()).or_insert(0.0);
            let gradient = error * value + self.l2_reg * *weight;
            *weight -= self.learning_rate * gradient;
        }
        self.intercept -= self.learning_rate * error;
        self.n_samples += 1;
        Ok(())
    }
}
