use std::cell::{Cell, RefCell};

use pandrs_horizon::error::{Error, Result};
use pandrs_horizon::{Observation, Regressor};

/// Always predicts the same value, counting calls
pub struct ConstantRegressor {
    value: f64,
    calls: Cell<usize>,
}

impl ConstantRegressor {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Regressor for ConstantRegressor {
    fn predict_one(&self, _x: Option<&Observation>) -> Result<f64> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.value)
    }
}

/// Predicts `input + 1` for scalars and `0` for no input, recording every input
#[derive(Default)]
pub struct IncrementRegressor {
    inputs: RefCell<Vec<Option<Observation>>>,
}

impl IncrementRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> Vec<Option<Observation>> {
        self.inputs.borrow().clone()
    }
}

impl Regressor for IncrementRegressor {
    fn predict_one(&self, x: Option<&Observation>) -> Result<f64> {
        self.inputs.borrow_mut().push(x.cloned());
        match x {
            None => Ok(0.0),
            Some(Observation::Scalar(v)) => Ok(v + 1.0),
            Some(Observation::Features(_)) => Err(Error::InvalidInput(
                "expected a scalar observation".to_string(),
            )),
        }
    }
}

/// Fails once `fail_at` predictions have succeeded
pub struct FailingRegressor {
    fail_at: usize,
    calls: Cell<usize>,
}

impl FailingRegressor {
    pub fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Regressor for FailingRegressor {
    fn predict_one(&self, _x: Option<&Observation>) -> Result<f64> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call >= self.fail_at {
            Err(Error::Prediction(format!("model failed on call {}", call + 1)))
        } else {
            Ok(call as f64)
        }
    }
}
