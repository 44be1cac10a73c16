//! Common test utilities module
//!
//! Stub regressors with fixed behaviour for exercising the forecaster.

pub mod stubs;

pub use stubs::{ConstantRegressor, FailingRegressor, IncrementRegressor};
