//! Multi-step forecasting for online regressors
//!
//! - [`forecast`]: iterative open-loop forecasting on top of any single-step
//!   [`model::Regressor`]
//! - [`process`]: synthetic AR(1) series to exercise forecasters
//! - [`vis`]: text and image plots of generated series
//! - [`config`]: TOML/YAML/JSON settings

#![allow(clippy::upper_case_acronyms)]

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod observation;
pub mod process;
pub mod vis;

// Re-export commonly used types
pub use config::{ConfigFormat, ForecastSettings, HorizonConfig, ProcessConfig};
pub use error::{Error, Result};
pub use forecast::{FeedbackAdapter, FeedbackKind, Horizon, IterativeForecaster};
pub use model::{OnlineRegressor, Regressor};
pub use observation::{FeatureMap, Observation};
pub use process::AutoregressiveProcess;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
