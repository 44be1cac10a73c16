//! Multi-step forecasting module
//!
//! Turns any single-step [`Regressor`](crate::model::Regressor) into a
//! multi-step forecaster by open-loop feedback of its own predictions.

pub mod feedback;
pub mod horizon;
pub mod iterative;

pub use feedback::{FeedbackAdapter, FeedbackKind, NamedFeatureFeedback, ScalarFeedback};
pub use horizon::Horizon;
pub use iterative::IterativeForecaster;
