//! Feedback step of the iterative forecast loop
//!
//! After each step the forecaster turns the prediction into the next input via
//! a [`FeedbackAdapter`]. The default [`ScalarFeedback`] passes the raw scalar
//! through unchanged, even though regressors usually expect a feature map.

use serde::{Deserialize, Serialize};

use crate::observation::{FeatureMap, Observation};

/// Turns a prediction into the observation for the following step
pub trait FeedbackAdapter {
    /// Build the next input from the prediction made at `step` (0-based)
    fn next_input(&self, step: usize, prediction: f64) -> Observation;
}

/// Feeds the prediction back as a bare scalar observation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarFeedback;

impl FeedbackAdapter for ScalarFeedback {
    fn next_input(&self, _step: usize, prediction: f64) -> Observation {
        Observation::Scalar(prediction)
    }
}

/// Feeds the prediction back as a one-entry feature map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFeatureFeedback {
    name: String,
}

impl NamedFeatureFeedback {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FeedbackAdapter for NamedFeatureFeedback {
    fn next_input(&self, _step: usize, prediction: f64) -> Observation {
        let mut features = FeatureMap::with_capacity(1);
        features.insert(self.name.clone(), prediction);
        Observation::Features(features)
    }
}

/// Feedback selection usable from configuration files
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackKind {
    /// See [`ScalarFeedback`]
    #[default]
    Scalar,
    /// See [`NamedFeatureFeedback`]
    Feature { name: String },
}

impl FeedbackAdapter for FeedbackKind {
    fn next_input(&self, step: usize, prediction: f64) -> Observation {
        match self {
            FeedbackKind::Scalar => ScalarFeedback.next_input(step, prediction),
            FeedbackKind::Feature { name } => {
                NamedFeatureFeedback::new(name.as_str()).next_input(step, prediction)
            }
        }
    }
}

impl<A: FeedbackAdapter + ?Sized> FeedbackAdapter for &A {
    fn next_input(&self, step: usize, prediction: f64) -> Observation {
        (**self).next_input(step, prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_feedback() {
        assert_eq!(ScalarFeedback.next_input(0, 1.5), Observation::Scalar(1.5));
    }

    #[test]
    fn test_named_feature_feedback() {
        let feedback = NamedFeatureFeedback::new("lag_1");
        let obs = feedback.next_input(3, -2.0);
        assert_eq!(obs.get("lag_1"), Some(-2.0));
        assert_eq!(obs.len(), 1);
    }

    #[test]
    fn test_kind_matches_adapters() {
        let kind = FeedbackKind::Feature {
            name: "y".to_string(),
        };
        assert_eq!(
            kind.next_input(0, 4.0),
            NamedFeatureFeedback::new("y").next_input(0, 4.0)
        );
        assert_eq!(FeedbackKind::default().next_input(0, 4.0), Observation::Scalar(4.0));
    }
}
