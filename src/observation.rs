//! Observation data model
//!
//! An observation is the input of one time step. Regressors normally receive a
//! feature mapping, but the iterative forecaster feeds raw predictions back in,
//! so a bare scalar is a valid observation as well.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from feature name to numeric value
pub type FeatureMap = HashMap<String, f64>;

/// Input of a single prediction step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observation {
    /// A bare scalar value
    Scalar(f64),
    /// Named numeric features
    Features(FeatureMap),
}

impl Observation {
    /// Feature name under which a scalar observation is exposed
    pub const SCALAR_FEATURE: &'static str = "value";

    /// Build a feature observation from `(name, value)` pairs
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Observation::Features(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the scalar value, if this is a scalar observation
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Observation::Scalar(v) => Some(*v),
            Observation::Features(_) => None,
        }
    }

    /// Returns the feature map, if this is a feature observation
    pub fn as_features(&self) -> Option<&FeatureMap> {
        match self {
            Observation::Scalar(_) => None,
            Observation::Features(map) => Some(map),
        }
    }

    /// Look up a feature value. A scalar answers to [`Observation::SCALAR_FEATURE`].
    pub fn get(&self, name: &str) -> Option<f64> {
        match self {
            Observation::Scalar(v) if name == Self::SCALAR_FEATURE => Some(*v),
            Observation::Scalar(_) => None,
            Observation::Features(map) => map.get(name).copied(),
        }
    }

    /// Iterate over `(name, value)` pairs
    pub fn features(&self) -> Box<dyn Iterator<Item = (&str, f64)> + '_> {
        match self {
            Observation::Scalar(v) => Box::new(std::iter::once((Self::SCALAR_FEATURE, *v))),
            Observation::Features(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), *v))),
        }
    }

    /// Number of features carried by this observation
    pub fn len(&self) -> usize {
        match self {
            Observation::Scalar(_) => 1,
            Observation::Features(map) => map.len(),
        }
    }

    /// Whether the observation carries no features
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for Observation {
    fn from(value: f64) -> Self {
        Observation::Scalar(value)
    }
}

impl From<FeatureMap> for Observation {
    fn from(map: FeatureMap) -> Self {
        Observation::Features(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_exposes_single_feature() {
        let obs = Observation::from(2.5);
        assert_eq!(obs.as_scalar(), Some(2.5));
        assert_eq!(obs.get(Observation::SCALAR_FEATURE), Some(2.5));
        assert_eq!(obs.get("other"), None);
        assert_eq!(obs.len(), 1);
        let pairs: Vec<_> = obs.features().collect();
        assert_eq!(pairs, vec![("value", 2.5)]);
    }

    #[test]
    fn test_feature_lookup() {
        let obs = Observation::from_pairs([("lag_1", 1.0), ("lag_2", 3.0)]);
        assert!(obs.as_scalar().is_none());
        assert_eq!(obs.get("lag_2"), Some(3.0));
        assert_eq!(obs.len(), 2);
        assert!(!obs.is_empty());
        assert!(Observation::Features(FeatureMap::new()).is_empty());
    }

    #[test]
    fn test_untagged_json() {
        let scalar: Observation = serde_json::from_str("4.0").unwrap();
        assert_eq!(scalar, Observation::Scalar(4.0));

        let features: Observation = serde_json::from_str(r#"{"x": 1.5}"#).unwrap();
        assert_eq!(features.get("x"), Some(1.5));
    }
}
