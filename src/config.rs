//! File-backed configuration
//!
//! Settings can be read from TOML, YAML or JSON. The format is picked from the
//! file extension.
//!
//! ```toml
//! [forecast]
//! horizon = 12
//! feedback = { kind = "scalar" }
//!
//! [process]
//! window_size = 500
//! start = 0
//! coefficient = 0.5
//! seed = 42
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::forecast::{FeedbackKind, Horizon};
use crate::process::DEFAULT_COEFFICIENT;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(Error::Config(format!(
                "unsupported configuration file: {}",
                path.display()
            ))),
        }
    }
}

/// Forecaster settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    /// Steps to forecast
    pub horizon: Horizon,
    /// How predictions are fed back as inputs
    pub feedback: FeedbackKind,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            horizon: Horizon::new(1),
            feedback: FeedbackKind::Scalar,
        }
    }
}

/// AR(1) process settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Length of the generated window
    pub window_size: usize,
    /// Offset passed to the generator
    pub start: usize,
    /// AR coefficient
    pub coefficient: f64,
    /// Seed for reproducible noise
    pub seed: Option<u64>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            window_size: 100,
            start: 0,
            coefficient: DEFAULT_COEFFICIENT,
            seed: None,
        }
    }
}

impl ProcessConfig {
    /// Check the settings
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::Config("window_size must be positive".to_string()));
        }
        if !self.coefficient.is_finite() {
            return Err(Error::Config(format!(
                "coefficient must be finite, got {}",
                self.coefficient
            )));
        }
        if self.start >= self.window_size {
            warn!(
                "start ({}) >= window_size ({}): generated windows will hold only the initial value",
                self.start, self.window_size
            );
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    pub forecast: ForecastSettings,
    pub process: ProcessConfig,
}

impl HorizonConfig {
    /// Load and validate a configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::from_str_with_format(&content, format)
    }

    /// Parse and validate configuration text
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let config: HorizonConfig = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check all sections.
    ///
    /// A `Horizon` cannot hold a negative step count, so negative horizons are
    /// already rejected while parsing: the format error (`Error::Json`,
    /// `Error::Toml` or `Error::Yaml`) carries the `InvalidHorizon` message.
    pub fn validate(&self) -> Result<()> {
        self.process.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_toml() {
        let text = r#"
            [forecast]
            horizon = 12
            feedback = { kind = "feature", name = "lag_1" }

            [process]
            window_size = 500
            seed = 42
        "#;
        let config = HorizonConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.forecast.horizon.steps(), 12);
        assert_eq!(
            config.forecast.feedback,
            FeedbackKind::Feature {
                name: "lag_1".to_string()
            }
        );
        assert_eq!(config.process.window_size, 500);
        assert_eq!(config.process.coefficient, DEFAULT_COEFFICIENT);
        assert_eq!(config.process.seed, Some(42));
    }

    #[test]
    fn test_parse_yaml_defaults() {
        let text = "forecast:\n  horizon: 3\n";
        let config = HorizonConfig::from_str_with_format(text, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.forecast.horizon.steps(), 3);
        assert_eq!(config.forecast.feedback, FeedbackKind::Scalar);
        assert_eq!(config.process, ProcessConfig::default());
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let text = r#"{"forecast": {"horizon": -2}}"#;
        match HorizonConfig::from_str_with_format(text, ConfigFormat::Json) {
            Err(Error::Json(e)) => assert!(e.to_string().contains("Invalid horizon: -2")),
            other => panic!("expected JSON error, got {:?}", other),
        }

        let text = "[forecast]\nhorizon = -7\n";
        match HorizonConfig::from_str_with_format(text, ConfigFormat::Toml) {
            Err(Error::Toml(e)) => assert!(e.to_string().contains("Invalid horizon: -7")),
            other => panic!("expected TOML error, got {:?}", other),
        }
    }

    #[test]
    fn test_large_horizon_survives_json() {
        let config = HorizonConfig {
            forecast: ForecastSettings {
                horizon: Horizon::new(usize::MAX),
                ..ForecastSettings::default()
            },
            ..HorizonConfig::default()
        };
        let json = config.to_json().unwrap();
        let back = HorizonConfig::from_str_with_format(&json, ConfigFormat::Json).unwrap();
        assert_eq!(back.forecast.horizon.steps(), usize::MAX);
    }

    #[test]
    fn test_feature_feedback_config_drives_forecast() {
        use crate::forecast::IterativeForecaster;
        use crate::model::{OnlineLinearRegressor, OnlineRegressor};
        use crate::observation::Observation;

        let text = r#"
            [forecast]
            horizon = 3
            feedback = { kind = "feature", name = "lag_1" }
        "#;
        let config = HorizonConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();

        let mut model = OnlineLinearRegressor::new(0.1);
        model
            .learn_one(&Observation::from_pairs([("lag_1", 1.0)]), 1.0)
            .unwrap();
        let forecaster = IterativeForecaster::from_config(model, &config.forecast);
        let forecast = forecaster
            .forecast_horizon(config.forecast.horizon, None)
            .unwrap();

        // weight 0.1 and intercept 0.1 after one update
        let expected_second = 0.1 + 0.1 * 0.1;
        assert_eq!(forecast.len(), 3);
        assert!((forecast[0] - 0.1).abs() < 1e-12);
        assert!((forecast[1] - expected_second).abs() < 1e-12);
        assert!((forecast[2] - (0.1 + 0.1 * expected_second)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_window_rejected() {
        let text = "[process]\nwindow_size = 0\n";
        let result = HorizonConfig::from_str_with_format(text, ConfigFormat::Toml);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_path_detects_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("horizon.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"forecast": {{"horizon": 4}}, "process": {{"seed": 9}}}}"#).unwrap();

        let config = HorizonConfig::from_path(&path).unwrap();
        assert_eq!(config.forecast.horizon.steps(), 4);
        assert_eq!(config.process.seed, Some(9));

        let round_trip =
            HorizonConfig::from_str_with_format(&config.to_json().unwrap(), ConfigFormat::Json)
                .unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn test_unknown_extension() {
        assert!(matches!(
            ConfigFormat::from_path(Path::new("settings.ini")),
            Err(Error::Config(_))
        ));
    }
}
