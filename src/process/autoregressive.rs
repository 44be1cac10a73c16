//! Synthetic AR(1) process
//!
//! Generates `x[t] = phi * x[t-1] + e[t]` with `x[0] = 0` and uniform noise
//! `e[t]` on `[0, 1)`.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::ProcessConfig;
use crate::error::{Error, Result};
use crate::vis::{Chart, LinePlot, LinePlotConfig};

/// Default AR coefficient
pub const DEFAULT_COEFFICIENT: f64 = 0.5;

/// Title used when plotting a generated process
pub const PLOT_TITLE: &str = "Autoregressive (AR) Model";

/// Legend label used when plotting a generated process
pub const PLOT_LABEL: &str = "AR(1) process";

/// First-order autoregressive process generator
#[derive(Debug, Clone)]
pub struct AutoregressiveProcess {
    /// Length of the generated window
    window_size: usize,
    /// AR(1) coefficient
    coefficient: f64,
    /// Noise source
    rng: StdRng,
}

impl AutoregressiveProcess {
    /// Create a generator for windows of `window_size` values, seeded from OS entropy
    pub fn new(window_size: usize) -> Self {
        let mut seed_bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut seed_bytes);
        Self {
            window_size,
            coefficient: DEFAULT_COEFFICIENT,
            rng: StdRng::from_seed(seed_bytes),
        }
    }

    /// Build a generator from configuration
    pub fn from_config(config: &ProcessConfig) -> Result<Self> {
        config.validate()?;
        let process = Self::new(config.window_size).with_coefficient(config.coefficient)?;
        Ok(match config.seed {
            Some(seed) => process.with_seed(seed),
            None => process,
        })
    }

    /// Use a fixed seed for reproducible noise
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the AR coefficient
    pub fn with_coefficient(mut self, coefficient: f64) -> Result<Self> {
        if !coefficient.is_finite() {
            return Err(Error::InvalidValue(format!(
                "AR coefficient must be finite, got {}",
                coefficient
            )));
        }
        self.coefficient = coefficient;
        Ok(self)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Generate one window of the process.
    ///
    /// The series always starts at `0.0`, then one value is appended for each
    /// `t` in `start + 1 .. window_size`, so the result holds
    /// `max(window_size - start, 1)` values.
    pub fn process(&mut self, start: usize) -> Vec<f64> {
        let steps = self.window_size.saturating_sub(start + 1);
        let mut values = Vec::with_capacity(steps + 1);
        values.push(0.0);

        let mut previous = 0.0;
        for _ in 0..steps {
            let next = self.coefficient * previous + self.rng.random::<f64>();
            values.push(next);
            previous = next;
        }

        info!(
            "generated AR(1) window: {} values (phi = {})",
            values.len(),
            self.coefficient
        );
        values
    }

    /// Render a generated window as a text line chart
    pub fn plot_process(&self, values: &[f64]) -> String {
        let mut config = LinePlotConfig::default();
        config.base.title = Some(PLOT_TITLE.to_string());
        config.legend = Some(PLOT_LABEL.to_string());
        LinePlot::with_config(values, config).render()
    }
}
