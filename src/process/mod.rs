//! Synthetic time series generators

pub mod autoregressive;

pub use autoregressive::{AutoregressiveProcess, DEFAULT_COEFFICIENT, PLOT_LABEL, PLOT_TITLE};
