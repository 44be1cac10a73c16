//! Module providing data visualization functionality
//!
//! Text-based line charts are always available and need no external
//! dependencies. With the `visualization` feature, generated series can also be
//! drawn in the terminal with textplots or saved as PNG/SVG with plotters.

mod line_plot;

#[cfg(feature = "visualization")]
pub mod plotters_ext;

pub use line_plot::{LinePlot, LinePlotConfig};

#[cfg(feature = "visualization")]
pub use plotters_ext::{display_process, save_process_plot, OutputType, PlotSettings};

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;

    /// Render to stdout
    fn display(&self) {
        println!("{}", self.render());
    }
}

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in characters
    pub width: usize,
    /// Chart height in characters
    pub height: usize,
    /// Show axis labels
    pub show_labels: bool,
    /// Title for the chart
    pub title: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            show_labels: true,
            title: None,
        }
    }
}

/// Chart style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Simple ASCII characters
    Ascii,
    /// Unicode characters
    #[default]
    Unicode,
}
