//! Text line plot for sequential data

use super::{Chart, ChartConfig, ChartStyle};

/// Configuration for line plot
#[derive(Debug, Clone)]
pub struct LinePlotConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Legend label shown under the chart
    pub legend: Option<String>,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig {
                height: 10,
                ..Default::default()
            },
            style: ChartStyle::Unicode,
            legend: None,
        }
    }
}

/// Line plot for time series or sequential data
#[derive(Debug, Clone)]
pub struct LinePlot {
    /// Data values
    values: Vec<f64>,
    /// Configuration
    config: LinePlotConfig,
}

impl LinePlot {
    /// Create a new line plot
    pub fn new(values: &[f64]) -> Self {
        Self::with_config(values, LinePlotConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(values: &[f64], config: LinePlotConfig) -> Self {
        Self {
            values: values.to_vec(),
            config,
        }
    }

    fn point_char(&self) -> char {
        match self.config.style {
            ChartStyle::Ascii => '*',
            ChartStyle::Unicode => '●',
        }
    }

    fn axis_chars(&self) -> (char, char, char) {
        match self.config.style {
            ChartStyle::Ascii => ('|', '+', '-'),
            ChartStyle::Unicode => ('│', '└', '─'),
        }
    }
}

impl Chart for LinePlot {
    fn render(&self) -> String {
        if self.values.is_empty() {
            return String::from("No data to display");
        }

        let mut output = String::new();
        let height = self.config.base.height.max(2);
        let width = self.config.base.width.min(self.values.len()).max(1);
        let point = self.point_char();
        let (v_axis, corner, h_axis) = self.axis_chars();

        let min_val = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_val = self
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let range = if (max_val - min_val).abs() < f64::EPSILON {
            1.0
        } else {
            max_val - min_val
        };

        // Title
        if let Some(ref title) = self.config.base.title {
            output.push_str(&format!("{:^width$}\n\n", title, width = width));
        }

        // Sample data to fit width
        let step = self.values.len() as f64 / width as f64;
        let sampled: Vec<usize> = (0..width)
            .map(|i| {
                let idx = (i as f64 * step).floor() as usize;
                let val = self.values[idx.min(self.values.len() - 1)];
                ((val - min_val) / range * (height - 1) as f64).round() as usize
            })
            .collect();

        // Render from top to bottom
        for row in (0..height).rev() {
            if self.config.base.show_labels {
                let y_val = min_val + (row as f64 / (height - 1) as f64) * range;
                output.push_str(&format!("{:>6.1} {}", y_val, v_axis));
            }

            for &y in &sampled {
                output.push(if y == row { point } else { ' ' });
            }
            output.push('\n');
        }

        // X-axis
        if self.config.base.show_labels {
            output.push_str("       ");
            output.push(corner);
            for _ in 0..width {
                output.push(h_axis);
            }
            output.push('\n');
        }

        if let Some(ref legend) = self.config.legend {
            output.push_str(&format!("        {} {}\n", point, legend));
        }

        output
    }
}
