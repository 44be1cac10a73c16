//! Plotters and textplots rendering of generated series
//!
//! Enabled with the `visualization` feature.

use std::path::Path;

use plotters::prelude::*;
use textplots::{Chart as TextChart, Plot, Shape};

use crate::error::{Error, Result};
use crate::process::{PLOT_LABEL, PLOT_TITLE};

/// Image output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// PNG image
    PNG,
    /// SVG document
    SVG,
}

/// Settings for image plots
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// Title
    pub title: String,
    /// Legend label of the series
    pub label: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Output format
    pub output_type: OutputType,
    /// Draw the mesh grid
    pub show_grid: bool,
    /// Line color
    pub color: (u8, u8, u8),
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: PLOT_TITLE.to_string(),
            label: PLOT_LABEL.to_string(),
            x_label: "t".to_string(),
            y_label: "x".to_string(),
            width: 800,
            height: 600,
            output_type: OutputType::PNG,
            show_grid: true,
            color: (0, 123, 255),
        }
    }
}

/// Print a series as a terminal chart using textplots
pub fn display_process(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::Empty("No data to plot".to_string()));
    }

    let points: Vec<(f32, f32)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f32, *v as f32))
        .collect();
    let x_max = (values.len().max(2) - 1) as f32;

    println!("{}", PLOT_TITLE);
    TextChart::new(120, 60, 0.0, x_max)
        .lineplot(&Shape::Lines(&points))
        .display();
    println!("  {}", PLOT_LABEL);
    Ok(())
}

/// Save a series as a PNG or SVG line chart
pub fn save_process_plot<P: AsRef<Path>>(values: &[f64], path: P, settings: &PlotSettings) -> Result<()> {
    if values.is_empty() {
        return Err(Error::Empty("No data to plot".to_string()));
    }

    match settings.output_type {
        OutputType::PNG => {
            let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_line_chart(&root, values, settings)
        }
        OutputType::SVG => {
            let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_line_chart(&root, values, settings)
        }
    }
}

fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    values: &[f64],
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let x_max = (values.len().max(2) - 1) as f64;
    let y_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_margin = ((y_max - y_min) * 0.05).max(0.1);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..x_max, (y_min - y_margin)..(y_max + y_margin))?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let (r, g, b) = settings.color;
    let points = values.iter().enumerate().map(|(i, v)| (i as f64, *v));
    chart
        .draw_series(LineSeries::new(points, RGBColor(r, g, b)))?
        .label(settings.label.clone())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(r, g, b)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
