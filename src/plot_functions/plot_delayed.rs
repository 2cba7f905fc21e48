// src/plot_functions/plot_delayed.rs

use std::error::Error;
use std::path::Path;

use crate::annotations::delay_property_text;
use crate::constants::{
    COLOR_DELAYED, COLOR_ORIGINAL, LINE_WIDTH_PLOT, SYNTHETIC_Y_MAX, SYNTHETIC_Y_MIN,
};
use crate::plot_framework::{draw_single_plot, index_range, PlotConfig, PlotSeries, SeriesStyle};
use crate::signal::sequence::Sequence;

pub const DELAYED_PLOT_TITLE: &str = "Original vs Delayed Delivery Sequence";

/// Step plots (with markers) of x[n] and y[n] = x[n-k] on the same axes.
pub fn delayed_plot_config(x: &Sequence, y: &Sequence) -> PlotConfig {
    PlotConfig {
        title: DELAYED_PLOT_TITLE.to_string(),
        x_range: index_range(x.len().max(y.len())),
        y_range: SYNTHETIC_Y_MIN..SYNTHETIC_Y_MAX,
        series: vec![
            PlotSeries {
                data: x.points(),
                label: "x[n] (Original)".to_string(),
                color: *COLOR_ORIGINAL,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Step,
                markers: true,
            },
            PlotSeries {
                data: y.points(),
                label: "y[n] (Delayed)".to_string(),
                color: *COLOR_DELAYED,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Step,
                markers: true,
            },
        ],
        x_label: "n (time steps)".to_string(),
        y_label: "Deliveries".to_string(),
        annotation: Some(delay_property_text(Some(y.delay()))),
    }
}

/// Generates the original vs delayed schedule plot.
pub fn plot_delayed(
    x: &Sequence,
    y: &Sequence,
    output_path: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    draw_single_plot(
        output_path,
        root_name,
        "Delayed Delivery",
        Some(delayed_plot_config(x, y)),
    )
}
