// src/plot_functions/plot_real_data.rs

use std::error::Error;
use std::path::Path;

use crate::annotations::delay_property_text;
use crate::constants::{COLOR_DELAYED, COLOR_ORIGINAL, LINE_WIDTH_PLOT};
use crate::plot_framework::{
    calculate_range, draw_single_plot, value_bounds, PlotConfig, PlotSeries, SeriesStyle,
};
use crate::signal::sequence::Sequence;

pub const REAL_DATA_PLOT_TITLE: &str = "Original vs Delayed Real Data Sequence";

/// Line plots of an uploaded column and its delayed copy. `None` when the column holds no
/// finite values to scale the axis by.
pub fn real_data_plot_config(x: &Sequence, y: &Sequence) -> Option<PlotConfig> {
    let (val_min, val_max) = value_bounds(&[x.values(), y.values()])?;
    let (y_min, y_max) = calculate_range(val_min, val_max);

    let len = x.len().max(y.len());
    let x_max = if len > 1 { (len - 1) as f64 } else { 1.0 };

    Some(PlotConfig {
        title: REAL_DATA_PLOT_TITLE.to_string(),
        x_range: 0.0..x_max,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries {
                data: x.points(),
                label: "Original Sequence".to_string(),
                color: *COLOR_ORIGINAL,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Line,
                markers: false,
            },
            PlotSeries {
                data: y.points(),
                label: "Delayed Sequence".to_string(),
                color: *COLOR_DELAYED,
                stroke_width: LINE_WIDTH_PLOT,
                style: SeriesStyle::Line,
                markers: false,
            },
        ],
        x_label: "n (time steps)".to_string(),
        y_label: x.name(),
        annotation: Some(delay_property_text(Some(y.delay()))),
    })
}

/// Generates the original vs delayed plot for a dataset column.
pub fn plot_real_data(
    x: &Sequence,
    y: &Sequence,
    output_path: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    draw_single_plot(
        output_path,
        root_name,
        "Real Data",
        real_data_plot_config(x, y),
    )
}
