// src/plot_functions/plot_regular.rs

use std::error::Error;
use std::path::Path;

use crate::annotations::Z_TRANSFORM_TEXT;
use crate::constants::{COLOR_ORIGINAL, LINE_WIDTH_PLOT, SYNTHETIC_Y_MAX, SYNTHETIC_Y_MIN};
use crate::plot_framework::{draw_single_plot, index_range, PlotConfig, PlotSeries, SeriesStyle};
use crate::signal::sequence::Sequence;

pub const REGULAR_PLOT_TITLE: &str = "Regular Delivery Sequence";

/// Step plot (with markers) of the on-time schedule x[n].
pub fn regular_plot_config(x: &Sequence) -> PlotConfig {
    PlotConfig {
        title: REGULAR_PLOT_TITLE.to_string(),
        x_range: index_range(x.len()),
        y_range: SYNTHETIC_Y_MIN..SYNTHETIC_Y_MAX,
        series: vec![PlotSeries {
            data: x.points(),
            label: "x[n] (Original)".to_string(),
            color: *COLOR_ORIGINAL,
            stroke_width: LINE_WIDTH_PLOT,
            style: SeriesStyle::Step,
            markers: true,
        }],
        x_label: "n (time steps)".to_string(),
        y_label: "Deliveries".to_string(),
        annotation: Some(Z_TRANSFORM_TEXT.to_string()),
    }
}

/// Generates the regular delivery schedule plot.
pub fn plot_regular(x: &Sequence, output_path: &Path, root_name: &str) -> Result<(), Box<dyn Error>> {
    draw_single_plot(
        output_path,
        root_name,
        "Regular Delivery",
        Some(regular_plot_config(x)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::builder::{build_sequence, Pattern};

    #[test]
    fn test_regular_plot_config() {
        let (_, x) = build_sequence(12, Pattern::Pulse);
        let config = regular_plot_config(&x);
        assert_eq!(config.series.len(), 1);
        assert_eq!(config.series[0].data.len(), 12);
        assert_eq!(config.series[0].data[3], (3.0, 1.0));
        assert_eq!(config.series[0].style, SeriesStyle::Step);
        assert_eq!(config.y_range, -0.2..1.2);
        assert!(config.has_data() && config.has_valid_ranges());
        assert_eq!(config.annotation.as_deref(), Some(Z_TRANSFORM_TEXT));
    }
}
