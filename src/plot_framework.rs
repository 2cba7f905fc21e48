// src/plot_framework.rs

use log::{info, warn};
use ndarray::{Array1, ArrayView1};
use ndarray_stats::QuantileExt;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_ANNOTATION, COLOR_UNAVAILABLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, MARKER_RADIUS,
    PLOT_HEIGHT, PLOT_WIDTH, X_LABEL_COUNT, Y_LABEL_COUNT,
};
use crate::font_config::{
    FONT_TUPLE_ANNOTATION, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND,
    FONT_TUPLE_MAIN_TITLE, FONT_TUPLE_MESSAGE,
};
use crate::types::SeriesPoints;

// Vertical space reserved under the chart for the formula label.
const FOOTER_HEIGHT_PX: i32 = 50;
// Space above the chart for the page title.
const TITLE_MARGIN_PX: i32 = 45;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
/// Bounds saturate at `f64::MIN`/`f64::MAX` instead of overflowing.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    // Half the span, so values near f64::MAX do not overflow.
    let half_range = max / 2.0 - min / 2.0;
    let padding = if half_range < 5e-7 { 0.5 } else { half_range * 0.3 };
    (
        (min - padding).max(f64::MIN),
        (max + padding).min(f64::MAX),
    )
}

/// Min and max over the finite values of all series, or `None` if there are none.
pub fn value_bounds(series: &[ArrayView1<f64>]) -> Option<(f64, f64)> {
    let finite: Array1<f64> = series
        .iter()
        .flat_map(|values| values.iter().copied())
        .filter(|v| v.is_finite())
        .collect();
    let min = *finite.min().ok()?;
    let max = *finite.max().ok()?;
    Some((min, max))
}

/// X range covering sample indices 0..len-1 with half a step of room on each side.
pub fn index_range(len: usize) -> Range<f64> {
    -0.5..(len as f64 - 0.5)
}

/// Y-axis tick text: k/M notation for large magnitudes, one decimal for small fractional values.
pub fn format_y_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Vertices of a step curve whose level changes halfway between samples.
///
/// `[(x0,y0), (x1,y1), ...]` becomes `[(x0,y0), (m01,y0), (m01,y1), (m12,y1), ..., (xn,yn)]`.
pub fn step_mid_points(points: &[(f64, f64)]) -> SeriesPoints {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(first);
    for w in points.windows(2) {
        let (x0, y0) = w[0];
        let (x1, y1) = w[1];
        let mid = (x0 + x1) / 2.0;
        out.push((mid, y0));
        out.push((mid, y1));
    }
    if let Some(&last) = points.last() {
        if points.len() > 1 {
            out.push(last);
        }
    }
    out
}

/// Splits a polyline at non-finite points so gaps in the data stay gaps on the plot.
pub fn finite_runs(points: &[(f64, f64)]) -> Vec<SeriesPoints> {
    points
        .split(|(x, y)| !x.is_finite() || !y.is_finite())
        .filter(|run| !run.is_empty())
        .map(|run| run.to_vec())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Piecewise-constant, level changes at the midpoint between samples
    Step,
    /// Straight segments between samples
    Line,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: SeriesPoints,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub style: SeriesStyle,
    /// Draw a dot at every sample
    pub markers: bool,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    /// Text drawn below the chart (the formula label).
    pub annotation: Option<String>,
}

impl PlotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    /// Both ranges are finite, non-empty, and their spans fit in an `f64`.
    pub fn has_valid_ranges(&self) -> bool {
        [&self.x_range, &self.y_range].iter().all(|r| {
            r.start.is_finite()
                && r.end.is_finite()
                && r.end > r.start
                && (r.end - r.start).is_finite()
        })
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let mut y = height as i32 / 2 - (lines.len() as i32 * estimated_line_height) / 2;
    for line in lines {
        let text_style = FONT_TUPLE_MESSAGE.into_font().color(COLOR_UNAVAILABLE);
        area.draw(&Text::new(line.to_string(), (center_x, y), text_style))?;
        y += estimated_line_height;
    }
    Ok(())
}

/// Draws one chart from a PlotConfig: mesh, series (step or line, optional markers), legend.
fn draw_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format_y_label(*y))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let vertices = match s.style {
            SeriesStyle::Step => step_mid_points(&s.data),
            SeriesStyle::Line => s.data.clone(),
        };

        // Only the first run carries the legend entry.
        for (run_index, run) in finite_runs(&vertices).into_iter().enumerate() {
            let drawn = chart.draw_series(LineSeries::new(
                run,
                color.stroke_width(s.stroke_width),
            ))?;
            if run_index == 0 && !s.label.is_empty() {
                drawn.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
                legend_series_count += 1;
            }
        }

        if s.markers {
            chart.draw_series(
                s.data
                    .iter()
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .map(|&(x, y)| Circle::new((x, y), MARKER_RADIUS, color.filled())),
            )?;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Renders a single-chart PNG with a page title and an optional annotation line.
///
/// `None`, an empty config, or degenerate ranges produce a placeholder message instead of a chart.
pub fn draw_single_plot(
    output_path: &Path,
    main_title: &str,
    plot_type_name: &str,
    plot_config: Option<PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        main_title.to_string(),
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;

    let margined_root_area = root_area.margin(TITLE_MARGIN_PX, 5, 5, 5);
    let (_, margined_height) = margined_root_area.dim_in_pixel();
    let (chart_area, footer_area) =
        margined_root_area.split_vertically(margined_height as i32 - FOOTER_HEIGHT_PX);

    let mut plotted = false;
    match plot_config {
        Some(config) if config.has_data() && config.has_valid_ranges() => {
            draw_chart(&chart_area, &config)?;
            if let Some(annotation) = &config.annotation {
                footer_area.draw(&Text::new(
                    annotation.clone(),
                    (20, 10),
                    FONT_TUPLE_ANNOTATION.into_font().color(COLOR_ANNOTATION),
                ))?;
            }
            plotted = true;
        }
        Some(config) => {
            let reason = if !config.has_data() {
                "No data points"
            } else {
                "Invalid ranges"
            };
            draw_unavailable_message(&chart_area, plot_type_name, reason)?;
        }
        None => {
            draw_unavailable_message(&chart_area, plot_type_name, "No sequence to plot")?;
        }
    }

    root_area.present()?;
    if plotted {
        info!("Plot saved as '{}'.", output_path.display());
    } else {
        warn!(
            "Plot '{}' saved with a placeholder message only: no data available.",
            output_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::csv_table::NumericColumn;
    use crate::plot_functions::plot_real_data::real_data_plot_config;
    use crate::plot_functions::plot_regular::regular_plot_config;
    use crate::signal::{build_sequence, Pattern, Sequence};
    use ndarray::array;

    #[test]
    fn test_calculate_range_pads() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo - -1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_flat_and_swapped() {
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0 && hi > 10.0);
    }

    #[test]
    fn test_calculate_range_near_f64_limits() {
        let (lo, hi) = calculate_range(-1e308, 1e308);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < -1e308 && hi > 1e308);
        assert_eq!(calculate_range(-f64::MAX, f64::MAX), (f64::MIN, f64::MAX));

        let (lo, hi) = calculate_range(-1e200, 1e200);
        assert!((lo - -1.3e200).abs() < 1e188);
        assert!((hi - 1.3e200).abs() < 1e188);
    }

    #[test]
    fn test_value_bounds_skips_nan() {
        let a = array![5.0, f64::NAN, 3.0];
        let b = array![0.0, 9.0, f64::INFINITY];
        assert_eq!(value_bounds(&[a.view(), b.view()]), Some((0.0, 9.0)));
    }

    #[test]
    fn test_value_bounds_empty() {
        let a: Array1<f64> = array![];
        let b = array![f64::NAN];
        assert_eq!(value_bounds(&[a.view(), b.view()]), None);
    }

    fn config_with_y_range(y_range: Range<f64>) -> PlotConfig {
        PlotConfig {
            title: "t".to_string(),
            x_range: 0.0..1.0,
            y_range,
            series: Vec::new(),
            x_label: String::new(),
            y_label: String::new(),
            annotation: None,
        }
    }

    #[test]
    fn test_has_valid_ranges() {
        assert!(config_with_y_range(-1.0..1.0).has_valid_ranges());
        assert!(!config_with_y_range(1.0..1.0).has_valid_ranges());
        assert!(!config_with_y_range(f64::NEG_INFINITY..f64::INFINITY).has_valid_ranges());
        assert!(!config_with_y_range(0.0..f64::NAN).has_valid_ranges());
        // Finite endpoints whose span overflows.
        assert!(!config_with_y_range(f64::MIN..f64::MAX).has_valid_ranges());
    }

    #[test]
    fn test_index_range() {
        assert_eq!(index_range(10), -0.5..9.5);
        let empty = index_range(0);
        assert!(empty.end <= empty.start);
    }

    #[test]
    fn test_step_mid_points() {
        let pts = [(0.0, 1.0), (1.0, 0.0), (2.0, 1.0)];
        assert_eq!(
            step_mid_points(&pts),
            vec![
                (0.0, 1.0),
                (0.5, 1.0),
                (0.5, 0.0),
                (1.5, 0.0),
                (1.5, 1.0),
                (2.0, 1.0)
            ]
        );
        assert_eq!(step_mid_points(&[(3.0, 4.0)]), vec![(3.0, 4.0)]);
        assert!(step_mid_points(&[]).is_empty());
    }

    #[test]
    fn test_finite_runs_split_on_nan() {
        let pts = [(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0), (3.0, 4.0)];
        let runs = finite_runs(&pts);
        assert_eq!(runs, vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]);
    }

    fn render(name: &str, plot_config: Option<PlotConfig>) -> bool {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        draw_single_plot(&path, "Test Page", "Test", plot_config).unwrap();
        path.is_file()
    }

    #[test]
    fn test_draw_single_plot_chart() {
        let (_, x) = build_sequence(12, Pattern::Pulse);
        assert!(render("regular.png", Some(regular_plot_config(&x))));
    }

    #[test]
    fn test_draw_single_plot_placeholders() {
        assert!(render("none.png", None));

        let mut empty = config_with_y_range(-1.0..1.0);
        empty.series.push(PlotSeries {
            data: Vec::new(),
            label: "empty".to_string(),
            color: BLACK,
            stroke_width: 1,
            style: SeriesStyle::Line,
            markers: false,
        });
        assert!(!empty.has_data());
        assert!(render("empty.png", Some(empty)));
    }

    #[test]
    fn test_draw_single_plot_extreme_values() {
        let column = NumericColumn::new("a", vec![1e308, -1e308]);
        let x = Sequence::from_source(&column, 200);
        let y = x.delayed(0);
        let config = real_data_plot_config(&x, &y).unwrap();
        assert!(config.y_range.start.is_finite() && config.y_range.end.is_finite());
        assert!(!config.has_valid_ranges());
        assert!(render("extreme.png", Some(config)));
    }
}
