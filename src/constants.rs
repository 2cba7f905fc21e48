// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE_700, GREY_600, ORANGE_800, RED};
use plotters::style::RGBColor;

// Plot dimensions (wide and short, one chart per image).
pub const PLOT_WIDTH: u32 = 1500;
pub const PLOT_HEIGHT: u32 = 600;

// Synthetic schedules hold values in {0, 1}; keep a fixed window around them.
pub const SYNTHETIC_Y_MIN: f64 = -0.2;
pub const SYNTHETIC_Y_MAX: f64 = 1.2;

// A delivery is scheduled every PULSE_PERIOD steps in the pulse pattern (1,0,0,1,0,0,...).
pub const PULSE_PERIOD: usize = 3;

// Uploaded columns are cut to this many entries before delaying/plotting.
pub const MAX_EXTERNAL_SEQUENCE_LEN: usize = 200;

// Number of dataset rows shown in the preview.
pub const PREVIEW_ROWS: usize = 5;

// Bounded controls: (min, max, default)
pub const STEPS_MIN: usize = 10;
pub const STEPS_MAX: usize = 100;
pub const STEPS_DEFAULT: usize = 30;

pub const DELAY_MIN: usize = 0;
pub const DELAY_MAX: usize = 20;
pub const DELAY_DEFAULT: usize = 3;

pub const DATA_DELAY_MIN: usize = 0;
pub const DATA_DELAY_MAX: usize = 50;
pub const DATA_DELAY_DEFAULT: usize = 5;

// --- Plot Color Assignments ---
pub const COLOR_ORIGINAL: &RGBColor = &BLUE_700;
pub const COLOR_DELAYED: &RGBColor = &ORANGE_800;
pub const COLOR_ANNOTATION: &RGBColor = &GREY_600;
pub const COLOR_UNAVAILABLE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius (px) for the stem/scatter points on synthetic plots.
pub const MARKER_RADIUS: i32 = 4;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_ANNOTATION: i32 = 18;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Mesh label counts
pub const X_LABEL_COUNT: usize = 20;
pub const Y_LABEL_COUNT: usize = 8;

// src/constants.rs
