// src/lib.rs - Library interface for internal module access

pub mod annotations;
pub mod config;
pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod signal;
pub mod types;

pub use signal::{build_sequence, delay, delay_sequence, NumericSource, Pattern, Sequence};
