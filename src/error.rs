// src/error.rs

use thiserror::Error;

/// Failures while reading a dataset or choosing a column from it.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset parsed, but none of its columns hold numbers.
    #[error("No numeric columns found in dataset.")]
    NoNumericColumns,

    #[error("column '{name}' is not a numeric column (available: {available})")]
    UnknownColumn { name: String, available: String },
}

/// A configuration value outside the range its control allows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("maximum sequence length must be at least 1")]
    ZeroLengthCap,
}
