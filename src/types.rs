// src/types.rs
// Type aliases to reduce complexity warnings

use ndarray::Array1;

use crate::signal::sequence::Sequence;

/// Time indices 0..N-1 and the matching sequence, as returned by `build_sequence`.
pub type BuildResult = (Array1<usize>, Sequence);

// Plot data types
pub type SeriesPoints = Vec<(f64, f64)>;

/// One preview row of raw cell text.
pub type PreviewRow = Vec<String>;
