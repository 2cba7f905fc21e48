// src/signal/builder.rs

use clap::ValueEnum;
use ndarray::Array1;
use std::fmt;

use crate::constants::PULSE_PERIOD;
use crate::signal::sequence::Sequence;
use crate::types::BuildResult;

/// Generation rule for a synthetic delivery schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pattern {
    /// x[n] = 1 at every step
    #[default]
    Constant,
    /// x[n] = 1 every third step (1,0,0,1,0,0,...)
    Pulse,
}

impl Pattern {
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::Constant => "Constant (x[n]=1)",
            Pattern::Pulse => "Pulse / Periodic (1,0,0,...)",
        }
    }

    /// Value of the pattern at time step `n`.
    pub fn value_at(&self, n: usize) -> f64 {
        match self {
            Pattern::Constant => 1.0,
            Pattern::Pulse if n % PULSE_PERIOD == 0 => 1.0,
            Pattern::Pulse => 0.0,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds the time indices 0..N-1 and the sequence x of length N for `pattern`.
///
/// `steps == 0` yields empty arrays.
pub fn build_sequence(steps: usize, pattern: Pattern) -> BuildResult {
    let indices = Array1::from_iter(0..steps);
    let x = indices.mapv(|n| pattern.value_at(n));
    (indices, Sequence::synthetic(pattern, x))
}
