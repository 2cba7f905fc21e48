// src/signal/sequence.rs

use ndarray::{Array1, ArrayView1};

use crate::signal::builder::Pattern;
use crate::signal::delay::delay;

/// Anything that can hand out a named, finite run of numbers.
///
/// Decouples the delay computation from the table type the numbers came from.
pub trait NumericSource {
    fn name(&self) -> &str;
    fn values(&self) -> &[f64];

    fn len(&self) -> usize {
        self.values().len()
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// Where a sequence's values originally came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    Synthetic(Pattern),
    External { column: String },
}

/// An immutable discrete-time sequence x[n], n = 0..N-1.
///
/// `delay` is the total shift applied to the source values (0 for an original sequence).
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: Array1<f64>,
    provenance: Provenance,
    delay: usize,
}

impl Sequence {
    pub fn synthetic(pattern: Pattern, values: Array1<f64>) -> Self {
        Self {
            values,
            provenance: Provenance::Synthetic(pattern),
            delay: 0,
        }
    }

    /// Takes at most `max_len` leading values from `source`.
    pub fn from_source<S: NumericSource + ?Sized>(source: &S, max_len: usize) -> Self {
        let n = source.len().min(max_len);
        Self {
            values: Array1::from(source.values()[..n].to_vec()),
            provenance: Provenance::External {
                column: source.name().to_string(),
            },
            delay: 0,
        }
    }

    /// Display name: the column name for external data, `x[n]`/`y[n]` for synthetic data.
    pub fn name(&self) -> String {
        match (&self.provenance, self.delay) {
            (Provenance::External { column }, 0) => column.clone(),
            (Provenance::External { column }, k) => format!("{column} (delayed by {k})"),
            (Provenance::Synthetic(_), 0) => "x[n]".to_string(),
            (Provenance::Synthetic(_), _) => "y[n]".to_string(),
        }
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Time indices 0..N-1.
    pub fn indices(&self) -> Array1<usize> {
        Array1::from_iter(0..self.len())
    }

    /// `(n, x[n])` pairs, ready for a plot series.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(n, &v)| (n as f64, v))
            .collect()
    }

    /// Returns y[n] = x[n-k], zero-filled for n < k. Delays accumulate across calls.
    pub fn delayed(&self, k: usize) -> Sequence {
        Sequence {
            values: delay(self.values.view(), k),
            provenance: self.provenance.clone(),
            delay: self.delay.saturating_add(k),
        }
    }
}

impl From<&Sequence> for Vec<f64> {
    fn from(seq: &Sequence) -> Self {
        seq.values.to_vec()
    }
}
