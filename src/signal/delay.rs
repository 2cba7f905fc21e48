// src/signal/delay.rs

use log::debug;
use ndarray::{s, Array1, ArrayView1};

use crate::signal::sequence::Sequence;

/// Discrete delay by `k` steps over a finite, causal window: y[n] = x[n-k] for n >= k, 0 before.
///
/// The output always has the length of `x`. `k == 0` copies `x`; `k >= x.len()` gives all zeros.
/// Values are moved as-is, so NaN entries from missing data stay NaN after the shift.
pub fn delay(x: ArrayView1<f64>, k: usize) -> Array1<f64> {
    let n = x.len();
    let mut y = Array1::<f64>::zeros(n);
    if k < n {
        y.slice_mut(s![k..]).assign(&x.slice(s![..n - k]));
    } else {
        debug!("Delay {} >= sequence length {}: result is all zeros", k, n);
    }
    y
}

/// Sequence-level form of [`delay`]; keeps provenance and records the shift.
pub fn delay_sequence(x: &Sequence, k: usize) -> Sequence {
    x.delayed(k)
}
