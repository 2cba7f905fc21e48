// src/signal/mod.rs

pub mod builder;
pub mod delay;
pub mod sequence;

pub use builder::{build_sequence, Pattern};
pub use delay::{delay, delay_sequence};
pub use sequence::{NumericSource, Provenance, Sequence};

// src/signal/mod.rs
