// src/plot_functions/mod.rs

pub mod plot_delayed;
pub mod plot_real_data;
pub mod plot_regular;

// src/plot_functions/mod.rs
