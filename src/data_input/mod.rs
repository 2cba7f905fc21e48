// src/data_input/mod.rs

pub mod csv_table;

pub use csv_table::{select_numeric_column, CsvTable, NumericColumn};

// src/data_input/mod.rs
