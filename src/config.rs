// src/config.rs

// Settings that used to live in interactive controls are carried as plain values and
// handed to the computations on every call.

use crate::constants::{
    DATA_DELAY_DEFAULT, DATA_DELAY_MAX, DATA_DELAY_MIN, DELAY_DEFAULT, DELAY_MAX, DELAY_MIN,
    MAX_EXTERNAL_SEQUENCE_LEN, STEPS_DEFAULT, STEPS_MAX, STEPS_MIN,
};
use crate::error::ConfigError;
use crate::signal::builder::Pattern;

/// Inclusive range and starting value of a bounded integer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBounds {
    pub name: &'static str,
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl ControlBounds {
    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn check(&self, value: usize) -> Result<usize, ConfigError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ConfigError::OutOfRange {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const STEPS_BOUNDS: ControlBounds = ControlBounds {
    name: "number of time steps (N)",
    min: STEPS_MIN,
    max: STEPS_MAX,
    default: STEPS_DEFAULT,
};

pub const DELAY_BOUNDS: ControlBounds = ControlBounds {
    name: "delay k",
    min: DELAY_MIN,
    max: DELAY_MAX,
    default: DELAY_DEFAULT,
};

pub const DATA_DELAY_BOUNDS: ControlBounds = ControlBounds {
    name: "delay k",
    min: DATA_DELAY_MIN,
    max: DATA_DELAY_MAX,
    default: DATA_DELAY_DEFAULT,
};

/// Top-level sections of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Introduction,
    RegularDelivery,
    DelayedDelivery,
    RealData,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Introduction,
        Section::RegularDelivery,
        Section::DelayedDelivery,
        Section::RealData,
    ];

    pub fn menu_label(&self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::RegularDelivery => "Regular Delivery Model",
            Section::DelayedDelivery => "Delayed Delivery Model",
            Section::RealData => "Real Data Demo",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::RegularDelivery => "Model 1: Regular (Periodic) Delivery Scheduling",
            Section::DelayedDelivery => "Model 2: Delayed Delivery Scheduling",
            Section::RealData => "Real Data Demonstration",
        }
    }

    /// File-name suffix for the rendered plot.
    pub fn file_tag(&self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::RegularDelivery => "Regular",
            Section::DelayedDelivery => "Delayed",
            Section::RealData => "RealData",
        }
    }
}

/// Settings for the synthetic schedule sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub steps: usize,
    pub delay: usize,
    pub pattern: Pattern,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            steps: STEPS_BOUNDS.default,
            delay: DELAY_BOUNDS.default,
            pattern: Pattern::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        STEPS_BOUNDS.check(self.steps)?;
        DELAY_BOUNDS.check(self.delay)?;
        Ok(())
    }
}

/// Settings for the uploaded-dataset section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealDataConfig {
    /// Column to use; the first numeric column when `None`.
    pub column: Option<String>,
    pub delay: usize,
    pub max_len: usize,
}

impl Default for RealDataConfig {
    fn default() -> Self {
        Self {
            column: None,
            delay: DATA_DELAY_BOUNDS.default,
            max_len: MAX_EXTERNAL_SEQUENCE_LEN,
        }
    }
}

impl RealDataConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        DATA_DELAY_BOUNDS.check(self.delay)?;
        if self.max_len == 0 {
            return Err(ConfigError::ZeroLengthCap);
        }
        Ok(())
    }
}
