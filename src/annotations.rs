// src/annotations.rs

// Page text and symbolic Z-transform labels. The formulas are display strings only;
// nothing here evaluates a transform.

use crate::signal::builder::Pattern;
use crate::signal::sequence::Sequence;

pub const APP_TITLE: &str = "Delivery Scheduling Analysis Using Z-Transforms";

pub const APP_SUBTITLE: &str =
    "A tool to analyze regular and delayed delivery schedules using discrete-time models.";

pub const INTRODUCTION: &str = "This tool models delivery schedules as discrete-time sequences and shows how delays affect them.\n\
You can view a regular (on-time) schedule and a delayed schedule, and visualize the effect of delay.";

pub const FOOTER: &str =
    "Developed for Applied Mathematics Project: Delivery Scheduling Analysis Using Z-Transforms";

pub const REGULAR_INTERPRETATION: &str =
    "Interpretation: This shows the planned (on-time) delivery schedule.";

pub const DELAYED_INTERPRETATION: &str =
    "Interpretation: Delay shifts the schedule in time by k steps without changing its shape.";

pub const REAL_DATA_INTERPRETATION: &str =
    "This shows how real delivery-related data behaves under delay.";

/// X(z) = sum_{n=0}^{inf} x[n] z^{-n}, as LaTeX.
pub const Z_TRANSFORM_LATEX: &str = r"X(z) = \sum_{n=0}^{\infty} x[n] z^{-n}";

/// Y(z) = z^{-k} X(z), as LaTeX.
pub const DELAY_PROPERTY_LATEX: &str = r"Y(z) = z^{-k} X(z)";

/// Plain-text form of the Z-transform definition, drawn under plots.
pub const Z_TRANSFORM_TEXT: &str = "X(z) = Σ_{n=0}^{∞} x[n] z^(-n)";

/// Plain-text delay property. With `Some(k)` the concrete delay is substituted.
pub fn delay_property_text(k: Option<usize>) -> String {
    match k {
        Some(k) => format!("Y(z) = z^(-{k}) X(z)"),
        None => "Y(z) = z^(-k) X(z)".to_string(),
    }
}

pub fn pattern_description(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Constant => "Discrete-time sequence: x[n] = 1 (constant delivery each time step)",
        Pattern::Pulse => {
            "Discrete-time sequence: Pulse/Periodic (delivery occurs at some time steps)"
        }
    }
}

pub fn delay_description(k: usize) -> String {
    format!("Delayed sequence: y[n] = x[n - {k}]")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.4}")
    }
}

/// One row per time step: `n`, `x[n]`, and `y[n]` when a delayed sequence is given.
pub fn sequence_table(x: &Sequence, y: Option<&Sequence>) -> String {
    let mut lines = Vec::with_capacity(x.len() + 1);
    match y {
        Some(y) => {
            lines.push(format!("{:>5}  {:>12}  {:>12}", "n", "x[n]", "y[n]"));
            for (n, (xv, yv)) in x.values().iter().zip(y.values().iter()).enumerate() {
                lines.push(format!(
                    "{:>5}  {:>12}  {:>12}",
                    n,
                    format_value(*xv),
                    format_value(*yv)
                ));
            }
        }
        None => {
            lines.push(format!("{:>5}  {:>12}", "n", "x[n]"));
            for (n, xv) in x.values().iter().enumerate() {
                lines.push(format!("{:>5}  {:>12}", n, format_value(*xv)));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::builder::build_sequence;

    #[test]
    fn test_delay_labels() {
        assert_eq!(delay_description(3), "Delayed sequence: y[n] = x[n - 3]");
        assert_eq!(delay_property_text(Some(4)), "Y(z) = z^(-4) X(z)");
        assert_eq!(delay_property_text(None), "Y(z) = z^(-k) X(z)");
    }

    #[test]
    fn test_pattern_descriptions() {
        assert!(pattern_description(Pattern::Constant).contains("x[n] = 1"));
        assert!(pattern_description(Pattern::Pulse).contains("Pulse/Periodic"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(2.5), "2.5000");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_sequence_table_with_delay() {
        let (_, x) = build_sequence(3, Pattern::Constant);
        let y = x.delayed(1);
        let table = sequence_table(&x, Some(&y));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "    0             1             0");
        assert_eq!(lines[3], "    2             1             1");
    }

    #[test]
    fn test_sequence_table_single() {
        let (_, x) = build_sequence(2, Pattern::Pulse);
        let table = sequence_table(&x, None);
        assert_eq!(table.lines().count(), 3);
        assert!(table.lines().nth(2).unwrap().ends_with('0'));
    }
}
