// tests/y_axis_formatting_test.rs

use delivery_delay_render::plot_framework::format_y_label;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_y_axis_formatting() {
        // Synthetic schedules are plotted on -0.2..1.2
        assert_eq!(format_y_label(-0.2), "-0.2");
        assert_eq!(format_y_label(0.0), "0");
        assert_eq!(format_y_label(0.4), "0.4");
        assert_eq!(format_y_label(0.8), "0.8");
        assert_eq!(format_y_label(1.0), "1");
        assert_eq!(format_y_label(1.2), "1.2");
    }

    #[test]
    fn test_dataset_y_axis_formatting() {
        assert_eq!(format_y_label(10.0), "10");
        assert_eq!(format_y_label(100.0), "100");
        assert_eq!(format_y_label(5.7), "5.7");

        // Large values use k notation
        assert_eq!(format_y_label(1000.0), "1k");
        assert_eq!(format_y_label(5000.0), "5k");
        assert_eq!(format_y_label(12500.0), "12k"); // 12.5 formatted with {:.0}

        // Very large values use M notation
        assert_eq!(format_y_label(1_000_000.0), "1.0M");
        assert_eq!(format_y_label(-2_500_000.0), "-2.5M");
    }
}
