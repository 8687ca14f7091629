//! Time formatting utilities

/// Format a duration in seconds as an `HH:MM:SS.ss` string.
///
/// Hours and minutes are zero-padded to two digits and seconds carry exactly
/// two decimal places, so `3661.5` becomes `"01:01:01.50"`. Durations past
/// 100 hours simply widen the hour field.
pub fn format_duration(seconds: f64) -> String {
    let (minutes, secs) = (seconds / 60.0, seconds % 60.0);
    let (hours, minutes) = (minutes / 60.0, minutes % 60.0);

    format!("{:02}:{:02}:{:05.2}", hours as u64, minutes as u64, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_basic() {
        assert_eq!(format_duration(3661.5), "01:01:01.50");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0.0), "00:00:00.00");
    }

    #[test]
    fn test_format_duration_sub_minute() {
        assert_eq!(format_duration(5.25), "00:00:05.25");
    }

    #[test]
    fn test_format_duration_rounds_fractional_seconds() {
        assert_eq!(format_duration(90.456), "00:01:30.46");
    }

    #[test]
    fn test_format_duration_long_input() {
        // 100 hours and change; the hour field widens instead of wrapping
        assert_eq!(format_duration(360_000.0 + 61.0), "100:01:01.00");
    }
}
