use chrono::TimeDelta;

/// Formats seconds with tenths, switching to minutes at one minute: `47.5s`, `1m:05.0s`.
pub fn format_duration(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    if tenths >= 600 {
        let minutes = tenths / 600;
        let remaining = tenths % 600;
        format!("{}m:{:02}.{}s", minutes, remaining / 10, remaining % 10)
    } else {
        format!("{}.{}s", tenths / 10, tenths % 10)
    }
}

/// Interval cell text; intervals that do not exist render as a dash.
pub fn format_interval(seconds: Option<f64>) -> String {
    seconds.map(format_duration).unwrap_or_else(|| "-".to_string())
}

/// Seconds as a float, keeping sub-millisecond precision.
pub fn delta_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + delta.subsec_nanos() as f64 / 1_000_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_and_minutes() {
        assert_eq!(format_duration(47.5), "47.5s");
        assert_eq!(format_duration(65.0), "1m:05.0s");
        assert_eq!(format_duration(119.96), "2m:00.0s");
        assert_eq!(format_interval(None), "-");
        assert_eq!(delta_seconds(TimeDelta::milliseconds(47_500)), 47.5);
    }

    #[test]
    fn delta_seconds_keeps_sub_millisecond_part() {
        let third = TimeDelta::milliseconds(3_001) / 3;

        assert!((delta_seconds(third) - 1.000_333_333).abs() < 1e-9);
        assert!((delta_seconds(-TimeDelta::microseconds(1_500)) + 0.0015).abs() < 1e-12);
    }
}
