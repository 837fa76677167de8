//! Formatting for durations and timestamps shown on the dashboard
//!
//! Provides consistent display formatting across the application

use chrono::NaiveDateTime;

/// Compact duration for stat cards and table rows.
/// Example: 9930 seconds -> "2h 45m", 132 -> "2m", 45 -> "45s"
pub fn format_duration(total_seconds: i64) -> String {
    if total_seconds <= 0 {
        return "0s".to_string();
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}

/// Format a timestamp to DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26 -> "15.03.2024 14:02"
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

/// Format only the clock part, for rows where the day is obvious
pub fn format_time(datetime: &NaiveDateTime) -> String {
    datetime.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(9930), "2h 45m");
        assert_eq!(format_duration(3600), "1h 0m");
        assert_eq!(format_duration(132), "2m");
        assert_eq!(format_duration(45), "45s");
    }

    #[test]
    fn test_format_duration_degenerate_values() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(-5), "0s");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&sample_datetime()), "15.03.2024 14:02");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&sample_datetime()), "14:02");
    }
}
