//! Time utilities: time-of-day labels for tasks.

use chrono::NaiveTime;

use crate::error::{PawPalError, Result};

/// Parse a time of day like "07:30" (24-hour clock).
///
/// Surrounding whitespace is ignored. Seconds are not accepted.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| PawPalError::InvalidTimeOfDay(trimmed.to_string()))
}

/// Helper: format a time of day as "HH:MM".
pub fn format_time_of_day(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_morning_time() {
        let t = parse_time_of_day(" 07:05 ").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        assert_eq!(format_time_of_day(t), "07:05");
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        assert_eq!(
            parse_time_of_day("25:00"),
            Err(PawPalError::InvalidTimeOfDay("25:00".to_string()))
        );
        assert!(parse_time_of_day("noon").is_err());
        assert!(parse_time_of_day("").is_err());
    }
}
