/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        // Not RFC3339 — show the raw value rather than hiding it
        Err(_) => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%d.%m.%Y").to_string();
    }
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a typed timestamp for table cells
pub fn format_datetime_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_format_datetime_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime_utc(&dt), "15.03.2024 14:02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
