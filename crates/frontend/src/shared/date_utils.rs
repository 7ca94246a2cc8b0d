//! Utilities for reading server timestamps
//!
//! The server sends timestamps as display strings. Which format depends on
//! the server version, so parsing tries each known one in turn.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMATS: [&str; 4] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a server timestamp into a naive date-time.
///
/// Example: "15/03/2024 14:02:26" or "2024-03-15T14:02:26.123Z"
/// Returns `None` when no known format matches.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    DISPLAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_display_format() {
        assert_eq!(
            parse_timestamp("15/03/2024 14:02:26"),
            Some(at(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("15/03/2024 14:02"),
            Some(at(2024, 3, 15, 14, 2, 0))
        );
    }

    #[test]
    fn test_parse_iso_formats() {
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26Z"),
            Some(at(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("2024-03-15 14:02:26"),
            Some(at(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26.500").map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_timestamp("invalid"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
