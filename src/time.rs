//! Wall-clock formatting for file names and line prefixes
//!
//! Dates name the log files, times prefix each written message.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Pattern used for log file names (e.g. `2026-01-21`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pattern used to prefix every written message (24-hour, e.g. `14:30:45`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Source of the current instant, formatted the way the logger needs it
///
/// Implementors only supply `now()`; the formatted queries are derived from it
/// with fixed, locale-independent patterns.
pub trait TimeProvider {
    /// The current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Today's date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current date formatted as `YYYY-MM-DD`
    fn current_date(&self) -> String {
        self.now().format(DATE_FORMAT).to_string()
    }

    /// Current time formatted as `HH:MM:SS`
    fn current_time(&self) -> String {
        self.now().format(TIME_FORMAT).to_string()
    }
}

/// Reads the system clock in the local timezone on every call
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTime;

impl TimeProvider for LocalTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTime(pub NaiveDateTime);

impl FixedTime {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl TimeProvider for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn is_time_string(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 8
            && bytes[2] == b':'
            && bytes[5] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    }

    #[test]
    fn test_fixed_time_zero_padded() {
        let time = FixedTime::new(at(2026, 1, 5, 7, 3, 9));
        assert_eq!(time.current_date(), "2026-01-05");
        assert_eq!(time.current_time(), "07:03:09");
    }

    #[test]
    fn test_fixed_time_uses_24_hour_clock() {
        let time = FixedTime::new(at(2026, 12, 31, 23, 59, 58));
        assert_eq!(time.current_date(), "2026-12-31");
        assert_eq!(time.current_time(), "23:59:58");
    }

    #[test]
    fn test_today_matches_current_date() {
        let time = FixedTime::new(at(2026, 3, 14, 1, 2, 3));
        assert_eq!(time.today(), NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }

    #[test]
    fn test_local_time_formats() {
        let time = LocalTime;
        let date = time.current_date();
        assert!(NaiveDate::parse_from_str(&date, DATE_FORMAT).is_ok());
        assert_eq!(date.len(), 10);
        assert!(is_time_string(&time.current_time()));
    }
}
