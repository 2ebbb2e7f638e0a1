//! Record timestamps.

use chrono::{Local, NaiveDateTime};

/// Format used for `PageRecord::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render a wall time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current time of `clock`, formatted for a page record.
pub fn timestamp(clock: &impl Clock) -> String {
    format_timestamp(clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(
            timestamp(&FixedClock(at(2024, 3, 7, 9, 5, 2))),
            "2024-03-07 09:05:02"
        );
    }

    #[test]
    fn test_two_digit_fields() {
        assert_eq!(
            format_timestamp(at(2023, 12, 31, 23, 59, 59)),
            "2023-12-31 23:59:59"
        );
    }

    #[test]
    fn test_system_clock_shape() {
        let ts = timestamp(&SystemClock);
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
