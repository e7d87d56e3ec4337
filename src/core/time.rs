//! Calendar time handed to the ephemeris

use chrono::{Datelike, TimeDelta, Timelike, Utc};

use crate::core::error::Error;
use crate::core::types::{Result, Timestamp};

/// Broken-down civil time: the calendar fields an ephemeris consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilTime {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    /// Calendar fields of `timestamp` with `hour_offset` hours subtracted.
    ///
    /// The shift carries into the date, so 01:00 with an offset of 3
    /// becomes 22:00 of the previous day.
    pub fn shifted(timestamp: Timestamp, hour_offset: i32) -> Self {
        let shifted = timestamp - TimeDelta::hours(i64::from(hour_offset));
        Self {
            year: shifted.year(),
            month: shifted.month(),
            day: shifted.day(),
            hour: shifted.hour(),
            minute: shifted.minute(),
            second: shifted.second(),
        }
    }
}

/// Current wall-clock instant.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 instant such as `2024-06-21T12:00:00Z`.
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    chrono::DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Time(format!("invalid timestamp '{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_shift_within_day() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 21, 12, 30, 15).unwrap();
        let civil = CivilTime::shifted(ts, 3);
        assert_eq!(
            civil,
            CivilTime { year: 2024, month: 6, day: 21, hour: 9, minute: 30, second: 15 }
        );
    }

    #[test]
    fn test_shift_carries_into_previous_year() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        let civil = CivilTime::shifted(ts, 3);
        assert_eq!((civil.year, civil.month, civil.day, civil.hour), (2023, 12, 31, 22));
    }

    #[test]
    fn test_zero_and_negative_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 22, 0, 0).unwrap();
        assert_eq!(CivilTime::shifted(ts, 0).hour, 22);
        let ahead = CivilTime::shifted(ts, -3);
        assert_eq!((ahead.day, ahead.hour), (11, 1));
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-06-21T15:00:00+03:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap());
        assert!(matches!(parse_timestamp("yesterday"), Err(Error::Time(_))));
    }
}
