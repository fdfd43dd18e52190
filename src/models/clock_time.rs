//! Wall-clock times of day.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// A local time of day with minute resolution, stored as minutes since midnight.
///
/// Parsed from and serialized as `"HH:MM"`. The default is midnight.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::ClockTime;
///
/// let time: ClockTime = "07:30".parse().unwrap();
/// assert_eq!(time.minutes(), 450);
/// assert_eq!(time.to_string(), "07:30");
/// assert!("7h30".parse::<ClockTime>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Creates a time from hours and minutes, or `None` if out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }
}

impl FromStr for ClockTime {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SchedulerError::InvalidTimeOfDay {
            value: s.to_string(),
        };
        // %H and %M accept single digits, so pin the shape first
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let time = NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| invalid())?;
        Ok(Self::from(time))
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.hour() * 60 + time.minute())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SchedulerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Stamps `minutes` past midnight onto `date` at `:00` seconds.
///
/// Minute values past 24:00 roll over into the following day rather than
/// producing an invalid wall-clock reading.
pub fn stamp(date: NaiveDate, minutes: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
}
