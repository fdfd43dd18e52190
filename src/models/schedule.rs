//! Generated schedule records and their totals.
//!
//! Timestamps are local wall-clock values with no time zone attached.
//! Zone stamping happens only at the submission boundary.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Whether a day is worked in one segment or split around a lunch break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Two clocked segments around an unpaid lunch.
    Split,
    /// One clocked segment, no lunch.
    Continuous,
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftKind::Split => write!(f, "split"),
            ShiftKind::Continuous => write!(f, "continuous"),
        }
    }
}

/// The clocked timestamps of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShiftTimes {
    /// A day with a lunch break.
    Split {
        /// Clock-in time.
        checkin: NaiveDateTime,
        /// Start of the unpaid lunch.
        lunch_start: NaiveDateTime,
        /// End of the unpaid lunch.
        lunch_end: NaiveDateTime,
        /// Clock-out time.
        checkout: NaiveDateTime,
    },
    /// A day worked without a break.
    Continuous {
        /// Clock-in time.
        checkin: NaiveDateTime,
        /// Clock-out time.
        checkout: NaiveDateTime,
    },
}

/// The generated attendance for a single worked date.
///
/// Serializes flat, e.g.
/// `{"date":"2025-01-06","type":"split","checkin":"2025-01-06T07:12:00",...}`.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::{DailyScheduleRecord, ShiftKind, ShiftTimes};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
/// let record = DailyScheduleRecord {
///     date,
///     times: ShiftTimes::Continuous {
///         checkin: date.and_hms_opt(7, 0, 0).unwrap(),
///         checkout: date.and_hms_opt(14, 48, 0).unwrap(),
///     },
/// };
/// assert_eq!(record.kind(), ShiftKind::Continuous);
/// assert_eq!(record.worked_minutes(), 468);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyScheduleRecord {
    /// The worked date.
    pub date: NaiveDate,
    /// The clocked timestamps.
    #[serde(flatten)]
    pub times: ShiftTimes,
}

impl DailyScheduleRecord {
    /// Returns whether the day is split or continuous.
    pub fn kind(&self) -> ShiftKind {
        match self.times {
            ShiftTimes::Split { .. } => ShiftKind::Split,
            ShiftTimes::Continuous { .. } => ShiftKind::Continuous,
        }
    }

    /// Clock-in time.
    pub fn checkin(&self) -> NaiveDateTime {
        match self.times {
            ShiftTimes::Split { checkin, .. } | ShiftTimes::Continuous { checkin, .. } => checkin,
        }
    }

    /// Clock-out time.
    pub fn checkout(&self) -> NaiveDateTime {
        match self.times {
            ShiftTimes::Split { checkout, .. } | ShiftTimes::Continuous { checkout, .. } => {
                checkout
            }
        }
    }

    /// The lunch break as `(start, end)`, if the day is split.
    pub fn lunch(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self.times {
            ShiftTimes::Split {
                lunch_start,
                lunch_end,
                ..
            } => Some((lunch_start, lunch_end)),
            ShiftTimes::Continuous { .. } => None,
        }
    }

    /// Length of the lunch break in minutes (zero for continuous days).
    pub fn lunch_minutes(&self) -> i64 {
        self.lunch()
            .map(|(start, end)| (end - start).num_minutes())
            .unwrap_or(0)
    }

    /// Worked minutes: clock-out minus clock-in, minus the lunch for split days.
    pub fn worked_minutes(&self) -> i64 {
        (self.checkout() - self.checkin()).num_minutes() - self.lunch_minutes()
    }
}

/// Summed worked time across a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    /// Whole hours.
    pub hours: i64,
    /// Remaining minutes, always in `0..60`.
    pub minutes: i64,
    /// Total worked minutes.
    pub total_minutes: i64,
    /// `"<h>h <m>m"`.
    pub formatted: String,
}

impl ScheduleTotals {
    /// Splits a minute count into hours and minutes.
    pub fn from_minutes(total_minutes: i64) -> Self {
        let hours = total_minutes.div_euclid(60);
        let minutes = total_minutes.rem_euclid(60);
        Self {
            hours,
            minutes,
            total_minutes,
            formatted: format_duration(total_minutes),
        }
    }
}

/// Formats a minute count as `"<h>h <m>m"`.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::format_duration;
///
/// assert_eq!(format_duration(2400), "40h 0m");
/// assert_eq!(format_duration(467), "7h 47m");
/// ```
pub fn format_duration(total_minutes: i64) -> String {
    format!(
        "{}h {}m",
        total_minutes.div_euclid(60),
        total_minutes.rem_euclid(60)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn split_record() -> DailyScheduleRecord {
        DailyScheduleRecord {
            date: make_date("2025-01-06"),
            times: ShiftTimes::Split {
                checkin: make_datetime("2025-01-06", "07:00:00"),
                lunch_start: make_datetime("2025-01-06", "14:00:00"),
                lunch_end: make_datetime("2025-01-06", "14:45:00"),
                checkout: make_datetime("2025-01-06", "17:02:00"),
            },
        }
    }

    #[test]
    fn test_split_worked_minutes_excludes_lunch() {
        let record = split_record();
        // 07:00-17:02 is 602 minutes, minus a 45 minute lunch
        assert_eq!(record.lunch_minutes(), 45);
        assert_eq!(record.worked_minutes(), 557);
        assert_eq!(record.kind(), ShiftKind::Split);
    }

    #[test]
    fn test_continuous_has_no_lunch() {
        let record = DailyScheduleRecord {
            date: make_date("2025-01-09"),
            times: ShiftTimes::Continuous {
                checkin: make_datetime("2025-01-09", "07:00:00"),
                checkout: make_datetime("2025-01-09", "13:48:00"),
            },
        };
        assert_eq!(record.lunch(), None);
        assert_eq!(record.lunch_minutes(), 0);
        assert_eq!(record.worked_minutes(), 408);
    }

    #[test]
    fn test_split_record_serializes_flat() {
        let json = serde_json::to_value(split_record()).unwrap();
        assert_eq!(json["date"], "2025-01-06");
        assert_eq!(json["type"], "split");
        assert_eq!(json["checkin"], "2025-01-06T07:00:00");
        assert_eq!(json["lunch_start"], "2025-01-06T14:00:00");
        assert_eq!(json["lunch_end"], "2025-01-06T14:45:00");
        assert_eq!(json["checkout"], "2025-01-06T17:02:00");
    }

    #[test]
    fn test_continuous_record_deserializes() {
        let json = r#"{
            "date": "2025-01-10",
            "type": "continuous",
            "checkin": "2025-01-10T07:05:00",
            "checkout": "2025-01-10T14:00:00"
        }"#;
        let record: DailyScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind(), ShiftKind::Continuous);
        assert_eq!(record.worked_minutes(), 415);
    }

    #[test]
    fn test_totals_split_hours_and_minutes() {
        let totals = ScheduleTotals::from_minutes(1927);
        assert_eq!(totals.hours, 32);
        assert_eq!(totals.minutes, 7);
        assert_eq!(totals.total_minutes, 1927);
        assert_eq!(totals.formatted, "32h 7m");
    }

    #[test]
    fn test_totals_of_zero() {
        let totals = ScheduleTotals::from_minutes(0);
        assert_eq!(totals.formatted, "0h 0m");
    }

    #[test]
    fn test_shift_kind_display() {
        assert_eq!(ShiftKind::Split.to_string(), "split");
        assert_eq!(ShiftKind::Continuous.to_string(), "continuous");
    }
}
