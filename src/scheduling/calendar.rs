//! Calendar resolution: week expansion and weekday numbering.
//!
//! Dates are `chrono::NaiveDate`, a proleptic Gregorian date with no time zone,
//! so weekday arithmetic is independent of host locale and zone.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{SchedulerError, SchedulerResult};

/// Number of days in a calendar week.
pub const DAYS_PER_WEEK: usize = 7;

/// Expands a week start into its seven consecutive dates.
///
/// The caller guarantees `week_start` is a Monday; this function does not
/// check it.
///
/// # Example
///
/// ```
/// use attendance_scheduler::scheduling::week_dates;
/// use chrono::NaiveDate;
///
/// let dates = week_dates(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
/// assert_eq!(dates.len(), 7);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(dates[6], NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
/// ```
pub fn week_dates(week_start: NaiveDate) -> Vec<NaiveDate> {
    week_start.iter_days().take(DAYS_PER_WEEK).collect()
}

/// Returns the weekday number of `date`, Monday = 1 through Sunday = 7.
///
/// # Example
///
/// ```
/// use attendance_scheduler::scheduling::weekday_number;
/// use chrono::NaiveDate;
///
/// assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()), 1);
/// assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()), 7);
/// ```
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Returns true if `date` is a Monday.
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Returns the Monday that starts ISO week `week` of ISO year `year`.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidIsoWeek`] if the year has no such week.
pub fn week_start_for_iso_week(year: i32, week: u32) -> SchedulerResult<NaiveDate> {
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(|| {
        SchedulerError::InvalidIsoWeek {
            value: format!("{}-W{:02}", year, week),
        }
    })
}

/// Parses an ISO week designation such as `"2025-W02"` into its Monday.
///
/// # Example
///
/// ```
/// use attendance_scheduler::scheduling::parse_iso_week;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_iso_week("2025-W02").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
/// );
/// ```
pub fn parse_iso_week(value: &str) -> SchedulerResult<NaiveDate> {
    let invalid = || SchedulerError::InvalidIsoWeek {
        value: value.to_string(),
    };
    let (year, week) = value.split_once("-W").ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let week: u32 = week.parse().map_err(|_| invalid())?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)
}
