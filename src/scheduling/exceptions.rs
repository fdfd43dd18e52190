//! Exception resolution: which dates are worked and which week overrides apply.
//!
//! Precedence is a single rule. Any matching exception whose type excludes
//! work (holiday, vacation, sick, other) removes the date, regardless of how
//! many exceptions match or in what order they appear. A `special_week` never
//! removes a date; it only overrides the weekly hours and split days of the
//! week it is anchored in.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ScheduleConfig;
use crate::models::{Exception, ExceptionKind, ExceptionType, WeekdaySet};

/// Why a date is or is not worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A configured work day with no excluding exception.
    Work,
    /// The weekday is not in the configured work days.
    NotScheduled,
    /// Removed by an exception of the given type.
    Excluded(ExceptionType),
}

impl DayStatus {
    /// Returns true for [`DayStatus::Work`].
    pub fn is_work(self) -> bool {
        matches!(self, DayStatus::Work)
    }
}

/// Classifies a date against the configured work days and the exception list.
///
/// When several excluding exceptions match, the first one in list order is
/// reported; the outcome (excluded) does not depend on order.
pub fn classify_day(date: NaiveDate, work_days: &WeekdaySet, exceptions: &[Exception]) -> DayStatus {
    let excluding = exceptions
        .iter()
        .filter(|e| e.covers(date))
        .map(Exception::exception_type)
        .find(|t| t.excludes_work());

    match excluding {
        Some(exception_type) => DayStatus::Excluded(exception_type),
        None if work_days.contains_date(date) => DayStatus::Work,
        None => DayStatus::NotScheduled,
    }
}

/// Returns true if `date` is worked.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::{Exception, ExceptionKind, WeekdaySet};
/// use attendance_scheduler::scheduling::is_work_day;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let work_days = WeekdaySet::from_numbers([1, 2, 3, 4, 5]).unwrap();
/// let thursday = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
/// let exceptions = vec![
///     Exception::special_week(thursday, Decimal::new(20, 0), None),
///     Exception::on(thursday, ExceptionKind::Vacation),
/// ];
/// assert!(!is_work_day(thursday, &work_days, &exceptions));
/// ```
pub fn is_work_day(date: NaiveDate, work_days: &WeekdaySet, exceptions: &[Exception]) -> bool {
    classify_day(date, work_days, exceptions).is_work()
}

/// The weekly hours target and split days that apply to one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOverrides {
    /// Weekly hours target for the week.
    pub weekly_hours: Decimal,
    /// Split-shift weekdays for the week.
    pub split_shift_days: WeekdaySet,
    /// True if a special week exception supplied these values.
    pub special_week: bool,
}

/// Resolves the weekly hours and split days for the week spanning `week_dates`.
///
/// A `special_week` applies when its start date is one of `week_dates`. Its
/// `weekly_hours` replaces the configured value; its `split_days` replaces the
/// configured split days when present, even if empty. Without a special week
/// both values come from `config` unchanged.
///
/// If more than one special week matches, the one with the earliest date wins
/// (list order breaks ties) and a warning is logged.
pub fn resolve_week_overrides(
    week_dates: &[NaiveDate],
    exceptions: &[Exception],
    config: &ScheduleConfig,
) -> WeekOverrides {
    let mut special_weeks: Vec<&Exception> = exceptions
        .iter()
        .filter(|e| matches!(e.kind, ExceptionKind::SpecialWeek { .. }))
        .filter(|e| week_dates.contains(&e.date))
        .collect();

    if special_weeks.len() > 1 {
        warn!(
            week_start = ?week_dates.first(),
            matches = special_weeks.len(),
            "Multiple special weeks match one week, using the earliest"
        );
    }
    // stable sort keeps list order among equal dates
    special_weeks.sort_by_key(|e| e.date);

    match special_weeks.first().map(|e| &e.kind) {
        Some(ExceptionKind::SpecialWeek {
            weekly_hours,
            split_days,
        }) => WeekOverrides {
            weekly_hours: *weekly_hours,
            split_shift_days: split_days
                .clone()
                .unwrap_or_else(|| config.split_shift_days.clone()),
            special_week: true,
        },
        _ => WeekOverrides {
            weekly_hours: config.weekly_hours,
            split_shift_days: config.split_shift_days.clone(),
            special_week: false,
        },
    }
}
