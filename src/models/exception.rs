//! Date-scoped schedule exceptions.
//!
//! An exception either removes dates from the working calendar (holidays,
//! vacations, sick leave and other absences) or, for a `special_week`,
//! overrides the weekly hours target and split-shift days of the week it
//! falls in.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::weekday_set::WeekdaySet;

/// The fieldless category of an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionType {
    /// Public or company holiday.
    Holiday,
    /// Planned leave.
    Vacation,
    /// Sick leave.
    Sick,
    /// Any other absence.
    Other,
    /// A week with overridden hours and split days.
    SpecialWeek,
}

impl ExceptionType {
    /// Returns true if a date matched by this type is removed from work.
    ///
    /// Every type except [`ExceptionType::SpecialWeek`] excludes the date.
    pub fn excludes_work(self) -> bool {
        !matches!(self, ExceptionType::SpecialWeek)
    }
}

impl fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExceptionType::Holiday => write!(f, "holiday"),
            ExceptionType::Vacation => write!(f, "vacation"),
            ExceptionType::Sick => write!(f, "sick"),
            ExceptionType::Other => write!(f, "other"),
            ExceptionType::SpecialWeek => write!(f, "special_week"),
        }
    }
}

/// The kind of an exception, carrying the override data of a special week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExceptionKind {
    /// Public or company holiday.
    Holiday,
    /// Planned leave.
    Vacation,
    /// Sick leave.
    Sick,
    /// Any other absence.
    Other,
    /// Overrides the weekly target for the week containing the exception date.
    SpecialWeek {
        /// Weekly hours target for that week.
        #[serde(alias = "weeklyHours")]
        weekly_hours: Decimal,
        /// Split-shift weekdays for that week.
        ///
        /// `None` inherits the configured split days. `Some` of an empty set
        /// means the week has no split days at all.
        #[serde(default, alias = "splitDays", skip_serializing_if = "Option::is_none")]
        split_days: Option<WeekdaySet>,
    },
}

impl ExceptionKind {
    /// Returns the fieldless type of this kind.
    pub fn exception_type(&self) -> ExceptionType {
        match self {
            ExceptionKind::Holiday => ExceptionType::Holiday,
            ExceptionKind::Vacation => ExceptionType::Vacation,
            ExceptionKind::Sick => ExceptionType::Sick,
            ExceptionKind::Other => ExceptionType::Other,
            ExceptionKind::SpecialWeek { .. } => ExceptionType::SpecialWeek,
        }
    }
}

/// A single exception record, covering one date or an inclusive date range.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::{Exception, ExceptionKind};
/// use chrono::NaiveDate;
///
/// let vacation = Exception::range(
///     NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     ExceptionKind::Vacation,
/// );
/// assert!(vacation.covers(NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()));
/// assert!(!vacation.covers(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    /// First date the exception applies to.
    pub date: NaiveDate,
    /// Last date of a range exception (inclusive).
    #[serde(default, alias = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Free-text note such as the holiday name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    /// What the exception does.
    #[serde(flatten)]
    pub kind: ExceptionKind,
}

impl Exception {
    /// Creates a single-day exception.
    pub fn on(date: NaiveDate, kind: ExceptionKind) -> Self {
        Self {
            date,
            end_date: None,
            reason: String::new(),
            kind,
        }
    }

    /// Creates an exception covering `date..=end_date`.
    pub fn range(date: NaiveDate, end_date: NaiveDate, kind: ExceptionKind) -> Self {
        Self {
            date,
            end_date: Some(end_date),
            reason: String::new(),
            kind,
        }
    }

    /// Creates a special week override anchored on `date`.
    pub fn special_week(
        date: NaiveDate,
        weekly_hours: Decimal,
        split_days: Option<WeekdaySet>,
    ) -> Self {
        Self::on(
            date,
            ExceptionKind::SpecialWeek {
                weekly_hours,
                split_days,
            },
        )
    }

    /// Attaches a reason to the exception.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Returns the fieldless type of this exception.
    pub fn exception_type(&self) -> ExceptionType {
        self.kind.exception_type()
    }

    /// Returns true if `date` falls within this exception.
    ///
    /// A date matches if it equals the start date, or, when an end date is
    /// present, lies within `date..=end_date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        if self.date == date {
            return true;
        }
        match self.end_date {
            Some(end) => self.date <= date && date <= end,
            None => false,
        }
    }
}
