//! Core data models for the attendance scheduler.
//!
//! This module contains the value types shared by configuration, the
//! scheduling pipeline and its consumers.

mod clock_time;
mod display;
mod exception;
mod history;
mod schedule;
mod weekday_set;

pub use clock_time::{ClockTime, stamp};
pub use display::{DayNameLocale, DisplayRow};
pub use exception::{Exception, ExceptionKind, ExceptionType};
pub use history::{HistoryEntry, HistoryStatus, MAX_HISTORY_ENTRIES, ScheduleHistory};
pub use schedule::{DailyScheduleRecord, ScheduleTotals, ShiftKind, ShiftTimes, format_duration};
pub use weekday_set::{WeekdaySet, weekday_from_number};
