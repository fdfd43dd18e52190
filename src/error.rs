//! Error types for the attendance scheduler.
//!
//! The scheduling pipeline itself never fails on well-formed input. These errors
//! are raised at the boundary: while loading configuration, parsing times and
//! weekday numbers, and validating a generation request.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the attendance scheduler.
///
/// # Example
///
/// ```
/// use attendance_scheduler::error::SchedulerError;
///
/// let error = SchedulerError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time of day was not in `HH:MM` form or was out of range.
    #[error("Invalid time of day '{value}': expected HH:MM between 00:00 and 23:59")]
    InvalidTimeOfDay {
        /// The rejected input.
        value: String,
    },

    /// A weekday number outside 1 (Monday) ..= 7 (Sunday).
    #[error("Invalid weekday number {number}: expected 1 (Monday) to 7 (Sunday)")]
    InvalidWeekday {
        /// The rejected weekday number.
        number: u32,
    },

    /// The lunch duration range is inverted or allows an empty lunch.
    #[error("Invalid lunch duration range {min}..={max} minutes")]
    InvalidLunchDuration {
        /// Configured minimum lunch length.
        min: u32,
        /// Configured maximum lunch length.
        max: u32,
    },

    /// Weekly hours outside the hours available in a week.
    #[error("Invalid weekly hours {hours}: expected more than 0 and at most 168")]
    InvalidWeeklyHours {
        /// The rejected weekly hours value.
        hours: Decimal,
    },

    /// A generation request whose week start is not a Monday.
    #[error("Week start {date} is a {weekday:?}, expected a Monday")]
    WeekStartNotMonday {
        /// The requested week start.
        date: NaiveDate,
        /// The weekday the date actually falls on.
        weekday: Weekday,
    },

    /// An ISO week designation that could not be parsed or does not exist.
    #[error("Invalid ISO week '{value}': expected YYYY-Www")]
    InvalidIsoWeek {
        /// The rejected input.
        value: String,
    },

    /// An exception record with inconsistent data.
    #[error("Invalid exception starting {date}: {message}")]
    InvalidException {
        /// The start date of the offending exception.
        date: NaiveDate,
        /// What made the exception invalid.
        message: String,
    },
}

/// A type alias for Results that return SchedulerError.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
