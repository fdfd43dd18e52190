//! Configuration types for schedule generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{ClockTime, WeekdaySet};

/// Upper bound for any weekly hours target.
pub const MAX_WEEKLY_HOURS: i64 = 168;

/// An inclusive window of wall-clock times from which a time is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Earliest time in the window.
    pub start: ClockTime,
    /// Latest time in the window.
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a window from two times.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
}

/// Inclusive range of lunch lengths in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchDuration {
    /// Shortest lunch.
    pub min: u32,
    /// Longest lunch.
    pub max: u32,
}

/// Settings that drive weekly schedule generation.
///
/// Immutable for the duration of one generation run.
///
/// # Example
///
/// ```
/// use attendance_scheduler::config::ScheduleConfig;
///
/// let yaml = r#"
/// weekly_hours: 40
/// work_days: [1, 2, 3, 4, 5]
/// clock_in_range: { start: "07:00", end: "07:30" }
/// lunch_start_range: { start: "14:00", end: "15:00" }
/// lunch_duration: { min: 45, max: 60 }
/// split_shift_days: [1, 2, 3]
/// random_variance: 5
/// "#;
/// let config: ScheduleConfig = serde_yaml::from_str(yaml).unwrap();
/// assert!(config.validate().is_ok());
/// assert_eq!(config, ScheduleConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Target hours for a full configured week.
    pub weekly_hours: Decimal,
    /// Weekdays normally worked.
    pub work_days: WeekdaySet,
    /// Window from which clock-in is drawn.
    pub clock_in_range: TimeWindow,
    /// Window from which a split day's lunch start is drawn.
    pub lunch_start_range: TimeWindow,
    /// Range of a split day's lunch length.
    pub lunch_duration: LunchDuration,
    /// Weekdays that get a lunch break by default.
    pub split_shift_days: WeekdaySet,
    /// Extra random minutes added on top of the clock-in draw.
    pub random_variance: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let hm = |h, m| ClockTime::from_hm(h, m).unwrap_or_default();
        Self {
            weekly_hours: Decimal::new(40, 0),
            work_days: WeekdaySet::from_weekdays([
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]),
            clock_in_range: TimeWindow::new(hm(7, 0), hm(7, 30)),
            lunch_start_range: TimeWindow::new(hm(14, 0), hm(15, 0)),
            lunch_duration: LunchDuration { min: 45, max: 60 },
            split_shift_days: WeekdaySet::from_weekdays([
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
            ]),
            random_variance: 5,
        }
    }
}

impl ScheduleConfig {
    /// Checks the invariants the generator relies on.
    ///
    /// # Errors
    ///
    /// - [`SchedulerError::InvalidWeeklyHours`] unless `0 < weekly_hours <= 168`
    /// - [`SchedulerError::InvalidLunchDuration`] if `min > max` or `min == 0`
    pub fn validate(&self) -> SchedulerResult<()> {
        validate_weekly_hours(self.weekly_hours)?;

        let lunch = self.lunch_duration;
        if lunch.min == 0 || lunch.min > lunch.max {
            return Err(SchedulerError::InvalidLunchDuration {
                min: lunch.min,
                max: lunch.max,
            });
        }

        Ok(())
    }

    /// Number of weekdays in a normal configured week.
    pub fn configured_work_day_count(&self) -> usize {
        self.work_days.len()
    }
}

/// Rejects weekly hour targets that are not positive or exceed 168.
pub(crate) fn validate_weekly_hours(hours: Decimal) -> SchedulerResult<()> {
    if hours <= Decimal::ZERO || hours > Decimal::from(MAX_WEEKLY_HOURS) {
        return Err(SchedulerError::InvalidWeeklyHours { hours });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_product_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.weekly_hours, Decimal::new(40, 0));
        assert_eq!(config.configured_work_day_count(), 5);
        assert_eq!(config.clock_in_range.start.to_string(), "07:00");
        assert_eq!(config.clock_in_range.end.to_string(), "07:30");
        assert_eq!(config.lunch_start_range.start.to_string(), "14:00");
        assert_eq!(config.lunch_start_range.end.to_string(), "15:00");
        assert_eq!(config.lunch_duration, LunchDuration { min: 45, max: 60 });
        assert_eq!(config.split_shift_days, WeekdaySet::from_numbers([1, 2, 3]).unwrap());
        assert_eq!(config.random_variance, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_lunch_duration_is_rejected() {
        let config = ScheduleConfig {
            lunch_duration: LunchDuration { min: 60, max: 45 },
            ..ScheduleConfig::default()
        };
        match config.validate() {
            Err(SchedulerError::InvalidLunchDuration { min, max }) => {
                assert_eq!(min, 60);
                assert_eq!(max, 45);
            }
            other => panic!("Expected InvalidLunchDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_length_lunch_is_rejected() {
        let config = ScheduleConfig {
            lunch_duration: LunchDuration { min: 0, max: 30 },
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SchedulerError::InvalidLunchDuration { .. })
        ));
    }

    #[test]
    fn test_weekly_hours_bounds() {
        for (hours, ok) in [
            (Decimal::new(0, 0), false),
            (Decimal::new(1, 1), true),
            (Decimal::new(375, 1), true),
            (Decimal::new(168, 0), true),
            (Decimal::new(-1, 0), false),
            (Decimal::new(1681, 1), false),
        ] {
            let config = ScheduleConfig {
                weekly_hours: hours,
                ..ScheduleConfig::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "weekly_hours = {}", hours);
        }
    }

    #[test]
    fn test_equal_lunch_bounds_are_allowed() {
        let config = ScheduleConfig {
            lunch_duration: LunchDuration { min: 30, max: 30 },
            ..ScheduleConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_time_fails_deserialization() {
        let yaml = r#"
weekly_hours: 40
work_days: [1, 2, 3, 4, 5]
clock_in_range: { start: "7am", end: "07:30" }
lunch_start_range: { start: "14:00", end: "15:00" }
lunch_duration: { min: 45, max: 60 }
split_shift_days: [1, 2, 3]
random_variance: 5
"#;
        let err = serde_yaml::from_str::<ScheduleConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("Invalid time of day '7am'"), "{}", err);
    }
}
