//! Human-readable schedule rows.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::schedule::{DailyScheduleRecord, ShiftKind};

/// Language used for weekday names in display rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayNameLocale {
    /// Monday, Tuesday, ...
    #[default]
    English,
    /// Lunes, Martes, ...
    Spanish,
}

impl DayNameLocale {
    /// Returns the localized name of `weekday`.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_scheduler::models::DayNameLocale;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(DayNameLocale::English.day_name(Weekday::Wed), "Wednesday");
    /// assert_eq!(DayNameLocale::Spanish.day_name(Weekday::Wed), "Miércoles");
    /// ```
    pub fn day_name(self, weekday: Weekday) -> &'static str {
        match self {
            DayNameLocale::English => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
            DayNameLocale::Spanish => match weekday {
                Weekday::Mon => "Lunes",
                Weekday::Tue => "Martes",
                Weekday::Wed => "Miércoles",
                Weekday::Thu => "Jueves",
                Weekday::Fri => "Viernes",
                Weekday::Sat => "Sábado",
                Weekday::Sun => "Domingo",
            },
        }
    }
}

/// One schedule day formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// The worked date.
    pub date: NaiveDate,
    /// Localized weekday name.
    pub day_name: String,
    /// Clock-in as `HH:MM`.
    pub clock_in: String,
    /// Clock-out as `HH:MM`.
    pub clock_out: String,
    /// Worked time as `"<h>h <m>m"`.
    pub total: String,
    /// Split or continuous.
    #[serde(rename = "type")]
    pub kind: ShiftKind,
    /// The record the row was formatted from.
    pub raw: DailyScheduleRecord,
}
