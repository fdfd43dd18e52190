//! Sets of weekdays expressed as weekday numbers.
//!
//! Configuration and exception records identify weekdays by number, with
//! Monday = 1 through Sunday = 7. [`WeekdaySet`] keeps that wire form while
//! exposing [`chrono::Weekday`] in the Rust API.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

/// Converts a weekday number (Monday = 1 ..= Sunday = 7) into a [`Weekday`].
///
/// Returns `None` for numbers outside 1..=7.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::weekday_from_number;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_from_number(1), Some(Weekday::Mon));
/// assert_eq!(weekday_from_number(7), Some(Weekday::Sun));
/// assert_eq!(weekday_from_number(0), None);
/// ```
pub fn weekday_from_number(number: u32) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// A set of weekdays, serialized as a sorted list of weekday numbers.
///
/// # Example
///
/// ```
/// use attendance_scheduler::models::WeekdaySet;
/// use chrono::Weekday;
///
/// let split_days = WeekdaySet::from_numbers([1, 2, 3]).unwrap();
/// assert!(split_days.contains(Weekday::Tue));
/// assert!(!split_days.contains(Weekday::Thu));
/// assert_eq!(split_days.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct WeekdaySet {
    numbers: BTreeSet<u32>,
}

impl WeekdaySet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from weekday numbers, rejecting anything outside 1..=7.
    pub fn from_numbers<I>(numbers: I) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut set = BTreeSet::new();
        for number in numbers {
            if weekday_from_number(number).is_none() {
                return Err(SchedulerError::InvalidWeekday { number });
            }
            set.insert(number);
        }
        Ok(Self { numbers: set })
    }

    /// Builds a set from chrono weekdays.
    pub fn from_weekdays<I>(weekdays: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self {
            numbers: weekdays
                .into_iter()
                .map(|w| w.number_from_monday())
                .collect(),
        }
    }

    /// Returns true if the weekday is in the set.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.numbers.contains(&weekday.number_from_monday())
    }

    /// Returns true if the weekday of `date` is in the set.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// The number of distinct weekdays in the set.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns true if the set holds no weekdays.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterates the weekdays in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.numbers.iter().filter_map(|n| weekday_from_number(*n))
    }
}

impl TryFrom<Vec<u32>> for WeekdaySet {
    type Error = SchedulerError;

    fn try_from(numbers: Vec<u32>) -> Result<Self, Self::Error> {
        Self::from_numbers(numbers)
    }
}

impl From<WeekdaySet> for Vec<u32> {
    fn from(set: WeekdaySet) -> Self {
        set.numbers.into_iter().collect()
    }
}
