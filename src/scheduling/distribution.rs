//! Time distribution: per-day minute budgets that add up to an exact weekly total.
//!
//! The weekly hours target describes a full configured week. A week with fewer
//! worked days (holidays, leave) gets a proportionally smaller total:
//! `weekly_hours / configured_days * worked_days`, converted to minutes with a
//! single rounding.
//!
//! Every day except the last receives its day-type budget plus a random
//! variance of ±[`DAILY_VARIANCE_MINUTES`]. The last day receives whatever is
//! left of the weekly total after subtracting the minutes *actually realized*
//! by the earlier days, so the week always sums exactly.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MAX_WEEKLY_HOURS;
use crate::models::WeekdaySet;

use super::random::RandomSource;

/// Share of the base daily minutes given to a continuous day in a mixed week.
///
/// Split days absorb the difference. This is an empirical policy value.
pub const CONTINUOUS_DAY_RATIO: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Maximum random deviation, in minutes, applied to every day but the last.
pub const DAILY_VARIANCE_MINUTES: i64 = 15;

/// The planned duration of one work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTarget {
    /// The work date.
    pub date: NaiveDate,
    /// Whether the day has a lunch break.
    pub is_split: bool,
    /// Whether this is the week's last work day, which absorbs the remainder.
    pub is_last: bool,
    /// Planned worked minutes.
    pub target_minutes: i64,
}

/// Minute budgets for one week, before any randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBudget {
    /// Exact worked minutes the week must add up to.
    pub total_target_minutes: i64,
    /// Average minutes per day of a full configured week.
    pub base_daily_minutes: i64,
    /// Budget for each split day.
    pub split_day_minutes: i64,
    /// Budget for each continuous day.
    pub continuous_day_minutes: i64,
    /// Number of split work days.
    pub split_days: usize,
    /// Number of continuous work days.
    pub continuous_days: usize,
}

/// Rounds a minute quantity to the nearest whole minute, halves away from zero.
///
/// Values outside the `i64` range saturate.
fn round_minutes(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Exact worked minutes for a week with `worked_days` of `configured_days` worked.
///
/// Computes `round(weekly_hours / configured_days * worked_days * 60)` with a
/// single rounding step. Returns 0 when no days are configured.
/// `weekly_hours` is clamped into `[0, MAX_WEEKLY_HOURS]` first, so
/// unvalidated input cannot overflow.
///
/// # Example
///
/// ```
/// use attendance_scheduler::scheduling::week_target_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(week_target_minutes(Decimal::new(40, 0), 5, 5), 2400);
/// assert_eq!(week_target_minutes(Decimal::new(40, 0), 5, 4), 1920);
/// assert_eq!(week_target_minutes(Decimal::new(375, 1), 5, 3), 1350);
/// ```
pub fn week_target_minutes(weekly_hours: Decimal, configured_days: usize, worked_days: usize) -> i64 {
    if configured_days == 0 {
        return 0;
    }
    let weekly_hours = weekly_hours.clamp(Decimal::ZERO, Decimal::from(MAX_WEEKLY_HOURS));
    round_minutes(
        weekly_hours * Decimal::from(worked_days) * Decimal::from(60)
            / Decimal::from(configured_days),
    )
}

impl WeekBudget {
    /// Computes the per-type budgets for a week.
    ///
    /// - Mixed week: continuous days get `round(base * 0.85)`; split days share
    ///   the rest evenly (floored).
    /// - Only split or only continuous days: the total is shared evenly (floored).
    pub fn compute(
        weekly_hours: Decimal,
        configured_days: usize,
        split_days: usize,
        continuous_days: usize,
    ) -> Self {
        let worked_days = split_days + continuous_days;
        let total_target_minutes = week_target_minutes(weekly_hours, configured_days, worked_days);
        let base_daily_minutes = week_target_minutes(weekly_hours, configured_days, 1);

        let (split_day_minutes, continuous_day_minutes) = match (split_days, continuous_days) {
            (0, 0) => (0, 0),
            (0, c) => (0, total_target_minutes.div_euclid(c as i64)),
            (s, 0) => (total_target_minutes.div_euclid(s as i64), 0),
            (s, c) => {
                let continuous = round_minutes(Decimal::from(base_daily_minutes) * CONTINUOUS_DAY_RATIO);
                let split = (total_target_minutes - c as i64 * continuous).div_euclid(s as i64);
                (split, continuous)
            }
        };

        Self {
            total_target_minutes,
            base_daily_minutes,
            split_day_minutes,
            continuous_day_minutes,
            split_days,
            continuous_days,
        }
    }
}

/// Hands out day targets in date order and reconciles the last day.
///
/// Call [`TimeDistributor::next_target`] for each day and report the minutes
/// the generated shift actually works through
/// [`TimeDistributor::record_actual`] before asking for the next one. The
/// last day's target is the weekly total minus everything recorded so far.
#[derive(Debug, Clone)]
pub struct TimeDistributor {
    days: Vec<(NaiveDate, bool)>,
    budget: WeekBudget,
    next: usize,
    consumed: i64,
}

impl TimeDistributor {
    /// Plans a week over `work_days`, which must be in date order.
    pub fn new(
        work_days: &[NaiveDate],
        split_shift_days: &WeekdaySet,
        weekly_hours: Decimal,
        configured_days: usize,
    ) -> Self {
        let days: Vec<(NaiveDate, bool)> = work_days
            .iter()
            .map(|d| (*d, split_shift_days.contains_date(*d)))
            .collect();
        let split_days = days.iter().filter(|(_, split)| *split).count();
        let budget = WeekBudget::compute(
            weekly_hours,
            configured_days,
            split_days,
            days.len() - split_days,
        );

        debug!(
            work_days = days.len(),
            split_days = budget.split_days,
            continuous_days = budget.continuous_days,
            total_target_minutes = budget.total_target_minutes,
            split_day_minutes = budget.split_day_minutes,
            continuous_day_minutes = budget.continuous_day_minutes,
            "Planned week budget"
        );

        Self {
            days,
            budget,
            next: 0,
            consumed: 0,
        }
    }

    /// The week's budgets.
    pub fn budget(&self) -> &WeekBudget {
        &self.budget
    }

    /// Number of days not yet handed out.
    pub fn remaining_days(&self) -> usize {
        self.days.len() - self.next
    }

    /// Returns the next day's target, or `None` once every day is planned.
    pub fn next_target<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<DayTarget> {
        let (date, is_split) = *self.days.get(self.next)?;
        let is_last = self.next + 1 == self.days.len();
        self.next += 1;

        let target_minutes = if is_last {
            self.budget.total_target_minutes - self.consumed
        } else {
            let base = if is_split {
                self.budget.split_day_minutes
            } else {
                self.budget.continuous_day_minutes
            };
            base + rng.between(-DAILY_VARIANCE_MINUTES, DAILY_VARIANCE_MINUTES)
        };

        debug!(%date, is_split, is_last, target_minutes, "Assigned day target");

        Some(DayTarget {
            date,
            is_split,
            is_last,
            target_minutes,
        })
    }

    /// Records the worked minutes a generated day actually realized.
    pub fn record_actual(&mut self, minutes: i64) {
        self.consumed += minutes;
    }
}

/// Plans targets for every work day, assuming each target is realized exactly.
///
/// The returned targets always sum to
/// `week_target_minutes(weekly_hours, configured_days, work_days.len())`.
/// An empty `work_days` yields an empty plan.
pub fn distribute_week<R: RandomSource + ?Sized>(
    work_days: &[NaiveDate],
    split_shift_days: &WeekdaySet,
    weekly_hours: Decimal,
    configured_days: usize,
    rng: &mut R,
) -> Vec<DayTarget> {
    let mut distributor = TimeDistributor::new(work_days, split_shift_days, weekly_hours, configured_days);
    let mut targets = Vec::with_capacity(work_days.len());
    while let Some(target) = distributor.next_target(rng) {
        distributor.record_actual(target.target_minutes);
        targets.push(target);
    }
    targets
}
