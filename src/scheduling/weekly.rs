//! Weekly schedule generation.
//!
//! [`generate_weekly_schedule`] runs the whole pipeline for one week and never
//! fails. [`WeeklyScheduler`] is the validating entry point for callers that
//! hold unchecked input: it rejects bad configuration, non-Monday week starts
//! and inconsistent exceptions before running the pipeline.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{ScheduleConfig, validate_weekly_hours};
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{
    DailyScheduleRecord, DayNameLocale, DisplayRow, Exception, ExceptionKind, ScheduleTotals,
};

use super::calendar::{is_week_start, week_dates};
use super::daily_shift::{generate_closing_day, generate_day};
use super::distribution::TimeDistributor;
use super::exceptions::{is_work_day, resolve_week_overrides};
use super::random::RandomSource;
use super::summary::{calculate_totals, format_schedule};

/// A generated week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Weekly hours target that applied, after any special week override.
    pub weekly_hours: Decimal,
    /// True if a special week override applied.
    pub special_week: bool,
    /// Exact worked minutes the week was planned to.
    pub target_minutes: i64,
    /// One record per worked day, in date order.
    pub records: Vec<DailyScheduleRecord>,
    /// Totals summed from the generated records.
    pub totals: ScheduleTotals,
}

impl WeeklySchedule {
    /// Formats the records for display in `locale`.
    pub fn display_rows(&self, locale: DayNameLocale) -> Vec<DisplayRow> {
        format_schedule(&self.records, locale)
    }
}

/// Generates the schedule for the week starting at `week_start`.
///
/// The caller guarantees `week_start` is a Monday and `config` is valid; use
/// [`WeeklyScheduler`] to have both checked.
///
/// The last work day is built with [`generate_closing_day`], so the worked
/// minutes of the result equal
/// `round(weekly_hours / configured_work_days * worked_days * 60)`. The only
/// misses are a remainder that earlier days already overshot, or a closing
/// split day whose lunch range holds no length that avoids a minute
/// collision; both are logged at `warn` level.
///
/// # Example
///
/// ```
/// use attendance_scheduler::config::ScheduleConfig;
/// use attendance_scheduler::scheduling::generate_weekly_schedule;
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let week_start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let mut rng = StdRng::seed_from_u64(2025);
/// let schedule = generate_weekly_schedule(week_start, &ScheduleConfig::default(), &[], &mut rng);
///
/// assert_eq!(schedule.records.len(), 5);
/// assert_eq!(schedule.totals.total_minutes, 2400);
/// ```
pub fn generate_weekly_schedule<R: RandomSource + ?Sized>(
    week_start: NaiveDate,
    config: &ScheduleConfig,
    exceptions: &[Exception],
    rng: &mut R,
) -> WeeklySchedule {
    let dates = week_dates(week_start);
    let overrides = resolve_week_overrides(&dates, exceptions, config);

    let work_days: Vec<NaiveDate> = dates
        .into_iter()
        .filter(|d| is_work_day(*d, &config.work_days, exceptions))
        .collect();

    debug!(
        %week_start,
        work_days = work_days.len(),
        weekly_hours = %overrides.weekly_hours,
        special_week = overrides.special_week,
        "Resolved week"
    );

    let mut distributor = TimeDistributor::new(
        &work_days,
        &overrides.split_shift_days,
        overrides.weekly_hours,
        config.configured_work_day_count(),
    );
    let target_minutes = distributor.budget().total_target_minutes;

    let mut records = Vec::with_capacity(work_days.len());
    while let Some(target) = distributor.next_target(rng) {
        let record = if target.is_last {
            generate_closing_day(target.date, target.target_minutes, config, target.is_split, rng)
        } else {
            generate_day(target.date, target.target_minutes, config, target.is_split, rng)
        };
        distributor.record_actual(record.worked_minutes());
        records.push(record);
    }

    let totals = calculate_totals(&records);
    if totals.total_minutes != target_minutes {
        // a negative remainder, or a split last day whose lunch range cannot
        // avoid a minute collision
        warn!(
            %week_start,
            target_minutes,
            total_minutes = totals.total_minutes,
            "Last day could not absorb the remaining minutes"
        );
    }

    info!(
        %week_start,
        days = records.len(),
        target_minutes,
        total_minutes = totals.total_minutes,
        "Generated weekly schedule"
    );

    WeeklySchedule {
        week_start,
        weekly_hours: overrides.weekly_hours,
        special_week: overrides.special_week,
        target_minutes,
        records,
        totals,
    }
}

/// Checks an exception list for inconsistent records.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidException`] if a range ends before it
/// starts or a special week's hours are not in `(0, 168]`.
pub fn validate_exceptions(exceptions: &[Exception]) -> SchedulerResult<()> {
    for exception in exceptions {
        if let Some(end) = exception.end_date {
            if end < exception.date {
                return Err(SchedulerError::InvalidException {
                    date: exception.date,
                    message: format!("end date {} is before the start date", end),
                });
            }
        }
        if let ExceptionKind::SpecialWeek { weekly_hours, .. } = &exception.kind {
            validate_weekly_hours(*weekly_hours).map_err(|e| SchedulerError::InvalidException {
                date: exception.date,
                message: e.to_string(),
            })?;
        }
    }
    Ok(())
}

/// Validating front end to [`generate_weekly_schedule`].
///
/// Holds a validated configuration and may be shared freely; generation
/// touches no shared mutable state.
#[derive(Debug, Clone)]
pub struct WeeklyScheduler {
    config: ScheduleConfig,
}

impl WeeklyScheduler {
    /// Creates a scheduler, validating the configuration.
    pub fn new(config: ScheduleConfig) -> SchedulerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Generates a week after validating the request.
    ///
    /// # Errors
    ///
    /// - [`SchedulerError::WeekStartNotMonday`] if `week_start` is not a Monday
    /// - [`SchedulerError::InvalidException`] if an exception is inconsistent
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        week_start: NaiveDate,
        exceptions: &[Exception],
        rng: &mut R,
    ) -> SchedulerResult<WeeklySchedule> {
        if !is_week_start(week_start) {
            return Err(SchedulerError::WeekStartNotMonday {
                date: week_start,
                weekday: week_start.weekday(),
            });
        }
        validate_exceptions(exceptions)?;
        Ok(generate_weekly_schedule(week_start, &self.config, exceptions, rng))
    }
}
