//! Schedule generation pipeline.
//!
//! One week flows through these steps in order:
//!
//! 1. [`calendar`]: the seven dates of the week, Monday first
//! 2. [`exceptions`]: which dates are worked and whether a special week applies
//! 3. [`distribution`]: minute budgets that add up to the exact weekly total
//! 4. [`daily_shift`]: randomized timestamps for each worked day
//! 5. [`summary`]: totals and display rows
//!
//! [`weekly`] ties the steps together. All randomness is drawn through
//! [`RandomSource`], so a seeded generator or [`ScriptedRandom`] makes a run
//! reproducible.
//!
//! # Example
//!
//! ```
//! use attendance_scheduler::config::ScheduleConfig;
//! use attendance_scheduler::models::{Exception, ExceptionKind};
//! use attendance_scheduler::scheduling::WeeklyScheduler;
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let scheduler = WeeklyScheduler::new(ScheduleConfig::default()).unwrap();
//! let holiday = Exception::on(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(), ExceptionKind::Holiday);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let week = scheduler
//!     .generate(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), &[holiday], &mut rng)
//!     .unwrap();
//! assert_eq!(week.records.len(), 4);
//! assert_eq!(week.totals.total_minutes, 1920);
//! ```

pub mod calendar;
pub mod daily_shift;
pub mod distribution;
pub mod exceptions;
pub mod random;
pub mod summary;
pub mod weekly;

pub use calendar::{
    DAYS_PER_WEEK, is_week_start, parse_iso_week, week_dates, week_start_for_iso_week,
    weekday_number,
};
pub use daily_shift::{
    MAX_COLLISION_ADJUSTMENT, MIN_COLLISION_ADJUSTMENT, generate_closing_day, generate_day,
};
pub use distribution::{
    CONTINUOUS_DAY_RATIO, DAILY_VARIANCE_MINUTES, DayTarget, TimeDistributor, WeekBudget,
    distribute_week, week_target_minutes,
};
pub use exceptions::{DayStatus, WeekOverrides, classify_day, is_work_day, resolve_week_overrides};
pub use random::{RandomSource, ScriptedRandom};
pub use summary::{calculate_totals, format_record, format_schedule};
pub use weekly::{WeeklySchedule, WeeklyScheduler, generate_weekly_schedule, validate_exceptions};
