//! Configuration loading and management for the attendance scheduler.
//!
//! This module provides the [`ScheduleConfig`] settings and a [`ConfigLoader`]
//! that reads them, together with an exception list, from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_scheduler::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Work days per week: {}", loader.config().configured_work_day_count());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LunchDuration, MAX_WEEKLY_HOURS, ScheduleConfig, TimeWindow};
pub(crate) use types::validate_weekly_hours;
