//! Attendance Schedule Generator
//!
//! This crate generates plausible weekly attendance schedules: randomized
//! clock-in, lunch and clock-out times per work day whose worked minutes add
//! up exactly to a configured weekly hours target, after holidays, leave and
//! special-week overrides are applied.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
pub mod submission;
