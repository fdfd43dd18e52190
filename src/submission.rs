//! Hand-off to the submission collaborator.
//!
//! The remote attendance service records clocked intervals, not days. A split
//! day is two intervals (morning and afternoon); a continuous day is one.
//! Generated timestamps are local wall-clock times, so they are stamped with
//! the employee's UTC offset before being sent.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{DailyScheduleRecord, ShiftTimes};

/// One clocked interval in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockedSegment {
    /// Work date the interval belongs to.
    pub date: NaiveDate,
    /// Clock-in.
    pub start: NaiveDateTime,
    /// Clock-out.
    pub end: NaiveDateTime,
}

impl ClockedSegment {
    /// Length of the interval in minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Stamps the interval with a fixed UTC offset.
    pub fn with_offset(&self, offset: FixedOffset) -> ZonedSegment {
        ZonedSegment {
            date: self.date,
            start: localize(self.start, offset),
            end: localize(self.end, offset),
        }
    }
}

fn localize(local: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// A clocked interval with an explicit UTC offset.
///
/// Serializes both ends as RFC 3339 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonedSegment {
    /// Work date the interval belongs to.
    pub date: NaiveDate,
    /// Clock-in.
    pub start: DateTime<FixedOffset>,
    /// Clock-out.
    pub end: DateTime<FixedOffset>,
}

impl ZonedSegment {
    /// Clock-in as an RFC 3339 string, e.g. `2025-01-06T07:00:00+01:00`.
    pub fn start_rfc3339(&self) -> String {
        self.start.to_rfc3339()
    }

    /// Clock-out as an RFC 3339 string.
    pub fn end_rfc3339(&self) -> String {
        self.end.to_rfc3339()
    }
}

/// Splits records into the intervals the remote service records.
///
/// Output is in record order; a split day yields its morning interval before
/// its afternoon interval.
pub fn clocked_segments(records: &[DailyScheduleRecord]) -> Vec<ClockedSegment> {
    records
        .iter()
        .flat_map(|record| {
            let date = record.date;
            match record.times {
                ShiftTimes::Split {
                    checkin,
                    lunch_start,
                    lunch_end,
                    checkout,
                } => vec![
                    ClockedSegment {
                        date,
                        start: checkin,
                        end: lunch_start,
                    },
                    ClockedSegment {
                        date,
                        start: lunch_end,
                        end: checkout,
                    },
                ],
                ShiftTimes::Continuous { checkin, checkout } => vec![ClockedSegment {
                    date,
                    start: checkin,
                    end: checkout,
                }],
            }
        })
        .collect()
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Days submitted.
    pub days: usize,
    /// Intervals created remotely.
    pub shifts_created: usize,
}

/// Implemented by whatever writes a generated week to the remote service.
///
/// Transport, authentication and retries belong to the implementor.
pub trait ScheduleSubmitter {
    /// Error type of the underlying transport.
    type Error;

    /// Submits the records of the week starting at `week_start`.
    fn submit(
        &mut self,
        week_start: NaiveDate,
        records: &[DailyScheduleRecord],
    ) -> Result<SubmissionReport, Self::Error>;
}
