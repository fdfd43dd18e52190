//! In-memory history of applied schedules.
//!
//! The history is a bounded, newest-first list. It derives serde traits so an
//! external store can persist it; the crate itself never writes it anywhere.

use std::collections::VecDeque;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::display::DisplayRow;
use super::schedule::{DailyScheduleRecord, ScheduleTotals};

/// Maximum number of entries kept by [`ScheduleHistory`].
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Outcome recorded for a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    /// The schedule was submitted successfully.
    Applied,
}

/// A schedule that was applied for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// Monday of the applied week.
    pub week_start: NaiveDate,
    /// Display rows as shown when the schedule was applied.
    pub rows: Vec<DisplayRow>,
    /// The raw records that were submitted.
    pub records: Vec<DailyScheduleRecord>,
    /// Totals of the applied schedule.
    pub totals: ScheduleTotals,
    /// When the schedule was applied.
    pub applied_at: DateTime<Utc>,
    /// Outcome of the application.
    pub status: HistoryStatus,
}

/// Newest-first log of applied schedules, capped at [`MAX_HISTORY_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ScheduleHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an applied schedule and returns the stored entry.
    ///
    /// The oldest entries are dropped once the cap is exceeded.
    pub fn record(
        &mut self,
        week_start: NaiveDate,
        rows: Vec<DisplayRow>,
        records: Vec<DailyScheduleRecord>,
        totals: ScheduleTotals,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            week_start,
            rows,
            records,
            totals,
            applied_at: Utc::now(),
            status: HistoryStatus::Applied,
        };
        self.entries.push_front(entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        &self.entries[0]
    }

    /// Iterates entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Finds the most recent entry for a week.
    pub fn latest_for_week(&self, week_start: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.week_start == week_start)
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
