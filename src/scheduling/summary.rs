//! Totals and display formatting for generated schedules.

use chrono::Datelike;

use crate::models::{
    DailyScheduleRecord, DayNameLocale, DisplayRow, ScheduleTotals, format_duration,
};

/// Sums the worked minutes of every record.
///
/// Each day contributes clock-out minus clock-in, minus the lunch for split days.
pub fn calculate_totals(records: &[DailyScheduleRecord]) -> ScheduleTotals {
    ScheduleTotals::from_minutes(records.iter().map(DailyScheduleRecord::worked_minutes).sum())
}

/// Formats one record as a display row with the given weekday name.
///
/// Pure: formatting the same record twice gives identical rows.
pub fn format_record(record: &DailyScheduleRecord, day_name: &str) -> DisplayRow {
    DisplayRow {
        date: record.date,
        day_name: day_name.to_string(),
        clock_in: record.checkin().format("%H:%M").to_string(),
        clock_out: record.checkout().format("%H:%M").to_string(),
        total: format_duration(record.worked_minutes()),
        kind: record.kind(),
        raw: record.clone(),
    }
}

/// Formats a schedule, naming each day in `locale`.
pub fn format_schedule(records: &[DailyScheduleRecord], locale: DayNameLocale) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|r| format_record(r, locale.day_name(r.date.weekday())))
        .collect()
}
