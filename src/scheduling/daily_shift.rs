//! Daily shift generation: randomized clock-in, lunch and clock-out for one day.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::{ScheduleConfig, TimeWindow};
use crate::models::{DailyScheduleRecord, ShiftTimes, stamp};

use super::random::RandomSource;

/// Smallest clock-out nudge applied when clock-in and clock-out share a minute.
pub const MIN_COLLISION_ADJUSTMENT: i64 = 1;

/// Largest clock-out nudge applied when clock-in and clock-out share a minute.
pub const MAX_COLLISION_ADJUSTMENT: i64 = 3;

fn draw_in(window: TimeWindow, rng: &mut (impl RandomSource + ?Sized)) -> i64 {
    rng.between(window.start.minutes(), window.end.minutes())
}

fn draw_clock_in(config: &ScheduleConfig, rng: &mut (impl RandomSource + ?Sized)) -> i64 {
    draw_in(config.clock_in_range, rng) + rng.between(0, i64::from(config.random_variance))
}

fn minute_of_hour_matches(a: i64, b: i64) -> bool {
    a.rem_euclid(60) == b.rem_euclid(60)
}

fn continuous_day(date: NaiveDate, target_minutes: i64, clock_in: i64) -> DailyScheduleRecord {
    let clock_out = clock_in + target_minutes;
    debug!(%date, target_minutes, clock_in, clock_out, "Generated continuous day");

    DailyScheduleRecord {
        date,
        times: ShiftTimes::Continuous {
            checkin: stamp(date, clock_in),
            checkout: stamp(date, clock_out),
        },
    }
}

fn split_day(
    date: NaiveDate,
    target_minutes: i64,
    clock_in: i64,
    lunch_start: i64,
    lunch_length: i64,
    clock_out: i64,
) -> DailyScheduleRecord {
    let lunch_end = lunch_start + lunch_length;
    debug!(
        %date,
        target_minutes,
        clock_in,
        lunch_start,
        lunch_length,
        clock_out,
        "Generated split day"
    );

    DailyScheduleRecord {
        date,
        times: ShiftTimes::Split {
            checkin: stamp(date, clock_in),
            lunch_start: stamp(date, lunch_start),
            lunch_end: stamp(date, lunch_end),
            checkout: stamp(date, clock_out),
        },
    }
}

/// Generates the timestamps for one work day.
///
/// Clock-in is drawn from the configured window, then pushed later by up to
/// `random_variance` minutes, so it may land past the window's end.
///
/// A continuous day clocks out exactly `target_minutes` after clock-in.
///
/// A split day draws its lunch start from the lunch window and its length
/// from the lunch range. Work before lunch is `lunch_start - clock_in`; work
/// after lunch is whatever remains of the target, never negative. If clock-in
/// and clock-out would share the same minute-of-hour, clock-out moves
/// 1 to 3 minutes later.
///
/// # Example
///
/// ```
/// use attendance_scheduler::config::ScheduleConfig;
/// use attendance_scheduler::models::ShiftKind;
/// use attendance_scheduler::scheduling::{ScriptedRandom, generate_day};
/// use chrono::NaiveDate;
///
/// let config = ScheduleConfig::default();
/// let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
/// let mut rng = ScriptedRandom::lowest();
///
/// let record = generate_day(date, 408, &config, false, &mut rng);
/// assert_eq!(record.kind(), ShiftKind::Continuous);
/// assert_eq!(record.checkin().format("%H:%M").to_string(), "07:00");
/// assert_eq!(record.checkout().format("%H:%M").to_string(), "13:48");
/// ```
pub fn generate_day<R: RandomSource + ?Sized>(
    date: NaiveDate,
    target_minutes: i64,
    config: &ScheduleConfig,
    is_split: bool,
    rng: &mut R,
) -> DailyScheduleRecord {
    let clock_in = draw_clock_in(config, rng);
    if !is_split {
        return continuous_day(date, target_minutes, clock_in);
    }

    let lunch_start = draw_in(config.lunch_start_range, rng);
    let lunch_length = rng.between(
        i64::from(config.lunch_duration.min),
        i64::from(config.lunch_duration.max),
    );

    let work_before_lunch = lunch_start - clock_in;
    let work_after_lunch = (target_minutes - work_before_lunch).max(0);
    let mut clock_out = lunch_start + lunch_length + work_after_lunch;

    if minute_of_hour_matches(clock_in, clock_out) {
        clock_out += rng.between(MIN_COLLISION_ADJUSTMENT, MAX_COLLISION_ADJUSTMENT);
    }

    split_day(date, target_minutes, clock_in, lunch_start, lunch_length, clock_out)
}

/// Generates the last work day of a week, landing exactly on `target_minutes`.
///
/// Draws the same values in the same order as [`generate_day`]. A continuous
/// day is identical. A split day differs in two ways so that its worked
/// minutes equal the target:
///
/// - if the target is shorter than the drawn pre-lunch segment, lunch starts
///   at `clock_in + target_minutes` and nothing is worked after it
/// - if clock-in and clock-out would share a minute-of-hour, the lunch length
///   is redrawn among the lengths in the lunch range that avoid it, instead
///   of nudging clock-out
///
/// When every length in the lunch range collides, clock-out is nudged as in
/// [`generate_day`] and the day overshoots. A negative target is treated as
/// zero.
pub fn generate_closing_day<R: RandomSource + ?Sized>(
    date: NaiveDate,
    target_minutes: i64,
    config: &ScheduleConfig,
    is_split: bool,
    rng: &mut R,
) -> DailyScheduleRecord {
    let clock_in = draw_clock_in(config, rng);
    if !is_split {
        return continuous_day(date, target_minutes, clock_in);
    }

    let mut lunch_start = draw_in(config.lunch_start_range, rng);
    let (min_lunch, max_lunch) = (
        i64::from(config.lunch_duration.min),
        i64::from(config.lunch_duration.max),
    );
    let mut lunch_length = rng.between(min_lunch, max_lunch);

    let target = target_minutes.max(0);
    if target < lunch_start - clock_in {
        lunch_start = clock_in + target;
    }
    let work_after_lunch = target - (lunch_start - clock_in);

    // clock-out sits target + lunch_length after clock-in
    let mut nudge = 0;
    if minute_of_hour_matches(clock_in, clock_in + target + lunch_length) {
        let free: Vec<i64> = (min_lunch..=max_lunch)
            .filter(|length| !minute_of_hour_matches(clock_in, clock_in + target + length))
            .collect();
        let redrawn = if free.is_empty() {
            None
        } else {
            let index = rng.between(0, free.len() as i64 - 1);
            free.get(index as usize).copied()
        };
        match redrawn {
            Some(length) => lunch_length = length,
            None => {
                warn!(%date, lunch_length, "No lunch length avoids a minute collision");
                nudge = rng.between(MIN_COLLISION_ADJUSTMENT, MAX_COLLISION_ADJUSTMENT);
            }
        }
    }

    let clock_out = lunch_start + lunch_length + work_after_lunch + nudge;
    split_day(date, target, clock_in, lunch_start, lunch_length, clock_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LunchDuration;
    use crate::models::{ClockTime, ShiftKind};
    use crate::scheduling::ScriptedRandom;
    use chrono::Timelike;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn hm(record_time: chrono::NaiveDateTime) -> String {
        record_time.format("%H:%M").to_string()
    }

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_continuous_day_is_exact() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::new([425, 3]);
        let record = generate_day(make_date("2025-01-09"), 408, &config, false, &mut rng);

        assert_eq!(record.kind(), ShiftKind::Continuous);
        assert_eq!(hm(record.checkin()), "07:08");
        assert_eq!(hm(record.checkout()), "13:56");
        assert_eq!(record.worked_minutes(), 408);
        assert_eq!(record.checkin().second(), 0);
    }

    #[test]
    fn test_variance_can_push_clock_in_past_window() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::highest();
        let record = generate_day(make_date("2025-01-09"), 408, &config, false, &mut rng);
        // 07:30 window end plus the full 5 minute variance
        assert_eq!(hm(record.checkin()), "07:35");
    }

    #[test]
    fn test_continuous_day_may_share_minute() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::lowest();
        let record = generate_day(make_date("2025-01-09"), 480, &config, false, &mut rng);
        assert_eq!(hm(record.checkin()), "07:00");
        assert_eq!(hm(record.checkout()), "15:00");
    }

    #[test]
    fn test_split_day_layout() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::lowest();
        let record = generate_day(make_date("2025-01-06"), 528, &config, true, &mut rng);

        assert_eq!(record.kind(), ShiftKind::Split);
        let (lunch_start, lunch_end) = record.lunch().unwrap();
        assert_eq!(hm(record.checkin()), "07:00");
        assert_eq!(hm(lunch_start), "14:00");
        assert_eq!(hm(lunch_end), "14:45");
        // 420 minutes before lunch, 108 after
        assert_eq!(hm(record.checkout()), "16:33");
        assert_eq!(record.worked_minutes(), 528);
    }

    #[test]
    fn test_split_day_minute_collision_is_broken() {
        let config = ScheduleConfig::default();
        // clock-in 07:00, lunch 14:00 for 45 minutes, 435 minute target
        // would clock out at 15:00, sharing minute :00 with clock-in
        let mut rng = ScriptedRandom::new([420, 0, 840, 45, 2]);
        let record = generate_day(make_date("2025-01-06"), 435, &config, true, &mut rng);

        assert_eq!(hm(record.checkin()), "07:00");
        assert_eq!(hm(record.checkout()), "15:02");
        assert_eq!(record.worked_minutes(), 437);
    }

    #[test]
    fn test_split_day_work_after_lunch_is_clamped() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::lowest();
        // 420 minutes already worked before lunch, target only 300
        let record = generate_day(make_date("2025-01-06"), 300, &config, true, &mut rng);

        let (_, lunch_end) = record.lunch().unwrap();
        assert_eq!(record.checkout(), lunch_end);
        assert_eq!(record.worked_minutes(), 420);
    }

    #[test]
    fn test_inverted_window_degenerates_to_start() {
        let config = ScheduleConfig {
            clock_in_range: TimeWindow::new(time("08:00"), time("07:00")),
            lunch_start_range: TimeWindow::new(time("13:00"), time("13:00")),
            lunch_duration: LunchDuration { min: 30, max: 30 },
            random_variance: 0,
            ..ScheduleConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let record = generate_day(make_date("2025-01-06"), 400, &config, true, &mut rng);

        assert_eq!(hm(record.checkin()), "08:00");
        let (lunch_start, lunch_end) = record.lunch().unwrap();
        assert_eq!(hm(lunch_start), "13:00");
        assert_eq!(hm(lunch_end), "13:30");
    }

    #[test]
    fn test_closing_continuous_day_matches_generate_day() {
        let config = ScheduleConfig::default();
        let date = make_date("2025-01-10");
        let regular = generate_day(date, 377, &config, false, &mut ScriptedRandom::new([431, 4]));
        let closing =
            generate_closing_day(date, 377, &config, false, &mut ScriptedRandom::new([431, 4]));
        assert_eq!(regular, closing);
    }

    #[test]
    fn test_closing_split_day_pulls_lunch_forward() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::lowest();
        // 420 minutes before the drawn 14:00 lunch, only 300 remain
        let record = generate_closing_day(make_date("2025-01-10"), 300, &config, true, &mut rng);

        let (lunch_start, lunch_end) = record.lunch().unwrap();
        assert_eq!(hm(record.checkin()), "07:00");
        assert_eq!(hm(lunch_start), "12:00");
        assert_eq!(hm(lunch_end), "12:45");
        assert_eq!(record.checkout(), lunch_end);
        assert_eq!(record.worked_minutes(), 300);
    }

    #[test]
    fn test_closing_split_day_redraws_lunch_on_collision() {
        let config = ScheduleConfig::default();
        // clock-in 07:00, lunch 14:00 for 45 minutes would clock out at 15:00;
        // the redraw picks the third length that avoids minute :00
        let mut rng = ScriptedRandom::new([420, 0, 840, 45, 2]);
        let record = generate_closing_day(make_date("2025-01-10"), 435, &config, true, &mut rng);

        let (_, lunch_end) = record.lunch().unwrap();
        assert_eq!(hm(lunch_end), "14:48");
        assert_eq!(hm(record.checkout()), "15:03");
        assert_eq!(record.worked_minutes(), 435);
    }

    #[test]
    fn test_closing_split_day_with_fixed_lunch_falls_back_to_nudge() {
        let config = ScheduleConfig {
            lunch_duration: LunchDuration { min: 45, max: 45 },
            ..ScheduleConfig::default()
        };
        let mut rng = ScriptedRandom::new([420, 0, 840, 2]);
        let record = generate_closing_day(make_date("2025-01-10"), 435, &config, true, &mut rng);

        assert_eq!(hm(record.checkout()), "15:02");
        assert_eq!(record.worked_minutes(), 437);
    }

    #[test]
    fn test_closing_split_day_negative_target_works_nothing() {
        let config = ScheduleConfig::default();
        let mut rng = ScriptedRandom::lowest();
        let record = generate_closing_day(make_date("2025-01-10"), -20, &config, true, &mut rng);

        let (lunch_start, _) = record.lunch().unwrap();
        assert_eq!(lunch_start, record.checkin());
        assert_eq!(record.worked_minutes(), 0);
    }

    proptest! {
        #[test]
        fn test_closing_split_days_hit_target(seed in any::<u64>(), target in 0i64..720) {
            let config = ScheduleConfig::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let record =
                generate_closing_day(make_date("2025-01-10"), target, &config, true, &mut rng);

            let (lunch_start, lunch_end) = record.lunch().unwrap();
            prop_assert_eq!(record.worked_minutes(), target);
            prop_assert!(lunch_start >= record.checkin());
            prop_assert!(lunch_end > lunch_start);
            prop_assert!(record.checkout() >= lunch_end);
            prop_assert_ne!(record.checkin().minute(), record.checkout().minute());
        }

        #[test]
        fn test_split_days_never_share_minute(seed in any::<u64>(), target in 0i64..720) {
            let config = ScheduleConfig::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let record = generate_day(make_date("2025-01-06"), target, &config, true, &mut rng);

            let (lunch_start, lunch_end) = record.lunch().unwrap();
            prop_assert!(lunch_end > lunch_start);
            prop_assert!(record.checkout() >= lunch_end);
            prop_assert_ne!(record.checkin().minute(), record.checkout().minute());
        }

        #[test]
        fn test_continuous_days_match_target(seed in any::<u64>(), target in 0i64..720) {
            let config = ScheduleConfig::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let record = generate_day(make_date("2025-01-09"), target, &config, false, &mut rng);
            prop_assert_eq!(record.worked_minutes(), target);
        }
    }
}
