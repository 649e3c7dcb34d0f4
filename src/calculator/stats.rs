use tracing::debug;

use crate::error::Result;
use crate::models::{LOG_DAYS, WeeklyCalorieLog};

/// Build a weekly log by asking `read_day` for each 0-based day index in order.
///
/// Every day is read exactly once; the first error aborts the recording.
pub fn record_weekly_log<F>(mut read_day: F) -> Result<WeeklyCalorieLog>
where
    F: FnMut(usize) -> Result<u32>,
{
    let mut days = [0u32; LOG_DAYS];
    for (day, slot) in days.iter_mut().enumerate() {
        *slot = read_day(day)?;
    }

    let log = WeeklyCalorieLog::new(days);
    debug!(?log, "weekly calorie log recorded");
    Ok(log)
}

/// Arithmetic mean of the seven logged days.
pub fn average_calories(log: &WeeklyCalorieLog) -> f64 {
    log.total() as f64 / LOG_DAYS as f64
}

/// Highest logged day. Seeded with day 1.
pub fn max_calories(log: &WeeklyCalorieLog) -> u32 {
    let days = log.days();
    let mut highest = days[0];
    for &cal in days.iter() {
        if cal > highest {
            highest = cal;
        }
    }
    highest
}
