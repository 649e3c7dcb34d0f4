use serde::{Deserialize, Serialize};

/// Number of entries in a weekly log.
pub const LOG_DAYS: usize = 7;

/// Seven self-reported daily calorie totals, day 1 at index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyCalorieLog([u32; LOG_DAYS]);

impl WeeklyCalorieLog {
    pub fn new(days: [u32; LOG_DAYS]) -> Self {
        Self(days)
    }

    pub fn days(&self) -> &[u32; LOG_DAYS] {
        &self.0
    }

    /// Iterate as (1-based day number, calories).
    pub fn iter_days(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().enumerate().map(|(i, cal)| (i + 1, *cal))
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&cal| u64::from(cal)).sum()
    }
}
