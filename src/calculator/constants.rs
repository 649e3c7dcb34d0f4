/// Share of daily calories assigned to protein, in percent.
pub const PROTEIN_PERCENT: u32 = 30;

/// Share of daily calories assigned to carbohydrates, in percent.
pub const CARB_PERCENT: u32 = 40;

/// Share of daily calories assigned to fat, in percent.
pub const FAT_PERCENT: u32 = 30;

/// Calories per gram of each macro.
pub const CALORIES_PER_GRAM_PROTEIN: u32 = 4;
pub const CALORIES_PER_GRAM_CARBS: u32 = 4;
pub const CALORIES_PER_GRAM_FAT: u32 = 9;

/// Days in the planning week.
pub const DAYS_PER_WEEK: u32 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Activity thresholds (weightlifting hours per week)
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_HIGH: f64 = 5.0;
pub const ACTIVITY_MEDIUM: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie thresholds (per day)
// ─────────────────────────────────────────────────────────────────────────────

pub const CAL_EXCESS: u32 = 2500;
pub const CAL_HIGH: u32 = 2200;
pub const CAL_MEDIUM: u32 = 2000;
pub const CAL_LOW: u32 = 1800;

// ─────────────────────────────────────────────────────────────────────────────
// Meal frequency thresholds (per day; weekly bounds are derived)
// ─────────────────────────────────────────────────────────────────────────────

pub const MEALS_PER_DAY_HIGH: u32 = 6;
pub const MEALS_PER_DAY_MEDIUM: u32 = 4;

pub const MEALS_PER_WEEK_HIGH: u32 = MEALS_PER_DAY_HIGH * DAYS_PER_WEEK;
pub const MEALS_PER_WEEK_MEDIUM: u32 = MEALS_PER_DAY_MEDIUM * DAYS_PER_WEEK;

const _: () = assert!(PROTEIN_PERCENT + CARB_PERCENT + FAT_PERCENT == 100);
