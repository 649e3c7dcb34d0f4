use tracing::debug;

use crate::calculator::config::{CalculatorConfig, Macro};
use crate::error::{MacroError, Result};
use crate::models::MacroTargets;

/// Daily grams for one macro: floor(calories * percent / 100 / cal_per_gram).
///
/// Integer arithmetic so the truncation is exact.
pub fn daily_grams(daily_calories: u32, m: Macro, config: &CalculatorConfig) -> u32 {
    let numerator = u64::from(daily_calories) * u64::from(config.percent(m));
    let denominator = 100 * u64::from(config.calories_per_gram(m));
    if denominator == 0 {
        return 0;
    }
    // percent <= 100 keeps the quotient within u32
    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}

/// Calorie equivalent of a gram amount.
pub fn grams_to_calories(grams: u32, m: Macro, config: &CalculatorConfig) -> u64 {
    u64::from(grams) * u64::from(config.calories_per_gram(m))
}

/// Compute daily, per-meal and weekly macro targets.
///
/// Per-meal grams are truncated, so grams lost to rounding are not
/// redistributed across meals.
pub fn compute_macro_targets(
    daily_calories: u32,
    meals_per_day: u32,
    config: &CalculatorConfig,
) -> Result<MacroTargets> {
    if meals_per_day == 0 {
        return Err(MacroError::InvalidInput(
            "Meals per day must be a positive number".to_string(),
        ));
    }

    let protein = daily_grams(daily_calories, Macro::Protein, config);
    let carbs = daily_grams(daily_calories, Macro::Carbs, config);
    let fat = daily_grams(daily_calories, Macro::Fat, config);

    let days = u64::from(config.days_per_week);

    let targets = MacroTargets {
        daily_protein_grams: protein,
        daily_carb_grams: carbs,
        daily_fat_grams: fat,
        protein_per_meal: protein / meals_per_day,
        carbs_per_meal: carbs / meals_per_day,
        fats_per_meal: fat / meals_per_day,
        weekly_calories: u64::from(daily_calories) * days,
        weekly_protein_grams: u64::from(protein) * days,
        weekly_carb_grams: u64::from(carbs) * days,
        weekly_fat_grams: u64::from(fat) * days,
    };

    debug!(daily_calories, meals_per_day, ?targets, "computed macro targets");

    Ok(targets)
}
