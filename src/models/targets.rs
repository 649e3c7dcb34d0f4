/// Gram targets derived from a daily calorie target.
///
/// Every field is truncated independently, so per-meal grams times meals can
/// fall short of the daily figure. Weekly totals are widened to `u64` so
/// seven days of any `u32` target cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroTargets {
    pub daily_protein_grams: u32,
    pub daily_carb_grams: u32,
    pub daily_fat_grams: u32,

    pub protein_per_meal: u32,
    pub carbs_per_meal: u32,
    pub fats_per_meal: u32,

    pub weekly_calories: u64,
    pub weekly_protein_grams: u64,
    pub weekly_carb_grams: u64,
    pub weekly_fat_grams: u64,
}
