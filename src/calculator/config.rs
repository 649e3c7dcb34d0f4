use crate::calculator::constants::*;

/// One of the three tracked macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

/// Fixed ratios and thresholds used by the calculator.
///
/// `Default` is built from the compiled constants. Tests construct their own
/// values to exercise the rules in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub protein_percent: u32,
    pub carb_percent: u32,
    pub fat_percent: u32,

    pub calories_per_gram_protein: u32,
    pub calories_per_gram_carbs: u32,
    pub calories_per_gram_fat: u32,

    pub days_per_week: u32,

    pub activity_high: f64,
    pub activity_medium: f64,

    pub cal_excess: u32,
    pub cal_high: u32,
    pub cal_medium: u32,
    pub cal_low: u32,

    pub meals_per_week_high: u32,
    pub meals_per_week_medium: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            protein_percent: PROTEIN_PERCENT,
            carb_percent: CARB_PERCENT,
            fat_percent: FAT_PERCENT,
            calories_per_gram_protein: CALORIES_PER_GRAM_PROTEIN,
            calories_per_gram_carbs: CALORIES_PER_GRAM_CARBS,
            calories_per_gram_fat: CALORIES_PER_GRAM_FAT,
            days_per_week: DAYS_PER_WEEK,
            activity_high: ACTIVITY_HIGH,
            activity_medium: ACTIVITY_MEDIUM,
            cal_excess: CAL_EXCESS,
            cal_high: CAL_HIGH,
            cal_medium: CAL_MEDIUM,
            cal_low: CAL_LOW,
            meals_per_week_high: MEALS_PER_WEEK_HIGH,
            meals_per_week_medium: MEALS_PER_WEEK_MEDIUM,
        }
    }
}

impl CalculatorConfig {
    /// Percent of daily calories assigned to a macro.
    pub fn percent(&self, m: Macro) -> u32 {
        match m {
            Macro::Protein => self.protein_percent,
            Macro::Carbs => self.carb_percent,
            Macro::Fat => self.fat_percent,
        }
    }

    pub fn calories_per_gram(&self, m: Macro) -> u32 {
        match m {
            Macro::Protein => self.calories_per_gram_protein,
            Macro::Carbs => self.calories_per_gram_carbs,
            Macro::Fat => self.calories_per_gram_fat,
        }
    }
}
