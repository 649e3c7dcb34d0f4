pub mod advisory;
pub mod config;
pub mod constants;
pub mod macros;
pub mod recipe;
pub mod stats;

pub use advisory::{
    IntakeAdvice, MealFrequencyAdvice, NutritionAdvice, classify_meal_frequency,
    classify_nutrition, goal_guidance,
};
pub use config::{CalculatorConfig, Macro};
pub use constants::*;
pub use macros::{compute_macro_targets, daily_grams, grams_to_calories};
pub use recipe::{Recipe, SMOOTHIE};
pub use stats::{average_calories, max_calories, record_weekly_log};
