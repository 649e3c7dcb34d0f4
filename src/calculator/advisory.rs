use crate::calculator::config::CalculatorConfig;
use crate::models::Goal;

/// Verdict on daily intake versus weekly training volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeAdvice {
    HighActivitySufficient,
    DecentIncreaseProtein,
    UnderFueling,
    ExceedsActivity,
    Balanced,
}

impl IntakeAdvice {
    pub fn message(&self) -> &'static str {
        match self {
            IntakeAdvice::HighActivitySufficient => {
                "Your intake is sufficient for a high activity week. Keep it up!"
            }
            IntakeAdvice::DecentIncreaseProtein => {
                "Your intake is decent for your activity level, but you could increase protein slightly."
            }
            IntakeAdvice::UnderFueling => {
                "You might be under fueling. Consider adding extra calories per day."
            }
            IntakeAdvice::ExceedsActivity => {
                "You may be eating more than your activity requires. Consider slightly reducing calories per day."
            }
            IntakeAdvice::Balanced => "Your calorie intake seems balanced for your activity level.",
        }
    }
}

/// Intake verdict plus the goal-specific guidance that always accompanies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionAdvice {
    pub intake: IntakeAdvice,
    pub goal: Goal,
}

impl NutritionAdvice {
    pub fn goal_message(&self) -> &'static str {
        goal_guidance(self.goal)
    }
}

/// Fixed guidance line for each goal.
pub fn goal_guidance(goal: Goal) -> &'static str {
    match goal {
        Goal::FatLoss => "Aim for a small, sustainable calorie deficit and prioritize protein.",
        Goal::Maintenance => "Keep your calorie intake steady and focus on consistency.",
        Goal::MuscleGain => {
            "Make sure you're in a slight calorie surplus and hitting your protein target."
        }
    }
}

/// Verdict on how often the user eats across the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealFrequencyAdvice {
    ExcellentForRecovery,
    EatMoreOften,
    CheckPortions,
    Appropriate,
}

impl MealFrequencyAdvice {
    pub fn message(&self) -> &'static str {
        match self {
            MealFrequencyAdvice::ExcellentForRecovery => {
                "Excellent meal frequency for muscle recovery! Try the smoothie below!"
            }
            MealFrequencyAdvice::EatMoreOften => {
                "Consider eating more often to support your training. Try the smoothie below!"
            }
            MealFrequencyAdvice::CheckPortions => {
                "You might be eating more than necessary, so ensure portion sizes are balanced. Try the smoothie below!"
            }
            MealFrequencyAdvice::Appropriate => {
                "Your meal frequency seems appropriate for your activity level. Try the smoothie below!"
            }
        }
    }
}

/// Classify intake against activity. Rules are checked in order and the first
/// match wins; the goal guidance is attached regardless of which rule fired.
pub fn classify_nutrition(
    daily_calories: u32,
    weekly_workout_hours: f64,
    goal: Goal,
    config: &CalculatorConfig,
) -> NutritionAdvice {
    let hours = weekly_workout_hours;

    let intake = if hours >= config.activity_high && daily_calories >= config.cal_high {
        IntakeAdvice::HighActivitySufficient
    } else if hours >= config.activity_medium && daily_calories >= config.cal_medium {
        IntakeAdvice::DecentIncreaseProtein
    } else if hours < config.activity_medium && daily_calories < config.cal_low {
        IntakeAdvice::UnderFueling
    } else if hours < config.activity_medium && daily_calories > config.cal_excess {
        IntakeAdvice::ExceedsActivity
    } else {
        IntakeAdvice::Balanced
    };

    NutritionAdvice { intake, goal }
}

/// Classify weekly meal count against activity. First match wins.
pub fn classify_meal_frequency(
    meals_per_week: u32,
    weekly_workout_hours: f64,
    config: &CalculatorConfig,
) -> MealFrequencyAdvice {
    let hours = weekly_workout_hours;
    let in_recovery_band =
        (config.meals_per_week_medium..=config.meals_per_week_high).contains(&meals_per_week);

    if in_recovery_band && hours >= config.activity_high {
        MealFrequencyAdvice::ExcellentForRecovery
    } else if meals_per_week < config.meals_per_week_medium && hours >= config.activity_medium {
        MealFrequencyAdvice::EatMoreOften
    } else if meals_per_week > config.meals_per_week_high {
        MealFrequencyAdvice::CheckPortions
    } else {
        MealFrequencyAdvice::Appropriate
    }
}
