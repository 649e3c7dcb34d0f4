use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary training goal. Only selects an advisory message; it never changes
/// the gram calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// All goals in menu order.
    pub const ALL: [Goal; 3] = [Goal::FatLoss, Goal::Maintenance, Goal::MuscleGain];

    /// Map a 1-based menu selection to a goal.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Goal::FatLoss),
            2 => Some(Goal::Maintenance),
            3 => Some(Goal::MuscleGain),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat loss",
            Goal::Maintenance => "Maintenance",
            Goal::MuscleGain => "Muscle gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user tells us about themselves for one session.
///
/// Immutable once collected; a new session builds a new profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub name: String,

    /// Favorite vegetarian protein source, echoed back in output.
    pub protein_source: String,

    #[serde(rename = "daily_calories")]
    pub daily_calorie_target: u32,

    pub meals_per_day: u32,

    pub weekly_workout_hours: f64,

    pub goal: Goal,
}

impl NutritionProfile {
    /// Meals eaten over a full week.
    pub fn meals_per_week(&self, days_per_week: u32) -> u32 {
        self.meals_per_day.saturating_mul(days_per_week)
    }

    /// Check the ranges the input prompts enforce.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.protein_source.trim().is_empty()
            && self.daily_calorie_target > 0
            && self.meals_per_day > 0
            && self.weekly_workout_hours.is_finite()
            && self.weekly_workout_hours >= 0.0
    }
}
