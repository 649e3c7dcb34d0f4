mod log;
mod profile;
mod targets;

pub use log::{LOG_DAYS, WeeklyCalorieLog};
pub use profile::{Goal, NutritionProfile};
pub use targets::MacroTargets;
