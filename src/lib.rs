pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod session;
pub mod state;

pub use error::{MacroError, Result};
pub use models::{Goal, MacroTargets, NutritionProfile, WeeklyCalorieLog};
