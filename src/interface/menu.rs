use std::str::FromStr;

use crate::error::MacroError;

/// Main menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMacros,
    GenerateReport,
    NutritionCheck,
    WeeklyLog,
    NewSession,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewMacros,
        MenuChoice::GenerateReport,
        MenuChoice::NutritionCheck,
        MenuChoice::WeeklyLog,
        MenuChoice::NewSession,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ViewMacros),
            2 => Some(MenuChoice::GenerateReport),
            3 => Some(MenuChoice::NutritionCheck),
            4 => Some(MenuChoice::WeeklyLog),
            5 => Some(MenuChoice::NewSession),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            MenuChoice::ViewMacros => 1,
            MenuChoice::GenerateReport => 2,
            MenuChoice::NutritionCheck => 3,
            MenuChoice::WeeklyLog => 4,
            MenuChoice::NewSession => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewMacros => "View Suggested Daily Macros",
            MenuChoice::GenerateReport => "Generate Report",
            MenuChoice::NutritionCheck => "Check Nutrition and Unlock Recipe",
            MenuChoice::WeeklyLog => "View Weekly Calorie Log",
            MenuChoice::NewSession => "Start a New Session",
            MenuChoice::Exit => "Exit Program",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(MenuChoice::from_number)
            .ok_or_else(|| MacroError::InvalidInput(format!("Unknown menu choice '{}'", s.trim())))
    }
}
