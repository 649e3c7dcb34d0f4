use dialoguer::Input;

use crate::calculator::record_weekly_log;
use crate::error::{MacroError, Result};
use crate::models::{Goal, NutritionProfile, WeeklyCalorieLog};

const POSITIVE_INT_MSG: &str = "That is not a valid answer. Please enter a positive number";
const NON_NEGATIVE_MSG: &str = "That is not a valid answer. Please enter a nonnegative number";
const GOAL_MSG: &str = "That is not a valid choice. Please enter 1, 2, or 3";
const BLANK_MSG: &str = "That is not a valid answer. Please try again";

// Validators. dialoguer re-prompts until these pass; text that does not parse
// as the target type is rejected before they run.

#[allow(clippy::ptr_arg)]
pub fn validate_non_blank(value: &String) -> std::result::Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(BLANK_MSG)
    } else {
        Ok(())
    }
}

pub fn validate_positive(value: &u32) -> std::result::Result<(), &'static str> {
    if *value > 0 { Ok(()) } else { Err(POSITIVE_INT_MSG) }
}

pub fn validate_hours(value: &f64) -> std::result::Result<(), &'static str> {
    if value.is_finite() && *value >= 0.0 {
        Ok(())
    } else {
        Err(NON_NEGATIVE_MSG)
    }
}

pub fn validate_goal_choice(value: &u32) -> std::result::Result<(), &'static str> {
    if Goal::from_choice(*value).is_some() {
        Ok(())
    } else {
        Err(GOAL_MSG)
    }
}

/// Prompt for a non-empty line of text.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(validate_non_blank)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompt for an integer greater than zero.
pub fn prompt_positive(prompt: &str) -> Result<u32> {
    Ok(Input::<u32>::new()
        .with_prompt(prompt)
        .validate_with(validate_positive)
        .interact_text()?)
}

/// Prompt for weekly workout hours (zero allowed).
pub fn prompt_hours(prompt: &str) -> Result<f64> {
    Ok(Input::<f64>::new()
        .with_prompt(prompt)
        .validate_with(validate_hours)
        .interact_text()?)
}

/// Prompt for the primary goal as 1, 2 or 3.
pub fn prompt_goal() -> Result<Goal> {
    println!("Select your primary goal:");
    for (i, goal) in Goal::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, goal);
    }
    println!();

    let choice = Input::<u32>::new()
        .with_prompt("Enter 1, 2, or 3")
        .validate_with(validate_goal_choice)
        .interact_text()?;

    Goal::from_choice(choice).ok_or_else(|| MacroError::InvalidInput(GOAL_MSG.to_string()))
}

/// Prompt for one day's calorie total. Zero is accepted.
pub fn prompt_day_calories(day_number: usize) -> Result<u32> {
    Ok(Input::<u32>::new()
        .with_prompt(format!("Enter your total calories for day {}", day_number))
        .interact_text()?)
}

/// Prompt for a raw menu selection. Parsing happens in the caller so an
/// unknown entry can redisplay the menu.
pub fn prompt_menu_selection() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Choose an option")
        .allow_empty(true)
        .interact_text()?)
}

/// Collect the per-session profile for an already known user name.
pub fn collect_profile(name: &str) -> Result<NutritionProfile> {
    println!("Hi {}!", name);
    println!();

    let protein_source = prompt_text("What is your favorite vegetarian protein source?")?;
    let daily_calorie_target = prompt_positive("How many calories are you targeting each day?")?;
    let meals_per_day = prompt_positive("How many meals do you eat per day?")?;
    let weekly_workout_hours = prompt_hours("How many hours per week do you weightlift?")?;
    let goal = prompt_goal()?;

    Ok(NutritionProfile {
        name: name.to_string(),
        protein_source,
        daily_calorie_target,
        meals_per_day,
        weekly_workout_hours,
        goal,
    })
}

/// Ask for each day of the week in turn.
pub fn collect_weekly_log() -> Result<WeeklyCalorieLog> {
    println!("Now let's log your actual calories for each day this week.");
    println!("(Enter zero or a positive number for each day.)");
    println!();

    let log = record_weekly_log(|day| prompt_day_calories(day + 1))?;

    println!("Thank you! Your weekly calorie log has been recorded.");
    println!();
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(&1).is_ok());
        assert!(validate_positive(&0).is_err());
    }

    #[test]
    fn test_validate_hours() {
        assert!(validate_hours(&0.0).is_ok());
        assert!(validate_hours(&7.5).is_ok());
        assert!(validate_hours(&-0.5).is_err());
        assert!(validate_hours(&f64::NAN).is_err());
        assert!(validate_hours(&f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_goal_choice() {
        assert!(validate_goal_choice(&1).is_ok());
        assert!(validate_goal_choice(&3).is_ok());
        assert!(validate_goal_choice(&0).is_err());
        assert!(validate_goal_choice(&4).is_err());
    }

    #[test]
    fn test_validate_non_blank() {
        assert!(validate_non_blank(&"Tofu".to_string()).is_ok());
        assert!(validate_non_blank(&"   ".to_string()).is_err());
        assert!(validate_non_blank(&String::new()).is_err());
    }
}
