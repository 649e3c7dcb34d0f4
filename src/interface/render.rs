use std::fmt::{self, Write as _};
use std::path::Path;

use crate::calculator::{
    CalculatorConfig, MealFrequencyAdvice, NutritionAdvice, Recipe, average_calories,
    classify_meal_frequency, classify_nutrition, max_calories,
};
use crate::interface::menu::MenuChoice;
use crate::interface::palette::Palette;
use crate::models::{MacroTargets, NutritionProfile, WeeklyCalorieLog};
use crate::report::layout::{banner, dotted, hours};

// Every renderer returns the finished text; callers decide where it goes.

/// Run `write` against a fresh buffer. Writing into a String cannot fail.
fn build<F>(write: F) -> String
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut out = String::new();
    let _ = write(&mut out);
    out
}

/// Welcome banner shown once at startup.
pub fn intro_banner(palette: &Palette) -> String {
    let text = build(|out| {
        writeln!(out, "{}", banner())?;
        writeln!(
            out,
            "{:<5} Welcome to the Vegetarian Nutrition for Weightlifters Program! {:>5}",
            "", ""
        )?;
        writeln!(out, "{}", banner())?;
        writeln!(out)?;
        writeln!(out, "Let's learn more about you!")
    });
    palette.header(&text)
}

pub fn menu(palette: &Palette) -> String {
    let text = build(|out| {
        writeln!(out, "{}", banner())?;
        writeln!(out, "MAIN MENU:")?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    });
    palette.header(&text)
}

pub fn invalid_choice(palette: &Palette) -> String {
    palette.error("Invalid choice. Please select 1-6.\n")
}

/// Menu option 1: inputs echoed back with daily and per-meal targets.
pub fn daily_macros(
    profile: &NutritionProfile,
    targets: &MacroTargets,
    palette: &Palette,
) -> String {
    let heading = format!("{}\nYou chose to view your suggested daily macros!\n", banner());
    let body = build(|out| write_daily_macros(out, profile, targets));

    let mut text = palette.sub_heading(&heading);
    text.push('\n');
    text.push_str(&body);
    text.push_str(&palette.sub_heading(&closing_lines(profile, targets)));
    text
}

fn write_daily_macros(
    out: &mut String,
    profile: &NutritionProfile,
    targets: &MacroTargets,
) -> fmt::Result {
    writeln!(out, "Here is the information you provided:")?;
    writeln!(out, "{}", dotted("Favorite protein source: ", &profile.protein_source))?;
    writeln!(out, "{}", dotted("Daily calorie target: ", profile.daily_calorie_target))?;
    writeln!(out, "{}", dotted("Meals per day: ", profile.meals_per_day))?;
    writeln!(
        out,
        "{}",
        dotted("Weekly workout hours: ", hours(profile.weekly_workout_hours))
    )?;
    writeln!(out)?;

    writeln!(out, "Suggested daily macros:")?;
    writeln!(out, "{} grams", dotted("Protein: ", targets.daily_protein_grams))?;
    writeln!(out, "{} grams", dotted("Carbs: ", targets.daily_carb_grams))?;
    writeln!(out, "{} grams", dotted("Fats: ", targets.daily_fat_grams))?;
    writeln!(out)?;

    writeln!(out, "Per meal macro targets:")?;
    writeln!(out, "{}", dotted("Protein grams per meal: ", targets.protein_per_meal))?;
    writeln!(out, "{}", dotted("Carbs grams per meal: ", targets.carbs_per_meal))?;
    writeln!(out, "{}", dotted("Fats grams per meal: ", targets.fats_per_meal))
}

fn closing_lines(profile: &NutritionProfile, targets: &MacroTargets) -> String {
    format!(
        "{}\nKeep fueling with {} to hit {} grams of protein daily!\n\
         Remember your {} hours of weightlifting per week...\n\
         Keep lifting heavy, {}!\n",
        banner(),
        profile.protein_source,
        targets.daily_protein_grams,
        hours(profile.weekly_workout_hours),
        profile.name
    )
}

/// Menu option 2 preamble, printed before the file is written.
pub fn report_notice(path: &Path, palette: &Palette) -> String {
    palette.sub_heading(&format!(
        "{}\nYou chose to generate a report of your suggested daily and weekly macros!\n\
         Open '{}' to view, save, or print it.\n\n{}\n",
        banner(),
        path.display(),
        banner()
    ))
}

pub fn report_written(path: &Path, palette: &Palette) -> String {
    palette.sub_heading(&format!("Report successfully generated: {}\n", path.display()))
}

pub fn report_failed(message: &str, palette: &Palette) -> String {
    palette.error(&format!("Error: {}\n", message))
}

/// Menu option 3: intake and meal-frequency advice followed by the recipe.
pub fn nutrition_check(
    profile: &NutritionProfile,
    recipe: &Recipe,
    config: &CalculatorConfig,
    palette: &Palette,
) -> String {
    let nutrition = classify_nutrition(
        profile.daily_calorie_target,
        profile.weekly_workout_hours,
        profile.goal,
        config,
    );
    let frequency = classify_meal_frequency(
        profile.meals_per_week(config.days_per_week),
        profile.weekly_workout_hours,
        config,
    );

    let mut text = palette.sub_heading(&format!(
        "{}\nChecking your calorie intake vs activity level...\n",
        banner()
    ));
    text.push('\n');
    text.push_str(&advice(&nutrition, frequency));
    text.push_str(&palette.recipe(&recipe_card(recipe)));
    text.push_str(&palette.sub_heading(&format!("{}\n", banner())));
    text
}

/// Advice text without any styling.
pub fn advice(nutrition: &NutritionAdvice, frequency: MealFrequencyAdvice) -> String {
    format!(
        "{}\n\nGoal: {}\n{}\n\n{}\n\n",
        nutrition.intake.message(),
        nutrition.goal,
        nutrition.goal_message(),
        frequency.message()
    )
}

pub fn recipe_card(recipe: &Recipe) -> String {
    build(|out| {
        writeln!(out, "{}:", recipe.title)?;
        for ingredient in recipe.ingredients {
            writeln!(out, "- {}", ingredient)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", recipe.instructions)?;
        writeln!(
            out,
            "Protein: {}g | Carbs: {}g | Fat: {}g",
            recipe.protein_grams, recipe.carb_grams, recipe.fat_grams
        )?;
        writeln!(out)
    })
}

/// Menu option 4: the seven logged days with average and highest.
///
/// The average is shown truncated to whole calories.
pub fn weekly_log(log: &WeeklyCalorieLog, palette: &Palette) -> String {
    let body = build(|out| {
        writeln!(out, "{:<10}{:>18}", "Day", "Calories")?;
        writeln!(out, "{}", banner())?;
        for (day, calories) in log.iter_days() {
            writeln!(out, "{:<10}{:>15}", day, calories)?;
        }
        writeln!(out)?;

        let average = average_calories(log);
        writeln!(out, "Average daily calories this week: {}", average.trunc() as u64)?;
        writeln!(out, "Highest daily calories this week: {}", max_calories(log))?;
        writeln!(out)
    });

    let mut text = palette.sub_heading(&format!("{}\nYour Weekly Calorie Log:\n", banner()));
    text.push('\n');
    text.push_str(&body);
    text.push_str(&palette.sub_heading(&format!("{}\n", banner())));
    text
}

pub fn new_session(palette: &Palette) -> String {
    palette.sub_heading("Starting a new session...\n")
}

pub fn farewell(name: &str, palette: &Palette) -> String {
    palette.sub_heading(&format!(
        "Thanks for using the program, {}! Keep lifting strong!\n{}\n",
        name,
        banner()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{SMOOTHIE, compute_macro_targets};
    use crate::models::Goal;

    fn profile() -> NutritionProfile {
        NutritionProfile {
            name: "Sam".to_string(),
            protein_source: "Seitan".to_string(),
            daily_calorie_target: 2300,
            meals_per_day: 5,
            weekly_workout_hours: 5.5,
            goal: Goal::MuscleGain,
        }
    }

    #[test]
    fn test_menu_lists_all_options() {
        let text = menu(&Palette::plain());
        assert!(text.contains("1. View Suggested Daily Macros"));
        assert!(text.contains("5. Start a New Session"));
        assert!(text.contains("6. Exit Program"));
    }

    #[test]
    fn test_daily_macros_shows_targets() {
        let config = CalculatorConfig::default();
        let p = profile();
        let targets =
            compute_macro_targets(p.daily_calorie_target, p.meals_per_day, &config).unwrap();
        let text = daily_macros(&p, &targets, &Palette::plain());

        // 2300 * 0.30 / 4 = 172.5
        assert!(text.contains(&format!("{:.<50}172 grams", "Protein: ")));
        assert!(text.contains(&format!("{:.<50}34", "Protein grams per meal: ")));
        assert!(text.contains("Keep lifting heavy, Sam!"));
    }

    #[test]
    fn test_nutrition_check_high_activity_muscle_gain() {
        let config = CalculatorConfig::default();
        let text = nutrition_check(&profile(), &SMOOTHIE, &config, &Palette::plain());

        assert!(text.contains("sufficient for a high activity week"));
        assert!(text.contains("Goal: Muscle gain"));
        assert!(text.contains("slight calorie surplus"));
        // 35 meals per week at 5.5 hours
        assert!(text.contains("Excellent meal frequency for muscle recovery!"));
        assert!(text.contains("Oatmeal Smoothie Recipe:"));
        assert!(text.contains("Protein: 30g | Carbs: 37g | Fat: 13g"));
    }

    #[test]
    fn test_weekly_log_truncates_average() {
        let log = WeeklyCalorieLog::new([2000, 2100, 1900, 2200, 2300, 1800, 2000]);
        let text = weekly_log(&log, &Palette::plain());

        assert!(text.contains("Average daily calories this week: 2042\n"));
        assert!(text.contains("Highest daily calories this week: 2300\n"));
        assert!(text.contains(&format!("{:<10}{:>15}\n", 5, 2300)));
    }

    #[test]
    fn test_plain_screens_keep_line_layout() {
        let palette = Palette::plain();

        let intro = intro_banner(&palette);
        let lines: Vec<&str> = intro.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], banner());
        assert_eq!(lines[2], banner());
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Let's learn more about you!");

        let card = recipe_card(&SMOOTHIE);
        assert!(card.starts_with("Oatmeal Smoothie Recipe:\n- "));
        assert!(card.ends_with("Protein: 30g | Carbs: 37g | Fat: 13g\n\n"));
        assert_eq!(
            card.lines().filter(|l| l.starts_with("- ")).count(),
            SMOOTHIE.ingredients.len()
        );
    }
}
