use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::calculator::{CalculatorConfig, Macro, grams_to_calories};
use crate::error::{MacroError, Result};
use crate::models::{MacroTargets, NutritionProfile};
use crate::report::layout::{banner, dotted, hours};

pub const DEFAULT_REPORT_PATH: &str = "report.txt";

/// Render the plain-text report.
///
/// Output depends only on the arguments, so rendering twice yields identical
/// bytes.
pub fn render_report(
    profile: &NutritionProfile,
    targets: &MacroTargets,
    config: &CalculatorConfig,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sections(&mut out, profile, targets, config);
    out
}

fn write_sections(
    out: &mut String,
    profile: &NutritionProfile,
    targets: &MacroTargets,
    config: &CalculatorConfig,
) -> std::fmt::Result {
    let protein_cal = grams_to_calories(targets.daily_protein_grams, Macro::Protein, config);
    let carb_cal = grams_to_calories(targets.daily_carb_grams, Macro::Carbs, config);
    let fat_cal = grams_to_calories(targets.daily_fat_grams, Macro::Fat, config);

    writeln!(out, "{}", banner())?;
    writeln!(out, "Vegetarian Nutrition for Weightlifters Report")?;
    writeln!(out, "{}", banner())?;
    writeln!(out)?;

    writeln!(out, "Information you provided:")?;
    writeln!(out, "{}", dotted("Favorite protein source: ", &profile.protein_source))?;
    writeln!(out, "{}", dotted("Daily calorie target: ", profile.daily_calorie_target))?;
    writeln!(out, "{}", dotted("Weekly calorie target: ", targets.weekly_calories))?;
    writeln!(out, "{}", dotted("Meals per day: ", profile.meals_per_day))?;
    writeln!(
        out,
        "{}",
        dotted("Weekly workout hours: ", hours(profile.weekly_workout_hours))
    )?;
    writeln!(out)?;

    writeln!(out, "Suggested weekly macros:")?;
    writeln!(out, "{} grams", dotted("Protein: ", targets.weekly_protein_grams))?;
    writeln!(out, "{} grams", dotted("Carbs: ", targets.weekly_carb_grams))?;
    writeln!(out, "{} grams", dotted("Fats: ", targets.weekly_fat_grams))?;
    writeln!(out)?;

    writeln!(out, "Suggested total daily macros:")?;
    writeln!(
        out,
        "{} grams ({} cal)",
        dotted("Protein: ", targets.daily_protein_grams),
        protein_cal
    )?;
    writeln!(
        out,
        "{} grams ({} cal)",
        dotted("Carbs: ", targets.daily_carb_grams),
        carb_cal
    )?;
    writeln!(
        out,
        "{} grams ({} cal)",
        dotted("Fats: ", targets.daily_fat_grams),
        fat_cal
    )?;
    writeln!(out)?;

    writeln!(out, "Per meal macro targets:")?;
    writeln!(out, "{}", dotted("Protein grams per meal: ", targets.protein_per_meal))?;
    writeln!(out, "{}", dotted("Carbs grams per meal: ", targets.carbs_per_meal))?;
    writeln!(out, "{}", dotted("Fats grams per meal: ", targets.fats_per_meal))?;
    writeln!(out)?;

    writeln!(out, "{}", banner())?;
    writeln!(
        out,
        "Keep fueling with {} to hit {} grams of protein daily!",
        profile.protein_source, targets.daily_protein_grams
    )?;
    writeln!(
        out,
        "Remember your {} hours of weightlifting per week...",
        hours(profile.weekly_workout_hours)
    )?;
    writeln!(out, "Keep lifting heavy, {}!", profile.name)?;
    writeln!(out)?;

    Ok(())
}

/// Render the report and overwrite `path` with it.
///
/// The file is created, written and closed within this call.
pub fn write_report<P: AsRef<Path>>(
    path: P,
    profile: &NutritionProfile,
    targets: &MacroTargets,
    config: &CalculatorConfig,
) -> Result<()> {
    let path = path.as_ref();
    let contents = render_report(profile, targets, config);

    let mut file = File::create(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "could not open report file");
        MacroError::Report {
            path: path.to_path_buf(),
            source,
        }
    })?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    info!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
