use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MacroError, Result};
use crate::models::{NutritionProfile, WeeklyCalorieLog};

/// A saved profile used to produce a report without prompting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFile {
    #[serde(flatten)]
    pub profile: NutritionProfile,

    #[serde(default)]
    pub weekly_log: Option<WeeklyCalorieLog>,
}

/// Load a profile from a JSON file.
///
/// Values are held to the same ranges the interactive prompts enforce.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileFile> {
    let content = fs::read_to_string(path.as_ref())?;
    let file: ProfileFile = serde_json::from_str(&content)?;

    if !file.profile.is_valid() {
        return Err(MacroError::InvalidInput(
            "Profile needs a name, a protein source, positive calories and meals, and nonnegative workout hours"
                .to_string(),
        ));
    }

    debug!(path = %path.as_ref().display(), "profile loaded");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_profile() {
        let json = r#"{
            "name": "Sam",
            "protein_source": "Lentils",
            "daily_calories": 2400,
            "meals_per_day": 5,
            "weekly_workout_hours": 6.5,
            "goal": "muscle_gain",
            "weekly_log": [2000, 2100, 1900, 2200, 2300, 1800, 2000]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_profile(file.path()).unwrap();
        assert_eq!(loaded.profile.name, "Sam");
        assert_eq!(loaded.profile.daily_calorie_target, 2400);
        assert_eq!(loaded.profile.goal, Goal::MuscleGain);
        assert_eq!(loaded.weekly_log.unwrap().days()[4], 2300);
    }

    #[test]
    fn test_log_is_optional() {
        let json = r#"{"name": "Sam", "protein_source": "Tofu", "daily_calories": 1800,
            "meals_per_day": 3, "weekly_workout_hours": 0, "goal": "fat_loss"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_profile(file.path()).unwrap();
        assert!(loaded.weekly_log.is_none());
    }

    #[test]
    fn test_zero_meals_rejected() {
        let json = r#"{"name": "Sam", "protein_source": "Tofu", "daily_calories": 1800,
            "meals_per_day": 0, "weekly_workout_hours": 2, "goal": "maintenance"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_profile(file.path()),
            Err(MacroError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_log_must_have_seven_days() {
        let json = r#"{"name": "Sam", "protein_source": "Tofu", "daily_calories": 1800,
            "meals_per_day": 3, "weekly_workout_hours": 2, "goal": "maintenance",
            "weekly_log": [1, 2, 3]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_profile(file.path()), Err(MacroError::Json(_))));
    }
}
