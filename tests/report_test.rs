use std::fs;
use std::io::Write;

use lift_macros_rs::calculator::{CalculatorConfig, compute_macro_targets};
use lift_macros_rs::interface::Palette;
use lift_macros_rs::models::{Goal, NutritionProfile};
use lift_macros_rs::report::{render_report, write_report};
use lift_macros_rs::session::{SessionOptions, run_from_profile};
use tempfile::{NamedTempFile, TempDir};

fn sample_profile() -> NutritionProfile {
    NutritionProfile {
        name: "Sam".to_string(),
        protein_source: "Black beans".to_string(),
        daily_calorie_target: 2500,
        meals_per_day: 4,
        weekly_workout_hours: 3.5,
        goal: Goal::Maintenance,
    }
}

#[test]
fn test_report_written_twice_is_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    let config = CalculatorConfig::default();
    let profile = sample_profile();
    let targets = compute_macro_targets(2500, 4, &config).unwrap();

    write_report(&path, &profile, &targets, &config).unwrap();
    let first = fs::read(&path).unwrap();

    write_report(&path, &profile, &targets, &config).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, render_report(&profile, &targets, &config).into_bytes());
}

#[test]
fn test_report_overwrites_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, "stale contents that are much longer than nothing\n".repeat(200)).unwrap();

    let config = CalculatorConfig::default();
    let profile = sample_profile();
    let targets = compute_macro_targets(2500, 4, &config).unwrap();
    write_report(&path, &profile, &targets, &config).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("stale"));
    assert!(written.starts_with(&"*".repeat(75)));
}

#[test]
fn test_report_values() {
    let config = CalculatorConfig::default();
    let targets = compute_macro_targets(2500, 4, &config).unwrap();
    let report = render_report(&sample_profile(), &targets, &config);

    // 2500 cal: protein 187, carbs 250, fat 83
    assert!(report.contains(&format!("{:.<50}Black beans\n", "Favorite protein source: ")));
    assert!(report.contains(&format!("{:.<50}17500\n", "Weekly calorie target: ")));
    assert!(report.contains(&format!("{:.<50}187 grams (748 cal)\n", "Protein: ")));
    assert!(report.contains(&format!("{:.<50}250 grams (1000 cal)\n", "Carbs: ")));
    assert!(report.contains(&format!("{:.<50}83 grams (747 cal)\n", "Fats: ")));
    assert!(report.contains(&format!("{:.<50}1309 grams\n", "Protein: ")));
    assert!(report.contains(&format!("{:.<50}46\n", "Protein grams per meal: ")));
    assert!(report.contains(&format!("{:.<50}3.50\n", "Weekly workout hours: ")));
}

#[test]
fn test_run_from_profile_writes_report_and_advice() {
    let dir = TempDir::new().unwrap();
    let options = SessionOptions {
        report_path: dir.path().join("report.txt"),
        palette: Palette::plain(),
        config: CalculatorConfig::default(),
    };

    let json = r#"{
        "name": "Sam",
        "protein_source": "Chickpeas",
        "daily_calories": 2100,
        "meals_per_day": 3,
        "weekly_workout_hours": 4,
        "goal": "fat_loss",
        "weekly_log": [2000, 2100, 1900, 2200, 2300, 1800, 2000]
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let mut out = Vec::new();
    run_from_profile(file.path(), &options, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(options.report_path.exists());
    assert!(text.contains("Report successfully generated"));
    assert!(text.contains("could increase protein slightly"));
    assert!(text.contains("Goal: Fat loss"));
    assert!(text.contains("Consider eating more often"));
    assert!(text.contains("Highest daily calories this week: 2300"));
}
