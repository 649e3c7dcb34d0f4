pub mod menu;
pub mod palette;
pub mod prompts;
pub mod render;

pub use menu::MenuChoice;
pub use palette::Palette;
pub use prompts::{
    collect_profile, collect_weekly_log, prompt_day_calories, prompt_goal, prompt_hours,
    prompt_menu_selection, prompt_positive, prompt_text,
};
