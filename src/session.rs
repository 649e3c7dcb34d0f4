use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::calculator::{CalculatorConfig, SMOOTHIE, compute_macro_targets};
use crate::error::Result;
use crate::interface::{
    MenuChoice, Palette, collect_profile, collect_weekly_log, prompt_menu_selection, prompt_text,
    render,
};
use crate::models::{MacroTargets, NutritionProfile, WeeklyCalorieLog};
use crate::report::write_report;
use crate::state::load_profile;

/// Settings shared by every session in one run of the program.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub report_path: PathBuf,
    pub palette: Palette,
    pub config: CalculatorConfig,
}

/// One set of inputs and the figures derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub profile: NutritionProfile,
    pub targets: MacroTargets,
    pub log: WeeklyCalorieLog,
}

impl Session {
    pub fn new(
        profile: NutritionProfile,
        log: WeeklyCalorieLog,
        config: &CalculatorConfig,
    ) -> Result<Self> {
        let targets =
            compute_macro_targets(profile.daily_calorie_target, profile.meals_per_day, config)?;
        Ok(Self {
            profile,
            targets,
            log,
        })
    }
}

/// What the menu loop should do after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    NewSession,
    Exit,
}

/// Carry out one menu selection, writing its output to `out`.
pub fn handle_choice<W: Write>(
    session: &Session,
    choice: MenuChoice,
    options: &SessionOptions,
    out: &mut W,
) -> Result<MenuOutcome> {
    debug!(?choice, "menu selection");
    let palette = &options.palette;

    match choice {
        MenuChoice::ViewMacros => {
            write!(out, "{}", render::daily_macros(&session.profile, &session.targets, palette))?;
            writeln!(out)?;
        }
        MenuChoice::GenerateReport => {
            write!(out, "{}", render::report_notice(&options.report_path, palette))?;
            generate_report(session, &options.report_path, options, out)?;
        }
        MenuChoice::NutritionCheck => {
            write!(
                out,
                "{}",
                render::nutrition_check(&session.profile, &SMOOTHIE, &options.config, palette)
            )?;
            writeln!(out)?;
        }
        MenuChoice::WeeklyLog => {
            write!(out, "{}", render::weekly_log(&session.log, palette))?;
            writeln!(out)?;
        }
        MenuChoice::NewSession => {
            write!(out, "{}", render::new_session(palette))?;
            writeln!(out)?;
            return Ok(MenuOutcome::NewSession);
        }
        MenuChoice::Exit => {
            write!(out, "{}", render::farewell(&session.profile.name, palette))?;
            return Ok(MenuOutcome::Exit);
        }
    }

    Ok(MenuOutcome::Continue)
}

/// Write the report file. A file that cannot be written is reported to the
/// user and the session carries on.
pub fn generate_report<W: Write>(
    session: &Session,
    path: &Path,
    options: &SessionOptions,
    out: &mut W,
) -> Result<()> {
    match write_report(path, &session.profile, &session.targets, &options.config) {
        Ok(()) => write!(out, "{}", render::report_written(path, &options.palette))?,
        Err(e) => {
            warn!(error = %e, "report generation skipped");
            write!(out, "{}", render::report_failed(&e.to_string(), &options.palette))?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Run sessions until the user exits. The name is asked once; every new
/// session collects fresh inputs.
pub fn run_interactive(options: &SessionOptions) -> Result<()> {
    let mut out = io::stdout();

    write!(out, "{}", render::intro_banner(&options.palette))?;
    writeln!(out)?;
    let name = prompt_text("What is your name?")?;

    let collect = |name: &str| {
        let profile = collect_profile(name)?;
        let log = collect_weekly_log()?;
        Session::new(profile, log, &options.config)
    };

    run_sessions(&name, options, collect, prompt_menu_selection, &mut out)
}

/// Drive sessions for `name` until the menu reports an exit.
///
/// `collect` builds each session's inputs and `select` supplies raw menu
/// entries, so the loop runs the same against the console or a script.
pub fn run_sessions<C, S, W>(
    name: &str,
    options: &SessionOptions,
    mut collect: C,
    mut select: S,
    out: &mut W,
) -> Result<()>
where
    C: FnMut(&str) -> Result<Session>,
    S: FnMut() -> Result<String>,
    W: Write,
{
    loop {
        let session = collect(name)?;

        match menu_loop(&session, options, &mut select, out)? {
            MenuOutcome::NewSession => continue,
            MenuOutcome::Exit | MenuOutcome::Continue => return Ok(()),
        }
    }
}

/// Show the menu and act on selections until one ends the session.
/// Unknown entries print an error and show the menu again.
pub fn menu_loop<S, W>(
    session: &Session,
    options: &SessionOptions,
    mut select: S,
    out: &mut W,
) -> Result<MenuOutcome>
where
    S: FnMut() -> Result<String>,
    W: Write,
{
    loop {
        write!(out, "{}", render::menu(&options.palette))?;
        writeln!(out)?;
        out.flush()?;

        let selection = select()?;
        writeln!(out)?;

        let choice = match selection.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "rejected menu selection");
                write!(out, "{}", render::invalid_choice(&options.palette))?;
                writeln!(out)?;
                continue;
            }
        };

        match handle_choice(session, choice, options, out)? {
            MenuOutcome::Continue => {}
            outcome => return Ok(outcome),
        }
    }
}

/// Produce the report from a saved profile without prompting, then show the
/// advice (and the weekly log when the file has one).
pub fn run_from_profile<W: Write>(
    profile_path: &Path,
    options: &SessionOptions,
    out: &mut W,
) -> Result<()> {
    let file = load_profile(profile_path)?;
    let has_log = file.weekly_log.is_some();
    let log = file.weekly_log.unwrap_or_default();
    let session = Session::new(file.profile, log, &options.config)?;

    generate_report(&session, &options.report_path, options, out)?;
    handle_choice(&session, MenuChoice::NutritionCheck, options, out)?;
    if has_log {
        handle_choice(&session, MenuChoice::WeeklyLog, options, out)?;
    }
    Ok(())
}
