use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::DEFAULT_REPORT_PATH;

/// Lift Macros: daily and per-meal macro targets for vegetarian weightlifters.
#[derive(Parser, Debug)]
#[command(name = "lift_macros")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Where to write the report (overwritten each time).
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Disable colored console output.
    #[arg(long)]
    pub no_color: bool,

    /// Log debug events to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive session with the main menu.
    Session,

    /// Write the report from a saved JSON profile without prompting.
    Report {
        /// Path to the profile JSON file.
        #[arg(short, long)]
        profile: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}
