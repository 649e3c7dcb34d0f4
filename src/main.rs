use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lift_macros_rs::calculator::CalculatorConfig;
use lift_macros_rs::cli::{Cli, Command};
use lift_macros_rs::error::Result;
use lift_macros_rs::interface::Palette;
use lift_macros_rs::session::{SessionOptions, run_from_profile, run_interactive};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Nothing the user does ends the program with a failure status.
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
    }

    println!();
    println!("Program ended. Have a great day!");
}

/// Log to stderr so prompts and menus on stdout stay readable.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lift_macros_rs={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let options = SessionOptions {
        report_path: cli.report,
        palette: Palette::from_flag(cli.no_color),
        config: CalculatorConfig::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Session => run_interactive(&options),
        Command::Report { profile } => run_from_profile(&profile, &options, &mut io::stdout()),
    }
}
