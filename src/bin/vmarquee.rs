//! `vmarquee` - responsive terminal marquee
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin vmarquee
//! cargo run --bin vmarquee -- --help
//! cargo run --bin vmarquee -- --text 'Breaking news | ' --delay 80
//! cargo run --bin vmarquee -- --headless-smoke
//! ```
//!
//! Press `q` to quit.

use std::process::ExitCode;
use std::time::Instant;
use vmarquee::config::HELP_TEXT;
use vmarquee::logging::init_file_logging;
use vmarquee::marquee::{Geometry, KeyMap};
use vmarquee::{App, Config, Error, HeadlessDisplay, ParseResult, Result, TerminalDisplay};

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {}", Error::InvalidArgument(msg));
            eprintln!("Run with --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(err) = init_file_logging(path) {
            eprintln!("Error: cannot open log file {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    let result = if config.headless_smoke {
        run_headless_smoke(&config)
    } else {
        run_interactive(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::NotATerminal) => {
            eprintln!("Error: stdout is not a terminal");
            eprintln!();
            eprintln!("vmarquee requires an interactive terminal to run.");
            eprintln!("For non-interactive use, try: vmarquee --headless-smoke");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(%err, "marquee failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Simulate a few scroll steps in memory and print the final frame.
fn run_headless_smoke(config: &Config) -> Result<()> {
    let geometry = config.headless_geometry();
    let display = HeadlessDisplay::new(geometry.rows, geometry.cols);
    let mut app = App::new(
        display,
        config.initial_state(geometry),
        KeyMap::default(),
        Instant::now(),
    );
    app.run_ticks(Instant::now(), config.frames)?;
    let offset = app.state().offset;
    let frames = app.frames();
    print!("{}", app.display().frame().to_text());
    eprintln!(
        "Headless smoke test PASSED ({}x{}, {frames} frames, offset {offset})",
        geometry.cols, geometry.rows
    );
    Ok(())
}

/// Run on the controlling terminal until the user quits.
fn run_interactive(config: &Config) -> Result<()> {
    let mut display = TerminalDisplay::open()?;
    let (rows, cols) = vmarquee::Display::size(&mut display)?;
    let state = config.initial_state(Geometry::new(rows, cols));
    let mut app =
        App::new(display, state, KeyMap::default(), Instant::now()).with_idle_sleep(config.idle_sleep);
    app.run()
}
