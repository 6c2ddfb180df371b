mod app;
mod cli;
mod config;
mod error;
mod events;
mod logger;
mod messages;
mod models;
mod once;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use app::{App, AppEvent};
use cli::{CliConfig, StartValues};
use config::Settings;

/// How long to wait for input before redrawing
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::parse();

    if config.once {
        logger::init_stderr_logger(config.verbose);
    } else {
        let log_path = config
            .log_file
            .clone()
            .unwrap_or_else(logger::default_log_path);
        logger::init_file_logger(&log_path, config.verbose)
            .with_context(|| format!("opening log file {}", log_path.display()))?;
    }

    let settings =
        Settings::resolve(config.config.as_deref()).context("loading tipcalc settings")?;
    let start = config.start_values(&settings);

    if config.once {
        let code = once::run_once(
            start,
            config.json,
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &mut io::stderr(),
        )
        .context("one-shot calculation failed")?;
        return Ok(ExitCode::from(code));
    }

    run_screen(start)?;
    Ok(ExitCode::SUCCESS)
}

/// Open the calculator screen and run until the user quits
fn run_screen(start: StartValues) -> anyhow::Result<()> {
    let mut app = App::new(start);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    info!(percent = app.percent, "application ready");

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result.context("calculator screen failed")
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(app_event) = events::map_key(key, app.focus) {
                    app.handle_event(app_event);
                }
            }
        }

        app.handle_event(AppEvent::Tick(Instant::now()));
    }

    Ok(())
}
