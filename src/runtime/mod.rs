//! Terminal runtime: command line, settings, logging, terminal setup and
//! teardown around the event loop.

use std::io;
use std::sync::mpsc;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::config::Settings;
use crate::error::VinylResult;
use crate::logging;
use crate::timer::{Effects, TimerEvent, TimerPeriods};

mod event_loop;
mod settings;
mod startup;

pub fn run() -> VinylResult<()> {
    let cli = startup::Cli::parse();
    if cli.print_default_config {
        print!("{}", Settings::default().to_toml()?);
        return Ok(());
    }

    let mut settings = settings::load_settings();
    startup::apply_cli(&mut settings, &cli);

    match logging::init(&settings.log) {
        Ok(Some(path)) => info!(path = %path.display(), "logging started"),
        Ok(None) => {}
        Err(e) => eprintln!("vinyl: running without a log: {e}"),
    }
    settings::log_source();
    info!(view = ?settings.ui.start_view, "starting");

    let mut app = App::new(&settings);
    let (timer_tx, timer_rx) = mpsc::channel::<TimerEvent>();
    let mut effects = Effects::new(timer_tx, TimerPeriods::from(&settings));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut app, &mut effects, &timer_rx);
    effects.stop_all();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &run_result {
        Ok(()) => info!("shutdown complete"),
        Err(e) => warn!(error = %e, "event loop failed"),
    }
    run_result
}

#[cfg(test)]
mod tests;
