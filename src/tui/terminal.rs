//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::services::BudgetDesk;

use super::app::{Action, App};
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn spawn_load(desk: &BudgetDesk) {
    let desk = desk.clone();
    tokio::spawn(async move {
        let outcome = desk.load().await;
        debug!(?outcome, "background load finished");
    });
}

fn spawn_submit(desk: &BudgetDesk) {
    let desk = desk.clone();
    tokio::spawn(async move {
        if let Err(e) = desk.submit().await {
            warn!(error = %e, "budget submission failed");
        }
    });
}

/// Run the TUI application
///
/// Loads and submissions run on background tasks; the loop only redraws
/// from the shared state, so input stays responsive while requests are in
/// flight.
pub async fn run_tui(desk: BudgetDesk, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(desk, settings);
    let mut events = EventHandler::new(settings.tick_rate());

    spawn_load(&app.desk);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| super::views::render(frame, &mut app)) {
            break Err(e.into());
        }

        let Some(event) = events.next().await else {
            break Ok(());
        };

        if matches!(event, Event::Tick) {
            app.state().expire_notifications(Instant::now());
        }

        match handle_event(&mut app, event) {
            Ok(Action::None) => {}
            Ok(Action::Reload) => spawn_load(&app.desk),
            Ok(Action::Submit) => spawn_submit(&app.desk),
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal()?;
    result
}
