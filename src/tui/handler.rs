//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Network work is never started here; the returned
//! [`Action`] tells the event loop what to spawn.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{Action, App, InputMode};
use super::dialogs::create_budget::edit_field;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<Action> {
    match event {
        Event::Key(key) => Ok(handle_key_event(app, key)),
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => Ok(Action::None),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Action::None;
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.move_end();
        }

        KeyCode::Char('s') => {
            let mut state = app.state();
            let next = state.sort_key().cycle();
            state.set_sort_key(next);
        }

        KeyCode::Char('c') | KeyCode::Tab => app.active_view = app.active_view.toggle(),

        KeyCode::Char('n') | KeyCode::Char('a') => app.open_create_dialog(),

        KeyCode::Char('r') => {
            app.clear_status();
            return Action::Reload;
        }

        KeyCode::Char('x') => {
            let mut state = app.state();
            state.dismiss_error();
            state.dismiss_success();
        }

        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.state().view().len();
            app.move_down(len);
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Esc => {
            if !app.search_input.value().is_empty() {
                app.search_input.clear();
                app.sync_search();
            }
            app.clear_status();
        }

        _ => {}
    }
    Action::None
}

/// Handle keys while typing into the search box
fn handle_search_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Esc => {
            app.search_input.clear();
            app.sync_search();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.sync_search();
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.sync_search();
        }
        KeyCode::Delete => {
            app.search_input.delete();
            app.sync_search();
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),
        _ => {}
    }
    Action::None
}

/// Handle keys in the create budget dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Action {
    let submitting = app.state().is_submitting();

    match key.code {
        KeyCode::Esc => {
            if app.state().cancel_create_dialog() {
                app.create_form.reset();
            } else {
                app.set_status("Submission in progress");
            }
        }

        // Fields are locked while the request is in flight
        _ if submitting => {}

        KeyCode::Tab | KeyCode::Down => app.create_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.create_form.prev_field(),

        KeyCode::Enter => {
            let validation = app.create_form.validate(app.state().draft());
            match validation {
                Ok(()) => {
                    app.create_form.clear_error();
                    return Action::Submit;
                }
                Err(message) => app.create_form.set_error(message),
            }
        }

        KeyCode::Char(c) => {
            let field = app.create_form.focused_field;
            edit_field(&mut app.state(), field, |value| value.push(c));
            app.create_form.clear_error();
        }

        KeyCode::Backspace => {
            let field = app.create_form.focused_field;
            edit_field(&mut app.state(), field, |value| {
                value.pop();
            });
        }

        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemoryCredentialStore, Settings};
    use crate::gateway::scripted::ScriptedGateway;
    use crate::services::{BudgetDesk, SortKey};
    use crate::tui::app::ActiveView;
    use crate::tui::dialogs::create_budget::FormField;
    use crossterm::event::KeyEventKind;
    use std::sync::Arc;

    fn app() -> App {
        let desk = BudgetDesk::new(
            Arc::new(ScriptedGateway::new()),
            Arc::new(MemoryCredentialStore::new(None)),
            &Settings::default(),
        );
        App::new(desk, &Settings::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key.kind, KeyEventKind::Press);
        handle_event(app, Event::Key(key)).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_mode_updates_state() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        type_text(&mut app, "ops");
        assert_eq!(app.state().search(), "ops");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().search(), "op");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.state().search(), "op");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().search(), "");
    }

    #[test]
    fn test_normal_keys() {
        let mut app = app();

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state().sort_key(), SortKey::Department);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.active_view, ActiveView::Chart);

        assert_eq!(press(&mut app, KeyCode::Char('r')), Action::Reload);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_dialog_blocks_submit_until_required_filled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert!(app.has_dialog());

        type_text(&mut app, "IT");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::None);
        assert!(app.create_form.error_message.is_some());

        // Project stays empty; it is optional
        for value in ["", "2024-Q2", "500", "520", "600", "400", "500"] {
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, value);
        }
        assert_eq!(app.create_form.focused_field, FormField::Expected);

        assert_eq!(press(&mut app, KeyCode::Enter), Action::Submit);
        let state = app.state();
        assert_eq!(state.draft().department, "IT");
        assert_eq!(state.draft().period, "2024-Q2");
        assert_eq!(state.draft().scenarios.worst, "400");
    }

    #[test]
    fn test_dialog_cancel_refused_while_submitting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Ops");
        app.state().begin_submit().unwrap();

        press(&mut app, KeyCode::Esc);
        assert!(app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Submission in progress"));

        // Typing is ignored too
        type_text(&mut app, "xyz");
        assert_eq!(app.state().draft().department, "Ops");

        app.state().end_submit();
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(app.state().draft().is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(app.should_quit);
    }
}
