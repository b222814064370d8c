//! Application state for the TUI
//!
//! The App struct holds presentation-only state (focus, selection, input
//! mode). Everything the controllers own lives in the shared [`AppState`]
//! reached through `desk`.
//!
//! [`AppState`]: crate::state::AppState

use std::sync::MutexGuard;

use crate::config::Settings;
use crate::services::BudgetDesk;
use crate::state::{lock, AppState};

use super::dialogs::create_budget::CreateBudgetFormState;
use super::widgets::input::TextInput;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Table,
    Chart,
}

impl ActiveView {
    pub fn toggle(self) -> Self {
        match self {
            Self::Table => Self::Chart,
            Self::Chart => Self::Table,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Chart => "Chart",
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box
    Search,
}

/// Work the event loop should start after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Reload,
    Submit,
}

/// Main application state
pub struct App {
    /// State and controllers
    pub desk: BudgetDesk,

    /// Currency code for amounts
    pub currency: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Search box
    pub search_input: TextInput,

    /// Selected row in the table view
    pub selected_index: usize,

    /// Create dialog focus and validation
    pub create_form: CreateBudgetFormState,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(desk: BudgetDesk, settings: &Settings) -> Self {
        Self {
            desk,
            currency: settings.currency_code.clone(),
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            search_input: TextInput::new()
                .label("Search")
                .placeholder("department, project or period  (/)"),
            selected_index: 0,
            create_form: CreateBudgetFormState::new(),
            status_message: None,
        }
    }

    /// Lock the shared state
    pub fn state(&self) -> MutexGuard<'_, AppState> {
        lock(self.desk.state())
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn has_dialog(&self) -> bool {
        self.state().is_create_dialog_open()
    }

    /// Open the create dialog with a fresh draft
    pub fn open_create_dialog(&mut self) {
        self.state().open_create_dialog();
        self.create_form.reset();
        self.input_mode = InputMode::Normal;
    }

    /// Push the search box contents into the view inputs
    pub fn sync_search(&mut self) {
        let search = self.search_input.value().to_string();
        self.state().set_search(search);
        self.selected_index = 0;
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down within `max` rows
    pub fn move_down(&mut self, max: usize) {
        if max > 0 && self.selected_index + 1 < max {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the current view
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}
