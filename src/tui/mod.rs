//! Terminal User Interface module
//!
//! Interactive budget desk built on ratatui: a searchable, sortable table,
//! a scenario chart, and a dialog for creating budgets.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
