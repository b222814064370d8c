//! budgetdesk - Terminal client for a remote budget service
//!
//! This library fetches department budgets from a budget service, lets the
//! user search and sort them, derives scenario chart data, and submits new
//! budgets from an editable draft. Both the CLI and the TUI sit on top of
//! the same state container and controllers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the bearer token store
//! - `error`: Custom error types
//! - `models`: Budget entries, the create-budget draft and request payload
//! - `gateway`: HTTP access to the budget service
//! - `state`: Shared application state
//! - `notification`: Transient success messages
//! - `logging`: Tracing subscriber setup
//! - `services`: Fetch controller, submission workflow, view and chart derivation
//! - `display`: Terminal formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use budgetdesk::config::{BudgetDeskPaths, FileCredentialStore, Settings};
//! use budgetdesk::services::BudgetDesk;
//!
//! let paths = BudgetDeskPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let desk = BudgetDesk::connect(&settings, None, Arc::new(FileCredentialStore::new(&paths)))?;
//! desk.load().await;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod notification;
pub mod services;
pub mod state;
pub mod tui;

pub use error::DeskError;
