//! Configuration module for budgetdesk
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Bearer token storage

pub mod credentials;
pub mod paths;
pub mod settings;

pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use paths::BudgetDeskPaths;
pub use settings::Settings;
