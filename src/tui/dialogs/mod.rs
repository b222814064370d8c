//! Modal dialogs

pub mod create_budget;
