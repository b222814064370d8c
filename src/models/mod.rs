//! Core data models for budgetdesk
//!
//! Budget entries as the service returns them, the client-side draft of a
//! new entry, and the request payload built from that draft.

pub mod budget;
pub mod draft;
pub mod request;

pub use budget::{Budget, BudgetId, Scenarios, VarianceTone};
pub use draft::{Draft, DraftField, DraftScenarios, ScenarioField};
pub use request::{coerce_number, CreateBudgetRequest, ScenarioPayload};
