//! Application state shared between the controllers and the presentation
//!
//! `AppState` holds the fetched collection, the status flags, the view
//! inputs and the create-budget draft. Fields that only the fetch and
//! submission controllers may write have `pub(crate)` mutators; the
//! presentation layer gets read access plus the view/draft inputs.
//!
//! The state sits behind a std mutex. Callers must never hold the lock
//! across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::error::{DeskError, DeskResult};
use crate::models::{Budget, Draft, DraftField, ScenarioField};
use crate::notification::Notification;
use crate::services::chart::{aggregate, ChartRow};
use crate::services::view::{filter_and_sort, SortKey};

/// State handle passed to controllers and the UI
pub type SharedState = Arc<Mutex<AppState>>;

/// Lock the state, recovering the data if a previous holder panicked
pub fn lock(state: &SharedState) -> MutexGuard<'_, AppState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Where the create-budget workflow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything the UI renders, in one place
#[derive(Debug, Default)]
pub struct AppState {
    budgets: Vec<Budget>,
    loading: bool,
    error: Option<String>,
    success: Option<Notification>,
    submission_phase: SubmissionPhase,
    search: String,
    sort_key: SortKey,
    draft: Draft,
    create_dialog_open: bool,
    load_generation: u64,
    last_loaded_at: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(Self::new()))
    }

    // ----- read access -----

    /// The raw collection as last fetched
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn total_count(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&Notification> {
        self.success.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_phase == SubmissionPhase::Submitting
    }

    pub fn submission_phase(&self) -> SubmissionPhase {
        self.submission_phase
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_create_dialog_open(&self) -> bool {
        self.create_dialog_open
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Local>> {
        self.last_loaded_at
    }

    /// Filtered and sorted projection of the collection
    pub fn view(&self) -> Vec<Budget> {
        filter_and_sort(&self.budgets, &self.search, self.sort_key)
    }

    /// Chart rows for the current view
    pub fn chart_rows(&self) -> Vec<ChartRow> {
        aggregate(&self.view())
    }

    // ----- presentation inputs -----

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn set_draft_scenario_field(&mut self, field: ScenarioField, value: impl Into<String>) {
        self.draft.set_scenario_field(field, value);
    }

    /// Start a creation session with an empty draft
    pub fn open_create_dialog(&mut self) {
        self.draft.reset();
        self.create_dialog_open = true;
        if self.submission_phase != SubmissionPhase::Submitting {
            self.submission_phase = SubmissionPhase::Idle;
        }
    }

    /// End the creation session and drop the draft
    pub fn close_create_dialog(&mut self) {
        self.create_dialog_open = false;
        self.draft.reset();
    }

    /// User-initiated close; refused while a submission is in flight
    pub fn cancel_create_dialog(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.close_create_dialog();
        true
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop the success toast once its time is up
    pub fn expire_notifications(&mut self, now: Instant) {
        if self.success.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.success = None;
        }
    }

    // ----- fetch controller -----

    /// Mark a load as started and return its generation
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.error = None;
        self.load_generation
    }

    pub(crate) fn is_current_load(&self, generation: u64) -> bool {
        self.load_generation == generation
    }

    pub(crate) fn replace_budgets(&mut self, budgets: Vec<Budget>) {
        self.budgets = budgets;
        self.last_loaded_at = Some(Local::now());
    }

    /// Clear the loading flag unless a newer load has taken over
    pub(crate) fn finish_load(&mut self, generation: u64) {
        if self.is_current_load(generation) {
            self.loading = false;
        }
    }

    // ----- fetch + submission -----

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    // ----- submission workflow -----

    pub(crate) fn begin_submit(&mut self) -> DeskResult<()> {
        if self.is_submitting() {
            return Err(DeskError::SubmissionInProgress);
        }
        self.submission_phase = SubmissionPhase::Submitting;
        self.error = None;
        Ok(())
    }

    pub(crate) fn submit_succeeded(&mut self, notification: Notification) {
        self.success = Some(notification);
        self.submission_phase = SubmissionPhase::Succeeded;
        self.close_create_dialog();
    }

    pub(crate) fn submit_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.submission_phase = SubmissionPhase::Failed;
    }

    /// Leave `Submitting` if neither outcome was recorded
    pub(crate) fn end_submit(&mut self) {
        if self.submission_phase == SubmissionPhase::Submitting {
            self.submission_phase = SubmissionPhase::Idle;
        }
    }
}

/// Clears the loading flag for one load generation when dropped
pub(crate) struct LoadingGuard {
    state: SharedState,
    generation: u64,
}

impl LoadingGuard {
    pub(crate) fn new(state: &SharedState, generation: u64) -> Self {
        Self {
            state: Arc::clone(state),
            generation,
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        lock(&self.state).finish_load(self.generation);
    }
}

/// Releases the submitting flag when dropped
pub(crate) struct SubmittingGuard {
    state: SharedState,
}

impl SubmittingGuard {
    pub(crate) fn new(state: &SharedState) -> Self {
        Self {
            state: Arc::clone(state),
        }
    }
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        lock(&self.state).end_submit();
    }
}
