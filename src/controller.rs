//! Patient List Controller
//!
//! Loads the patient list into a view handle and handles new-patient
//! submissions. Runs on the single-threaded browser event loop, so state is
//! kept in `Cell`s.

use std::cell::Cell;

use log::{debug, error, info, warn};

use crate::commands::PatientApi;
use crate::error::PatientResult;
use crate::models::{NewPatientPayload, Patient, LOAD_ERROR_TEXT, SUBMIT_FAILURE_TEXT};

/// Where the patient list is displayed
pub trait PatientListView {
    fn show_loading(&self);
    fn show_patients(&self, patients: Vec<Patient>);
    fn show_error(&self, message: &str);
}

/// The form a submission was made from
pub trait PatientForm {
    /// Text entries of the form in document order
    fn entries(&self) -> PatientResult<Vec<(String, String)>>;
    /// Clear all fields
    fn reset(&self);
    /// Blocking user-facing failure notice
    fn notify_failure(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// List rendered with this many patients
    Rendered(usize),
    /// Error text rendered
    Failed,
    /// A newer load started before this one finished; result dropped
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Rejected,
    /// Another submission was still in flight
    Busy,
}

pub struct PatientListController<A, V> {
    api: A,
    view: V,
    load_state: Cell<LoadState>,
    last_generation: Cell<u64>,
    submit_state: Cell<SubmitState>,
}

/// Marks a submission in flight; returns to idle when dropped
struct InFlightGuard<'a>(&'a Cell<SubmitState>);

impl<'a> InFlightGuard<'a> {
    fn enter(state: &'a Cell<SubmitState>) -> Option<Self> {
        if state.get() == SubmitState::InFlight {
            return None;
        }
        state.set(SubmitState::InFlight);
        Some(Self(state))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(SubmitState::Idle);
    }
}

impl<A: PatientApi, V: PatientListView> PatientListController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            load_state: Cell::new(LoadState::Idle),
            last_generation: Cell::new(0),
            submit_state: Cell::new(SubmitState::Idle),
        }
    }

    /// Fetch the patient list and render it, or the error text on failure.
    pub async fn load_patients(&self) -> LoadOutcome {
        let generation = self.last_generation.get() + 1;
        self.last_generation.set(generation);
        self.load_state.set(LoadState::Loading { generation });
        self.view.show_loading();

        let result = self.api.list_patients().await;

        if self.load_state.get() != (LoadState::Loading { generation }) {
            debug!("dropping result of superseded load #{}", generation);
            return LoadOutcome::Superseded;
        }
        self.load_state.set(LoadState::Idle);

        match result {
            Ok(patients) => {
                let count = patients.len();
                info!("loaded {} patients", count);
                self.view.show_patients(patients);
                LoadOutcome::Rendered(count)
            }
            Err(e) => {
                error!("failed to load patients: {}", e);
                self.view.show_error(LOAD_ERROR_TEXT);
                LoadOutcome::Failed
            }
        }
    }

    /// Post the form as a new patient. Resets the form and reloads the list
    /// on success; alerts and keeps the form contents on failure.
    pub async fn submit<F: PatientForm>(&self, form: &F) -> SubmitOutcome {
        let Some(guard) = InFlightGuard::enter(&self.submit_state) else {
            warn!("submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        };

        let result = match form.entries() {
            Ok(entries) => {
                let payload: NewPatientPayload = entries.into_iter().collect();
                if payload.is_empty() {
                    warn!("submitting form with no text fields");
                }
                debug!("creating patient with {} fields", payload.len());
                self.api.create_patient(&payload).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                info!("patient created");
                form.reset();
                drop(guard);
                self.load_patients().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                error!("failed to add patient: {}", e);
                form.notify_failure(SUBMIT_FAILURE_TEXT);
                SubmitOutcome::Rejected
            }
        }
    }
}
