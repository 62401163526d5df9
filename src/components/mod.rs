//! UI Components
//!
//! Leptos components for the patient page.

mod new_patient_form;
mod patient_list;

pub use new_patient_form::NewPatientForm;
pub use patient_list::{shown_count, PatientList};
