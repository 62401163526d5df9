//! Backend Command Bindings
//!
//! Calls to the patients HTTP endpoint, behind a trait so the controller can
//! be driven by an in-memory backend in tests.

mod patient;

use async_trait::async_trait;

use crate::error::PatientResult;
use crate::models::{NewPatientPayload, Patient};

pub use patient::HttpPatientApi;

/// Operations on the patient collection
#[async_trait(?Send)]
pub trait PatientApi {
    /// `GET /patients`
    async fn list_patients(&self) -> PatientResult<Vec<Patient>>;

    /// `POST /patients`; the response body is not consumed
    async fn create_patient(&self, payload: &NewPatientPayload) -> PatientResult<()>;
}
