//! Patient Commands
//!
//! reqwest client for the patient collection. On wasm32 reqwest goes through
//! the browser's fetch.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;

use super::PatientApi;
use crate::config::AppConfig;
use crate::error::{PatientError, PatientResult};
use crate::models::{NewPatientPayload, Patient};

pub struct HttpPatientApi {
    client: reqwest::Client,
    patients_url: String,
}

impl HttpPatientApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            patients_url: config.patients_url(),
        }
    }
}

/// Only 2xx counts as success; unfollowed 3xx is an error too
fn ensure_success(response: Response) -> PatientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(PatientError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

#[async_trait(?Send)]
impl PatientApi for HttpPatientApi {
    async fn list_patients(&self) -> PatientResult<Vec<Patient>> {
        let response = ensure_success(self.client.get(&self.patients_url).send().await?)?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PatientError::Decode(e.to_string()))
    }

    async fn create_patient(&self, payload: &NewPatientPayload) -> PatientResult<()> {
        let body = serde_json::to_string(payload).map_err(|e| PatientError::Encode(e.to_string()))?;
        let response = self
            .client
            .post(&self.patients_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}
