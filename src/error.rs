//! Error Types
//!
//! Failures of the patients endpoint calls and of reading the form.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Form error: {0}")]
    Form(String),
}

pub type PatientResult<T> = Result<T, PatientError>;

impl From<reqwest::Error> for PatientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            PatientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }
        } else if err.is_decode() {
            PatientError::Decode(err.to_string())
        } else {
            PatientError::Network(err.to_string())
        }
    }
}
