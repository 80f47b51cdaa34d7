use thiserror::Error;

/// Typed failure of a diagnosis request.
///
/// Only the log sees the category; the controller collapses every variant
/// into a single connectivity notice.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// DNS, connection refused, timeout, or any other transport failure
    #[error("Network error: {0}")]
    Network(String),
    /// Service answered with a non-success HTTP status
    #[error("Service error {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body was not a diagnosis payload
    #[error("Decode error: {0}")]
    Decode(String),
    /// The call ended without producing an outcome (worker died or panicked)
    #[error("Request aborted without an outcome")]
    Aborted,
}

impl From<reqwest::Error> for DiagnosisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DiagnosisError::Decode(e.to_string())
        } else {
            DiagnosisError::Network(e.to_string())
        }
    }
}
