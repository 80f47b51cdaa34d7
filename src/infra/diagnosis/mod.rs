//! Diagnosis service access.
//!
//! - `client` — blocking HTTP implementation against the fixed endpoint
//! - `error` — DiagnosisError, the typed failure kept for the log

pub mod client;
pub mod error;

pub use client::HttpDiagnosisClient;
pub use error::DiagnosisError;

use std::sync::Arc;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// Request body sent to the diagnosis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisRequest {
    pub patient_name: String,
    pub symptoms: String,
}

/// Diagnosis payload returned by the service. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub patient: String,
    pub ai_diagnosis: String,
    pub suggestion: String,
}

pub type DiagnosisOutcome = Result<Diagnosis, DiagnosisError>;

/// Anything that can turn a request into a diagnosis
pub trait DiagnosisService: Send + Sync {
    fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisOutcome;
}

/// Run one diagnosis on a worker thread and deliver the outcome on `tx`.
///
/// If the worker dies before sending, the receiver observes a disconnect,
/// which the event loop resolves as a failure.
pub fn start_diagnosis(service: Arc<dyn DiagnosisService>, request: DiagnosisRequest, tx: Sender<DiagnosisOutcome>) {
    std::thread::spawn(move || {
        let outcome = service.diagnose(&request);
        let _ = tx.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    struct Fixed;

    impl DiagnosisService for Fixed {
        fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisOutcome {
            Ok(Diagnosis {
                patient: request.patient_name.clone(),
                ai_diagnosis: "Flu".into(),
                suggestion: "Rest".into(),
            })
        }
    }

    struct Panics;

    impl DiagnosisService for Panics {
        fn diagnose(&self, _request: &DiagnosisRequest) -> DiagnosisOutcome {
            panic!("worker blew up");
        }
    }

    fn request() -> DiagnosisRequest {
        DiagnosisRequest { patient_name: "Alice".into(), symptoms: "cough".into() }
    }

    #[test]
    fn worker_delivers_outcome() {
        let (tx, rx) = mpsc::channel();
        start_diagnosis(Arc::new(Fixed), request(), tx);
        let outcome = rx.recv_timeout(Duration::from_secs(5)).expect("outcome");
        assert_eq!(outcome.expect("success").patient, "Alice");
    }

    #[test]
    fn panicking_worker_disconnects_channel() {
        let (tx, rx) = mpsc::channel();
        start_diagnosis(Arc::new(Panics), request(), tx);
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).err(), Some(mpsc::RecvTimeoutError::Disconnected));
    }

    #[test]
    fn request_serializes_wire_field_names() {
        let json = serde_json::to_value(request()).expect("serialize");
        assert_eq!(json, serde_json::json!({ "patient_name": "Alice", "symptoms": "cough" }));
    }

    #[test]
    fn diagnosis_ignores_extra_fields() {
        let body = r#"{"status":"success","id":7,"patient":"John","ai_diagnosis":"Flu","suggestion":"Rest"}"#;
        let d: Diagnosis = serde_json::from_str(body).expect("decode");
        assert_eq!(d.patient, "John");
        assert_eq!(d.ai_diagnosis, "Flu");
        assert_eq!(d.suggestion, "Rest");
    }
}
