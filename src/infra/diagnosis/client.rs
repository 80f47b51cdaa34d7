use std::time::Duration;

use reqwest::blocking::Client;

use super::{Diagnosis, DiagnosisError, DiagnosisOutcome, DiagnosisRequest, DiagnosisService};
use crate::infra::constants::{DIAGNOSE_ENDPOINT, REQUEST_TIMEOUT_SECS};

/// Blocking HTTP client for the diagnosis service. One POST per call, no retry.
pub struct HttpDiagnosisClient {
    http: Client,
    endpoint: String,
}

impl HttpDiagnosisClient {
    pub fn new() -> Result<Self, DiagnosisError> {
        Self::with_endpoint(DIAGNOSE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, DiagnosisError> {
        let http = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DiagnosisService for HttpDiagnosisClient {
    fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisOutcome {
        let response = self
            .http
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DiagnosisError::Status { status: status.as_u16(), body });
        }

        let text = response.text()?;
        serde_json::from_str::<Diagnosis>(&text).map_err(|e| DiagnosisError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Json;
    use serde_json::{Value, json};
    use std::sync::mpsc;

    /// Serve `app` on an ephemeral port from a dedicated runtime thread.
    fn spawn_mock(app: Router) -> String {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
                tx.send(listener.local_addr().expect("local addr")).expect("send addr");
                axum::serve(listener, app).await.expect("serve");
            });
        });
        let addr = rx.recv().expect("mock address");
        format!("http://{}/api/diagnose", addr)
    }

    fn request(name: &str, symptoms: &str) -> DiagnosisRequest {
        DiagnosisRequest { patient_name: name.into(), symptoms: symptoms.into() }
    }

    #[test]
    fn default_endpoint_is_fixed() {
        let client = HttpDiagnosisClient::new().expect("client");
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/api/diagnose");
    }

    #[test]
    fn success_decodes_diagnosis() {
        let app = Router::new().route(
            "/api/diagnose",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "status": "success",
                    "id": 1,
                    "patient": body["patient_name"],
                    "ai_diagnosis": "Possible viral infection",
                    "suggestion": format!("Rest and hydrate ({})", body["symptoms"].as_str().unwrap_or_default()),
                }))
            }),
        );
        let client = HttpDiagnosisClient::with_endpoint(spawn_mock(app)).expect("client");

        let d = client.diagnose(&request("John", "headache and fever")).expect("diagnosis");
        assert_eq!(d.patient, "John");
        assert_eq!(d.ai_diagnosis, "Possible viral infection");
        assert_eq!(d.suggestion, "Rest and hydrate (headache and fever)");
    }

    #[test]
    fn server_error_is_status_failure() {
        let app = Router::new().route("/api/diagnose", post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
        let client = HttpDiagnosisClient::with_endpoint(spawn_mock(app)).expect("client");

        match client.diagnose(&request("John", "cough")) {
            Err(DiagnosisError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_shape_is_decode_failure() {
        let app = Router::new().route("/api/diagnose", post(|| async { Json(json!({ "patient": "John" })) }));
        let client = HttpDiagnosisClient::with_endpoint(spawn_mock(app)).expect("client");

        assert!(matches!(client.diagnose(&request("John", "cough")), Err(DiagnosisError::Decode(_))));
    }

    #[test]
    fn non_json_body_is_decode_failure() {
        let app = Router::new().route("/api/diagnose", post(|| async { "<html>oops</html>" }));
        let client = HttpDiagnosisClient::with_endpoint(spawn_mock(app)).expect("client");

        assert!(matches!(client.diagnose(&request("John", "cough")), Err(DiagnosisError::Decode(_))));
    }

    #[test]
    fn unreachable_service_is_network_failure() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0").expect("bind").local_addr().expect("addr");
        // Listener dropped above; nothing accepts on this port now.
        let client = HttpDiagnosisClient::with_endpoint(format!("http://{}/api/diagnose", addr)).expect("client");

        assert!(matches!(client.diagnose(&request("John", "cough")), Err(DiagnosisError::Network(_))));
    }
}
