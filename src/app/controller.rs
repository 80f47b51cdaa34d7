use tracing::{debug, info, warn};

use crate::infra::diagnosis::{DiagnosisOutcome, DiagnosisRequest};
use crate::state::{Notice, Session};

/// What `begin_submit` decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Request accepted; the caller must run it and hand the outcome to `resolve`
    Dispatch(DiagnosisRequest),
    /// A field was empty; a validation notice is showing
    Invalid,
    /// A request is already in flight
    Busy,
}

/// Owns the session and the notice, and runs the submit lifecycle:
/// Idle -> Validating -> (Invalid | Requesting) -> (result | connectivity notice).
#[derive(Debug, Default)]
pub struct Controller {
    session: Session,
    notice: Option<Notice>,
}

impl Controller {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn start(&mut self) {
        debug!("screen -> form");
        self.session.start();
    }

    pub fn go_back(&mut self) {
        debug!("screen -> landing");
        self.session.go_back();
    }

    pub fn update_name(&mut self, text: String) {
        self.session.update_name(text);
    }

    pub fn update_symptoms(&mut self, text: String) {
        self.session.update_symptoms(text);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate and, if accepted, enter the requesting state.
    pub fn begin_submit(&mut self) -> Submission {
        if self.session.in_flight() {
            debug!("submit ignored: request already in flight");
            return Submission::Busy;
        }
        if !self.session.is_complete() {
            self.notice = Some(Notice::Validation);
            return Submission::Invalid;
        }

        self.session.begin_request();
        info!("diagnosis requested");
        Submission::Dispatch(DiagnosisRequest {
            patient_name: self.session.patient_name().to_string(),
            symptoms: self.session.symptom_text().to_string(),
        })
    }

    /// Apply the outcome of a dispatched request. Always leaves the session idle.
    pub fn resolve(&mut self, outcome: DiagnosisOutcome) {
        match outcome {
            Ok(diagnosis) => {
                info!("diagnosis received");
                self.session.finish_request(Some(diagnosis));
            }
            Err(e) => {
                warn!(error = %e, "diagnosis request failed");
                self.session.finish_request(None);
                self.notice = Some(Notice::Connectivity);
            }
        }
    }

    /// Whole lifecycle in one call against `service`. A panicking service is
    /// treated as a failed request. The event loop runs `begin_submit` and
    /// `resolve` around a worker thread instead.
    #[cfg(test)]
    pub fn submit(&mut self, service: &dyn crate::infra::diagnosis::DiagnosisService) -> Submission {
        use crate::infra::diagnosis::DiagnosisError;
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let submission = self.begin_submit();
        if let Submission::Dispatch(request) = &submission {
            let outcome = catch_unwind(AssertUnwindSafe(|| service.diagnose(request)))
                .unwrap_or(Err(DiagnosisError::Aborted));
            self.resolve(outcome);
        }
        submission
    }
}
