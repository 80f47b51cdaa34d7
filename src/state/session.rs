use crate::infra::diagnosis::Diagnosis;

/// Which of the two screens is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Form,
}

/// Everything one user interaction holds. Lives only as long as the process.
///
/// Fields are private: every change goes through a named transition so that
/// `in_flight` and `last_result` can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    patient_name: String,
    symptom_text: String,
    in_flight: bool,
    last_result: Option<Diagnosis>,
}

impl Session {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn started(&self) -> bool {
        self.screen == Screen::Form
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn symptom_text(&self) -> &str {
        &self.symptom_text
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_result(&self) -> Option<&Diagnosis> {
        self.last_result.as_ref()
    }

    pub fn start(&mut self) {
        self.screen = Screen::Form;
    }

    /// Form fields and the last result survive navigation.
    pub fn go_back(&mut self) {
        self.screen = Screen::Landing;
    }

    pub fn update_name(&mut self, text: String) {
        self.patient_name = text;
    }

    pub fn update_symptoms(&mut self, text: String) {
        self.symptom_text = text;
    }

    /// Both fields non-empty. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.patient_name.is_empty() && !self.symptom_text.is_empty()
    }

    /// Enter the requesting state: result cleared in the same step.
    pub(crate) fn begin_request(&mut self) {
        self.in_flight = true;
        self.last_result = None;
    }

    /// Leave the requesting state. `None` means the request failed.
    pub(crate) fn finish_request(&mut self, result: Option<Diagnosis>) {
        self.in_flight = false;
        self.last_result = result;
    }
}
