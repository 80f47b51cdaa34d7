use crate::app::controller::Controller;

use super::form::FormState;

/// Runtime state for the event loop
#[derive(Default)]
pub struct State {
    pub controller: Controller,
    pub form: FormState,
    /// Spinner animation frame, advanced while a request is in flight
    pub spinner_frame: usize,
    /// Needs a redraw
    pub dirty: bool,
}

impl State {
    pub fn new() -> Self {
        Self { dirty: true, ..Self::default() }
    }
}
