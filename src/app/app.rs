use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event;
use ratatui::prelude::*;

use crate::app::actions::{Action, ActionResult, apply_action};
use crate::app::events::handle_event;
use crate::infra::constants::{EVENT_POLL_MS, SPINNER_FRAMES, SPINNER_INTERVAL_MS};
use crate::infra::diagnosis::{DiagnosisError, DiagnosisOutcome, DiagnosisService, start_diagnosis};
use crate::state::State;
use crate::ui;

pub struct App {
    pub state: State,
    service: Arc<dyn DiagnosisService>,
    /// Receiver for the request currently in flight, one channel per request
    pending: Option<Receiver<DiagnosisOutcome>>,
    /// Last spinner animation update
    last_spinner: Instant,
}

impl App {
    pub fn new(service: Arc<dyn DiagnosisService>) -> Self {
        Self { state: State::new(), service, pending: None, last_spinner: Instant::now() }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                let evt = event::read()?;
                let Some(action) = handle_event(&evt, &self.state) else {
                    break;
                };
                self.handle_action(action);
            }

            self.poll_outcome();
            self.tick_spinner();

            if self.state.dirty {
                terminal.draw(|frame| ui::render(frame, &self.state))?;
                self.state.dirty = false;
            }
        }
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) {
        if let ActionResult::Dispatch(request) = apply_action(&mut self.state, action) {
            let (tx, rx) = mpsc::channel();
            start_diagnosis(Arc::clone(&self.service), request, tx);
            self.pending = Some(rx);
        }
    }

    /// Resolve the in-flight request once its worker reports back, or as a
    /// failure if the worker went away silently.
    pub fn poll_outcome(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(DiagnosisError::Aborted),
        };
        self.pending = None;
        self.state.controller.resolve(outcome);
        self.state.dirty = true;
    }

    fn tick_spinner(&mut self) {
        if !self.state.controller.session().in_flight() {
            return;
        }
        if self.last_spinner.elapsed() >= Duration::from_millis(SPINNER_INTERVAL_MS) {
            self.state.spinner_frame = (self.state.spinner_frame + 1) % SPINNER_FRAMES.len();
            self.last_spinner = Instant::now();
            self.state.dirty = true;
        }
    }
}
