//! Named user intents and the single place they are applied to state.

use crate::app::controller::Submission;
use crate::infra::diagnosis::DiagnosisRequest;
use crate::state::{Field, State, form};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    GoBack,
    FocusNext,
    InputChar(char),
    InsertText(String),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Submit,
    DismissNotice,
    None,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ActionResult {
    Nothing,
    /// Run this request on a worker and feed the outcome back to the controller
    Dispatch(DiagnosisRequest),
}

pub fn apply_action(state: &mut State, action: Action) -> ActionResult {
    if !matches!(action, Action::None) {
        state.dirty = true;
    }

    match action {
        Action::Start => {
            state.controller.start();
            ActionResult::Nothing
        }
        Action::GoBack => {
            state.controller.go_back();
            ActionResult::Nothing
        }
        Action::FocusNext => {
            state.form.focus = state.form.focus.next();
            ActionResult::Nothing
        }
        Action::InputChar(c) => {
            let mut buf = [0u8; 4];
            edit_focused(state, |text, cursor| form::insert_str(text, cursor, c.encode_utf8(&mut buf)));
            ActionResult::Nothing
        }
        Action::InsertText(text) => {
            // Patient name is single-line
            let text = match state.form.focus {
                Field::Name => text.replace('\n', " "),
                Field::Symptoms => text,
            };
            edit_focused(state, |current, cursor| form::insert_str(current, cursor, &text));
            ActionResult::Nothing
        }
        Action::InputBackspace => {
            edit_focused(state, form::backspace);
            ActionResult::Nothing
        }
        Action::InputDelete => {
            edit_focused(state, form::delete);
            ActionResult::Nothing
        }
        Action::CursorLeft => move_cursor(state, form::left),
        Action::CursorRight => move_cursor(state, form::right),
        Action::CursorHome => move_cursor(state, form::home),
        Action::CursorEnd => move_cursor(state, form::end),
        Action::Submit => match state.controller.begin_submit() {
            Submission::Dispatch(request) => ActionResult::Dispatch(request),
            Submission::Invalid | Submission::Busy => ActionResult::Nothing,
        },
        Action::DismissNotice => {
            state.controller.dismiss_notice();
            ActionResult::Nothing
        }
        Action::None => ActionResult::Nothing,
    }
}

fn focused_text(state: &State) -> &str {
    let session = state.controller.session();
    match state.form.focus {
        Field::Name => session.patient_name(),
        Field::Symptoms => session.symptom_text(),
    }
}

fn edit_focused(state: &mut State, edit: impl FnOnce(&str, usize) -> (String, usize)) {
    let field = state.form.focus;
    let (text, cursor) = edit(focused_text(state), state.form.cursor(field));
    match field {
        Field::Name => state.controller.update_name(text),
        Field::Symptoms => state.controller.update_symptoms(text),
    }
    state.form.set_cursor(field, cursor);
}

fn move_cursor(state: &mut State, step: fn(&str, usize) -> usize) -> ActionResult {
    let field = state.form.focus;
    let cursor = step(focused_text(state), state.form.cursor(field));
    state.form.set_cursor(field, cursor);
    ActionResult::Nothing
}
