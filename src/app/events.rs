use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::actions::Action;
use crate::state::{Field, Screen, State};

/// Map a terminal event to an action. `None` means quit.
pub fn handle_event(event: &Event, state: &State) -> Option<Action> {
    match event {
        Event::Key(key) => {
            // Windows terminals report releases too
            if key.kind == KeyEventKind::Release {
                return Some(Action::None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl && key.code == KeyCode::Char('c') {
                return None;
            }

            // A notice blocks everything else until dismissed
            if state.controller.notice().is_some() {
                return Some(match key.code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissNotice,
                    _ => Action::None,
                });
            }

            match state.controller.session().screen() {
                Screen::Landing => handle_landing_key(key),
                Screen::Form => Some(handle_form_key(key, state)),
            }
        }
        // Terminals may send \r\n or \r inside a paste
        Event::Paste(text) if state.controller.session().started() && state.controller.notice().is_none() => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            Some(Action::InsertText(normalized))
        }
        _ => Some(Action::None),
    }
}

fn handle_landing_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => None,
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Start),
        _ => Some(Action::None),
    }
}

fn handle_form_key(key: &KeyEvent, state: &State) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match key.code {
            KeyCode::Char('s') => Action::Submit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::GoBack,
        KeyCode::F(5) => Action::Submit,
        KeyCode::Tab | KeyCode::BackTab => Action::FocusNext,
        KeyCode::Enter => match state.form.focus {
            Field::Name => Action::FocusNext,
            Field::Symptoms => Action::InputChar('\n'),
        },
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::apply_action;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn on_form() -> State {
        let mut state = State::new();
        apply_action(&mut state, Action::Start);
        state
    }

    #[test]
    fn landing_keys() {
        let state = State::new();
        assert_eq!(handle_event(&key(KeyCode::Enter), &state), Some(Action::Start));
        assert_eq!(handle_event(&key(KeyCode::Char('q')), &state), None);
        assert_eq!(handle_event(&key(KeyCode::Char('x')), &state), Some(Action::None));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        assert_eq!(handle_event(&ctrl('c'), &State::new()), None);
        assert_eq!(handle_event(&ctrl('c'), &on_form()), None);
    }

    #[test]
    fn form_keys() {
        let state = on_form();
        assert_eq!(handle_event(&key(KeyCode::Esc), &state), Some(Action::GoBack));
        assert_eq!(handle_event(&ctrl('s'), &state), Some(Action::Submit));
        assert_eq!(handle_event(&key(KeyCode::F(5)), &state), Some(Action::Submit));
        assert_eq!(handle_event(&key(KeyCode::Tab), &state), Some(Action::FocusNext));
        // 'q' is just a letter on the form
        assert_eq!(handle_event(&key(KeyCode::Char('q')), &state), Some(Action::InputChar('q')));
    }

    #[test]
    fn enter_depends_on_focus() {
        let mut state = on_form();
        assert_eq!(handle_event(&key(KeyCode::Enter), &state), Some(Action::FocusNext));
        apply_action(&mut state, Action::FocusNext);
        assert_eq!(handle_event(&key(KeyCode::Enter), &state), Some(Action::InputChar('\n')));
    }

    #[test]
    fn notice_swallows_keys_until_dismissed() {
        let mut state = on_form();
        apply_action(&mut state, Action::Submit);
        assert!(state.controller.notice().is_some());

        assert_eq!(handle_event(&key(KeyCode::Char('a')), &state), Some(Action::None));
        assert_eq!(handle_event(&key(KeyCode::Esc), &state), Some(Action::DismissNotice));
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let state = on_form();
        let evt = Event::Paste("a\r\nb\rc".into());
        assert_eq!(handle_event(&evt, &state), Some(Action::InsertText("a\nb\nc".into())));
    }

    #[test]
    fn paste_behind_notice_is_dropped() {
        let mut state = on_form();
        apply_action(&mut state, Action::Submit);
        assert!(state.controller.notice().is_some());

        let action = handle_event(&Event::Paste("sneaky".into()), &state);
        assert_eq!(action, Some(Action::None));
        if let Some(action) = action {
            apply_action(&mut state, action);
        }
        assert_eq!(state.controller.session().patient_name(), "");
        assert!(state.controller.notice().is_some());
    }

    #[test]
    fn paste_ignored_on_landing() {
        assert_eq!(handle_event(&Event::Paste("x".into()), &State::new()), Some(Action::None));
    }
}
