use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::event::AppEvent;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Primary pointer down
    Tap,
    None,
}

/// Map a terminal event to an action
pub fn handle_event(event: &AppEvent) -> Action {
    match event {
        AppEvent::Key(key) => handle_key_event(*key),
        AppEvent::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => Action::None,
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Keyboard stand-ins for a tap
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Tap,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Tap,

        _ => Action::None,
    }
}

/// Only a left-button press counts; drags, releases and scrolls are ignored
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Tap,
        _ => Action::None,
    }
}
