use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    SeekForward,
    SeekBackward,
    ScrollUp,
    ScrollDown,
    ScrollHalfPageUp,
    ScrollHalfPageDown,
    QueueForceScroll,
    QueueSmoothForceScroll,
    ToggleForceScrolling,
    ToggleCompact,
    Reset,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Playback
        (KeyCode::Char(' '), _) => Action::TogglePause,
        (KeyCode::Right, _) => Action::SeekForward,
        (KeyCode::Left, _) => Action::SeekBackward,

        // Manual scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,

        // Scroll policy
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::QueueForceScroll,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::QueueSmoothForceScroll,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::ToggleForceScrolling,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::ToggleCompact,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char(' '), KeyModifiers::NONE)), Action::TogglePause);
        assert_eq!(handle_key_event(key(KeyCode::Char('d'), KeyModifiers::CONTROL)), Action::ScrollHalfPageDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), Action::ToggleCompact);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }
}
