//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Generate,
    Reset,
    /// Append a digit to the term-count input.
    Digit(char),
    DeleteDigit,
    SlowerSteps,
    FasterSteps,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Generate,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Char(c) if c.is_ascii_digit() => KeyAction::Digit(c),
        KeyCode::Backspace => KeyAction::DeleteDigit,
        KeyCode::Char('+' | '=') => KeyAction::SlowerSteps,
        KeyCode::Char('-' | '_') => KeyAction::FasterSteps,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}
