//! TUI message types (Elm Messages).

use std::time::Duration;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Replace the term-count input text.
    SetTermsInput(String),
    /// Change the delay used by the next animation.
    SetStepDelay(Duration),
    /// Validate the input and start an animation.
    Generate,
    /// Restore the default input and delay, clearing the canvas.
    Reset,
    /// Log message.
    Log(String),
    /// Error message.
    Error(String),
    /// Quit the application.
    Quit,
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyAction;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::SetTermsInput("12".to_string());
        assert!(matches!(msg, TuiMessage::SetTermsInput(ref s) if s == "12"));

        let msg = TuiMessage::SetStepDelay(Duration::from_millis(150));
        assert!(matches!(msg, TuiMessage::SetStepDelay(d) if d.as_millis() == 150));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        let msg = TuiMessage::KeyPress(KeyAction::Generate);
        assert!(matches!(msg, TuiMessage::KeyPress(KeyAction::Generate)));
    }
}
