//! Styled message lines for the plain terminal.

use console::style;

/// Kind of message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Success,
    Error,
}

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Format one message line.
///
/// With `color` off the line is plain ASCII; with it on, console still
/// drops the styling when the stream is not a terminal.
#[must_use]
pub fn styled_line(tone: Tone, text: &str, color: bool) -> String {
    match tone {
        Tone::Header => {
            let line = format!("=== {text} ===");
            if color {
                style(line).bold().cyan().to_string()
            } else {
                line
            }
        }
        Tone::Success if color => format!("{} {text}", style("[OK]").green().bold()),
        Tone::Success => format!("[OK] {text}"),
        Tone::Error if color => format!("{} {text}", style("[ERROR]").red().bold()),
        Tone::Error => format!("[ERROR] {text}"),
    }
}

/// Print a styled section header.
pub fn print_header(text: &str) {
    println!("{}", styled_line(Tone::Header, text, !is_color_disabled()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{}", styled_line(Tone::Success, text, !is_color_disabled()));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", styled_line(Tone::Error, text, !is_color_disabled()));
}
