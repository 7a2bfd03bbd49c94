//! TUI header panel.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the header panel.
///
/// `progress` is `(painted, total)` while an animation runs.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    terms: usize,
    step_delay: Duration,
    progress: Option<(usize, usize)>,
) {
    let state = match progress {
        Some((painted, total)) => {
            Span::styled(format!("Drawing {painted}/{total}"), Style::default().fg(Color::Yellow))
        }
        None => Span::styled("Idle", Style::default().fg(Color::Green)),
    };
    let text = vec![Line::from(vec![
        Span::styled("FibSpiral", Style::default().fg(Color::Cyan)),
        Span::raw(format!(
            " | Terms: {terms} | Delay: {}ms | ",
            step_delay.as_millis()
        )),
        state,
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" FibSpiral ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
