//! Term-count input and status panel.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the input field, the step delay and the last status message.
///
/// The input is shown dimmed while `running`.
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    step_delay: Duration,
    status: Option<&str>,
    running: bool,
) {
    let theme = ColorTheme::default();
    let input_style = if running {
        theme.muted_style()
    } else {
        theme.header_style()
    };
    let cursor = if running { "" } else { "_" };

    let status_line = match status {
        Some(msg) => Line::from(Span::styled(msg.to_string(), theme.error_style())),
        None if running => Line::from(Span::styled("Drawing...", theme.muted_style())),
        None => Line::from(Span::styled("Ready", theme.success_style())),
    };

    let text = vec![
        Line::from(vec![
            Span::styled("Terms (1-25): ", theme.text_style()),
            Span::styled(format!("{input}{cursor}"), input_style),
        ]),
        Line::from(vec![
            Span::styled("Step delay:   ", theme.text_style()),
            Span::styled(format!("{} ms", step_delay.as_millis()), theme.text_style()),
        ]),
        status_line,
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Controls ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn draw(input: &str, status: Option<&str>, running: bool) -> Buffer {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_controls(
                    frame,
                    area,
                    input,
                    Duration::from_millis(350),
                    status,
                    running,
                );
            })
            .unwrap()
            .buffer
            .clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_input_and_delay() {
        let buf = draw("12", None, false);
        assert!(row(&buf, 1).contains("Terms (1-25): 12_"));
        assert!(row(&buf, 2).contains("350 ms"));
        assert!(row(&buf, 3).contains("Ready"));
    }

    #[test]
    fn shows_status_in_red() {
        let buf = draw("30", Some("Maximum 25 terms allowed"), false);
        let line = row(&buf, 3);
        assert!(line.contains("Maximum 25 terms allowed"));
        assert_eq!(buf[(1, 3)].fg, Color::Red);
    }

    #[test]
    fn input_dimmed_while_running() {
        let buf = draw("10", None, true);
        let line = row(&buf, 1);
        assert!(line.contains("Terms (1-25): 10"));
        assert!(!line.contains("10_"));
        let byte = line.find("10").unwrap();
        let col = u16::try_from(line[..byte].chars().count()).unwrap();
        assert_eq!(buf[(col, 1)].fg, Color::DarkGray);
        assert!(row(&buf, 3).contains("Drawing..."));
    }
}
