//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
///
/// Controls that a running animation locks are dimmed while `running`.
pub fn render_footer(frame: &mut Frame, area: Rect, running: bool) {
    let theme = ColorTheme::default();
    let idle = theme.key_style(!running);
    let always = theme.key_style(true);
    let text = vec![Line::from(vec![
        Span::styled("q", always),
        Span::raw(": quit | "),
        Span::styled("0-9", idle),
        Span::raw(": terms | "),
        Span::styled("Enter", idle),
        Span::raw(": generate | "),
        Span::styled("r", idle),
        Span::raw(": reset | "),
        Span::styled("+/-", always),
        Span::raw(": delay | "),
        Span::styled("l", always),
        Span::raw(": logs"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn draw(width: u16, running: bool) -> Buffer {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, running);
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
    fn render_footer_contains_all_shortcuts() {
        let buf = draw(100, false);
        let content = row(&buf, 1);
        assert!(content.contains("quit"));
        assert!(content.contains("generate"));
        assert!(content.contains("reset"));
        assert!(content.contains("delay"));
        assert!(content.contains("logs"));
    }

    #[test]
    fn generate_dimmed_while_running() {
        let content = row(&draw(100, true), 1);
        let col = u16::try_from(content.find("Enter").unwrap()).unwrap();
        let buf = draw(100, true);
        assert_eq!(buf[(col, 1)].fg, Color::DarkGray);

        let buf = draw(100, false);
        assert_eq!(buf[(col, 1)].fg, Color::Yellow);
    }

    #[test]
    fn render_footer_small_area() {
        draw(20, false);
    }
}
