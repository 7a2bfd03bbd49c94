//! Scroll state shared by the table and the log panel, and the log panel itself.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Scroll position in a list of `total` lines.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Follow the last line as new lines arrive.
    pub auto_scroll: bool,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Scroll state that stays where it is until moved.
    #[must_use]
    pub fn pinned() -> Self {
        Self {
            offset: 0,
            auto_scroll: false,
        }
    }

    /// Handle a new line (auto-scroll if enabled).
    pub fn on_new_message(&mut self, total: usize) {
        if self.auto_scroll {
            self.offset = total.saturating_sub(1);
        }
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total: usize) {
        self.offset = (self.offset + 1).min(total.saturating_sub(1));
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize) {
        self.offset = (self.offset + page_size).min(total.saturating_sub(1));
    }

    /// Jump to top.
    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    /// Jump to the last line.
    pub fn end(&mut self, total: usize) {
        self.offset = total.saturating_sub(1);
    }

    /// Back to the top, keeping the auto-scroll mode.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the scrollable log panel.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let total = logs.len();
    // Keep the last page full when following the tail.
    let start = scroll_offset.min(total.saturating_sub(visible_height));

    let items: Vec<ListItem> = logs
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else if log.starts_with("[WARN]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if total > visible_height {
        let pct = (start * 100) / total.saturating_sub(visible_height).max(1);
        format!(" Logs ({pct}%) ")
    } else {
        " Logs ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn scroll_state_initial() {
        let state = ScrollState::new();
        assert_eq!(state.offset, 0);
        assert!(state.auto_scroll);
        assert!(!ScrollState::pinned().auto_scroll);
    }

    #[test]
    fn follows_new_messages() {
        let mut state = ScrollState::new();
        state.on_new_message(10);
        assert_eq!(state.offset, 9);

        let mut pinned = ScrollState::pinned();
        pinned.on_new_message(10);
        assert_eq!(pinned.offset, 0);
    }

    #[test]
    fn scroll_up_stops_following() {
        let mut state = ScrollState::new();
        state.offset = 5;
        state.scroll_up();
        assert_eq!(state.offset, 4);
        assert!(!state.auto_scroll);
    }

    #[test]
    fn scroll_up_at_zero() {
        let mut state = ScrollState::new();
        state.scroll_up();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn scroll_down_clamps() {
        let mut state = ScrollState::pinned();
        state.scroll_down(3);
        state.scroll_down(3);
        state.scroll_down(3);
        assert_eq!(state.offset, 2);
    }

    #[test]
    fn scroll_down_empty() {
        let mut state = ScrollState::pinned();
        state.scroll_down(0);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn paging() {
        let mut state = ScrollState::pinned();
        state.page_down(10, 50);
        assert_eq!(state.offset, 10);
        state.page_down(100, 50);
        assert_eq!(state.offset, 49);
        state.page_up(10);
        assert_eq!(state.offset, 39);
        state.page_up(100);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn home_end_reset() {
        let mut state = ScrollState::pinned();
        state.end(30);
        assert_eq!(state.offset, 29);
        state.home();
        assert_eq!(state.offset, 0);
        state.offset = 7;
        state.reset();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn tail_of_logs_is_visible() {
        let logs: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, &logs, 19);
            })
            .unwrap();
        let row = |y: u16| -> String {
            (0..buf.area.width)
                .map(|x| buf.buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(4).contains("line 19"));
        assert!(row(1).contains("line 16"));
        assert!(row(0).contains("Logs (100%)"));
    }
}
