//! Sequence table panel.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use fibspiral_core::table::SequenceRow;

const PLACEHOLDER: &str = "Press Enter to see the sequence";

/// Render the position / value / binary table starting at row `offset`.
pub fn render_table(frame: &mut Frame, area: Rect, rows: &[SequenceRow], offset: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if rows.is_empty() {
        let placeholder = Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .block(block.title(" Sequence "));
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec!["#", "Value", "Binary"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .skip(offset)
        .map(|row| {
            Row::new(vec![
                Cell::from(row.position.to_string()),
                Cell::from(row.grouped_value()),
                Cell::from(row.binary.clone()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = format!(" Sequence ({} terms) ", rows.len());

    let widths = [
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Min(6),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(block.title(title));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibspiral_core::sequence::generate;
    use fibspiral_core::table::rows;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn draw(rows: &[SequenceRow], offset: usize) -> Buffer {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_table(frame, area, rows, offset);
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
    fn shows_header_and_first_rows() {
        let buf = draw(&rows(&generate(10)), 0);
        assert!(row(&buf, 0).contains("Sequence (10 terms)"));
        assert!(row(&buf, 1).contains("Binary"));
        let first: Vec<String> = row(&buf, 2)
            .split(|c: char| c == '│' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        assert_eq!(first, ["1", "1", "1"]);
    }

    #[test]
    fn grouped_values_and_offset() {
        let buf = draw(&rows(&generate(25)), 24);
        let line = row(&buf, 2);
        assert!(line.contains("25"));
        assert!(line.contains("75,025"));
        assert!(line.contains("10010010100010001"));
    }

    #[test]
    fn empty_table_shows_placeholder() {
        let buf = draw(&[], 0);
        assert!(row(&buf, 0).contains("Sequence"));
        assert!(!row(&buf, 0).contains("terms"));
        assert!(row(&buf, 1).contains("Press Enter to see the sequence"));
    }
}
