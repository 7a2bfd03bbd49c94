//! CLI output formatting.

use std::fmt::Write as _;
use std::io;
use std::time::Duration;

use serde::Serialize;

use fibspiral_core::sequence::Sequence;
use fibspiral_core::table::{rows, SequenceRow};

/// JSON document emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub terms: usize,
    pub rows: Vec<SequenceRow>,
}

impl SequenceReport {
    #[must_use]
    pub fn new(sequence: &Sequence) -> Self {
        Self {
            terms: sequence.len(),
            rows: rows(sequence),
        }
    }
}

/// Render rows as an aligned text table: `#`, `Value`, `Binary`.
///
/// Returns an empty string for no rows.
#[must_use]
pub fn format_table(rows: &[SequenceRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let pos_w = rows
        .iter()
        .map(|r| r.position.to_string().len())
        .max()
        .unwrap_or(1)
        .max(1);
    let val_w = rows
        .iter()
        .map(|r| r.grouped_value().len())
        .max()
        .unwrap_or(0)
        .max("Value".len());
    let bin_w = rows
        .iter()
        .map(|r| r.binary.len())
        .max()
        .unwrap_or(0)
        .max("Binary".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>pos_w$}  {:>val_w$}  {}", "#", "Value", "Binary");
    let _ = writeln!(out, "{:-<width$}", "", width = pos_w + val_w + bin_w + 4);
    for row in rows {
        let _ = writeln!(
            out,
            "{:>pos_w$}  {:>val_w$}  {}",
            row.position,
            row.grouped_value(),
            row.binary
        );
    }
    out
}

/// Pretty-printed JSON report for a sequence.
pub fn format_json(sequence: &Sequence) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SequenceReport::new(sequence))
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)?;
    tracing::debug!(path, bytes = contents.len(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibspiral_core::sequence::generate;

    #[test]
    fn table_header_and_rows() {
        let table = format_table(&rows(&generate(3)));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 3);
        assert!(lines[0].contains("Value"));
        assert!(lines[0].contains("Binary"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), ["3", "2", "10"]);
    }

    #[test]
    fn table_groups_thousands() {
        let table = format_table(&rows(&generate(25)));
        let last = table.lines().last().unwrap();
        assert_eq!(
            last.split_whitespace().collect::<Vec<_>>(),
            ["25", "75,025", "10010010100010001"]
        );
    }

    #[test]
    fn binary_column_aligned() {
        let table = format_table(&rows(&generate(12)));
        let starts: Vec<usize> = table
            .lines()
            .skip(2)
            .map(|l| l.rfind(' ').unwrap() + 1)
            .collect();
        assert_eq!(starts.len(), 12);
        assert!(starts.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_table() {
        assert!(format_table(&[]).is_empty());
    }

    #[test]
    fn json_report() {
        let json = format_json(&generate(3)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["terms"], 3);
        assert_eq!(value["rows"][2]["value"], 2);
        assert_eq!(value["rows"][2]["binary"], "10");
        assert_eq!(value["rows"][0]["position"], 1);
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs(90)).contains('m'));
    }

    #[test]
    fn write_table_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");
        let path = path.to_str().unwrap();
        write_to_file(path, "1\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "1\n");
    }
}
