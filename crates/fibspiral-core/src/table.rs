//! Tabular view of a sequence: position, decimal value, binary value.

use serde::Serialize;

use crate::sequence::{to_binary, Sequence};

/// One row of the sequence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRow {
    /// 1-based position in the sequence.
    pub position: usize,
    /// Term value.
    pub value: u64,
    /// Base-2 rendering of `value`.
    pub binary: String,
}

impl SequenceRow {
    /// Decimal value with thousands separators.
    #[must_use]
    pub fn grouped_value(&self) -> String {
        group_thousands(self.value)
    }
}

/// Build the table rows for a sequence. Empty sequences have no rows.
#[must_use]
pub fn rows(sequence: &Sequence) -> Vec<SequenceRow> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, &value)| SequenceRow {
            position: i + 1,
            value,
            binary: to_binary(value),
        })
        .collect()
}

/// Format a number with comma thousands separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
