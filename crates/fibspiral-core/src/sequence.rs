//! Iterative generator for the 1-indexed Fibonacci sequence (1, 1, 2, 3, ...).

use std::ops::Index;

use serde::Serialize;

use crate::constants::MAX_SEQUENCE_LEN;

/// An immutable, generated run of Fibonacci terms.
///
/// Regenerated wholesale for every request; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<u64>);

impl Sequence {
    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The terms as a slice.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.0
    }

    /// Term at a 0-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u64> {
        self.0.get(index).copied()
    }

    /// Iterate over the terms.
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.0.iter()
    }
}

impl Index<usize> for Sequence {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generate the first `n` terms of the sequence.
///
/// `n <= 0` yields an empty sequence. Bounding `n` to the interactive range
/// is the caller's job (see [`crate::term_count::TermCount`]); requests
/// above [`MAX_SEQUENCE_LEN`] are clamped so the values and the spiral
/// coordinates stay representable.
///
/// # Example
/// ```
/// let seq = fibspiral_core::sequence::generate(6);
/// assert_eq!(seq.values(), &[1, 1, 2, 3, 5, 8]);
/// ```
#[must_use]
pub fn generate(n: i64) -> Sequence {
    if n <= 0 {
        return Sequence::default();
    }
    if n == 1 {
        return Sequence(vec![1]);
    }
    if n == 2 {
        return Sequence(vec![1, 1]);
    }

    let len = usize::try_from(n).map_or(MAX_SEQUENCE_LEN, |n| n.min(MAX_SEQUENCE_LEN));
    if i64::try_from(len).map_or(true, |len| len < n) {
        tracing::debug!(requested = n, generated = len, "sequence length clamped");
    }

    let mut terms = Vec::with_capacity(len);
    terms.extend([1u64, 1]);
    for i in 2..len {
        terms.push(terms[i - 1] + terms[i - 2]);
    }
    Sequence(terms)
}

/// Base-2 rendering of a term, without prefix.
#[must_use]
pub fn to_binary(value: u64) -> String {
    format!("{value:b}")
}
