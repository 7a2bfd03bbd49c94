//! Validation of the user-supplied term count.
//!
//! The generator itself accepts any integer; this module is the boundary
//! that keeps interactive and command-line input inside `[1, 25]`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_TERMS, MAX_TERMS, MIN_TERMS};

/// Error returned when a term count is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermCountError {
    /// The input is not an integer.
    #[error("Please enter a valid number (1-25)")]
    NotANumber(String),

    /// The input is below the minimum.
    #[error("Please enter a valid number (1-25)")]
    TooSmall(i64),

    /// The input is above the maximum.
    #[error("Maximum 25 terms allowed")]
    TooLarge(i64),
}

impl TermCountError {
    /// Replacement text for the input field after this error, if any.
    ///
    /// A value above the maximum is replaced by the maximum itself.
    #[must_use]
    pub fn suggested_input(&self) -> Option<String> {
        match self {
            Self::TooLarge(_) => Some(MAX_TERMS.to_string()),
            Self::NotANumber(_) | Self::TooSmall(_) => None,
        }
    }
}

/// A term count known to lie in `[MIN_TERMS, MAX_TERMS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermCount(usize);

impl TermCount {
    /// Validate an integer term count.
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn new(n: i64) -> Result<Self, TermCountError> {
        if n < MIN_TERMS as i64 {
            return Err(TermCountError::TooSmall(n));
        }
        if n > MAX_TERMS as i64 {
            return Err(TermCountError::TooLarge(n));
        }
        Ok(Self(n as usize))
    }

    /// Parse and validate a term count typed by the user.
    pub fn parse(input: &str) -> Result<Self, TermCountError> {
        let trimmed = input.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| TermCountError::NotANumber(trimmed.to_string()))?;
        Self::new(n)
    }

    /// The validated count.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// The count as the signed integer the generator takes.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }
}

impl Default for TermCount {
    fn default() -> Self {
        Self(DEFAULT_TERMS)
    }
}

impl FromStr for TermCount {
    type Err = TermCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(TermCount::parse("1").unwrap().get(), 1);
        assert_eq!(TermCount::parse("25").unwrap().get(), 25);
        assert_eq!(TermCount::parse("  10 ").unwrap().get(), 10);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            TermCount::parse("abc"),
            Err(TermCountError::NotANumber("abc".into()))
        );
        assert!(matches!(
            TermCount::parse(""),
            Err(TermCountError::NotANumber(_))
        ));
        assert!(matches!(
            TermCount::parse("2.5"),
            Err(TermCountError::NotANumber(_))
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(TermCount::parse("0"), Err(TermCountError::TooSmall(0)));
        assert_eq!(TermCount::parse("-3"), Err(TermCountError::TooSmall(-3)));
        assert_eq!(TermCount::parse("26"), Err(TermCountError::TooLarge(26)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TermCountError::TooSmall(0).to_string(),
            "Please enter a valid number (1-25)"
        );
        assert_eq!(
            TermCountError::NotANumber("x".into()).to_string(),
            "Please enter a valid number (1-25)"
        );
        assert_eq!(
            TermCountError::TooLarge(99).to_string(),
            "Maximum 25 terms allowed"
        );
    }

    #[test]
    fn too_large_suggests_maximum() {
        assert_eq!(
            TermCountError::TooLarge(40).suggested_input(),
            Some("25".to_string())
        );
        assert_eq!(TermCountError::TooSmall(0).suggested_input(), None);
    }

    #[test]
    fn default_is_ten() {
        assert_eq!(TermCount::default().get(), 10);
        assert_eq!(TermCount::default().to_string(), "10");
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let count: TermCount = "7".parse().unwrap();
        assert_eq!(count.as_i64(), 7);
    }
}
