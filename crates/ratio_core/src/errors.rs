//! Error types for parsing, construction, and reduction.
//!
//! Parse failures form a **closed** set of five kinds. Callers (presentation
//! layers, the CLI) key their messages off [`ParseErrorKind::code`]; the
//! `Display` text is a default English rendering only.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// The five ways raw ratio text can be rejected, in precedence order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ParseErrorKind {
    /// A character outside digits, `:`, `.` and `/`.
    InvalidChars,
    /// Two or more consecutive colons.
    InvalidColons,
    /// Not `term(:term)+`: fewer than two terms or a dangling colon.
    InvalidFormat,
    /// A term that is not a plain non-negative integer literal.
    InvalidRatio,
    /// Well-formed but not in simplest form.
    InvalidForm,
}

impl ParseErrorKind {
    /// All kinds, in the order the parser checks them.
    pub const ALL: [ParseErrorKind; 5] = [
        ParseErrorKind::InvalidChars,
        ParseErrorKind::InvalidColons,
        ParseErrorKind::InvalidFormat,
        ParseErrorKind::InvalidRatio,
        ParseErrorKind::InvalidForm,
    ];

    /// Stable machine code (e.g. `"INVALID_CHARS"`).
    pub fn code(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidChars => "INVALID_CHARS",
            ParseErrorKind::InvalidColons => "INVALID_COLONS",
            ParseErrorKind::InvalidFormat => "INVALID_FORMAT",
            ParseErrorKind::InvalidRatio => "INVALID_RATIO",
            ParseErrorKind::InvalidForm => "INVALID_FORM",
        }
    }

    /// Default English message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidChars => {
                "Please write a ratio that consists of digits separated by colons (e.g. 1:2 or 1:2:3)."
            }
            ParseErrorKind::InvalidColons => {
                "Your answer has multiple colons (:) next to each other."
            }
            ParseErrorKind::InvalidFormat => "Please enter a valid ratio (e.g. 1:2 or 1:2:3).",
            ParseErrorKind::InvalidRatio => {
                "For this question, each element in your ratio should be a whole number (not a fraction or a decimal)."
            }
            ParseErrorKind::InvalidForm => "This ratio is not in its simplest form.",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ParseErrorKind {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParseErrorKind::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or(())
    }
}

/// A rejected raw string together with the reason. No partial value is kept.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{}: {raw:?}", .kind.code())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub raw: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, raw: impl Into<String>) -> Self {
        Self { kind, raw: raw.into() }
    }

    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Trusted-path construction failures for [`crate::RatioValue`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ValueError {
    #[error("a ratio needs at least 2 terms, got {0}")]
    TooFewTerms(usize),
    #[error("a ratio cannot have every term equal to zero")]
    AllZero,
}

/// Reduction failures; both cases would otherwise divide by zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ReduceError {
    #[error("cannot reduce an empty sequence")]
    Empty,
    #[error("cannot reduce a sequence whose terms are all zero")]
    AllZero,
}
