//! Strict parser for learner-entered ratios such as `"1:2:3"`.
//!
//! Checks run in a fixed precedence; the first failing check names the error:
//!
//! 1. `INVALID_CHARS`: the whole string may hold only ASCII digits, `:`,
//!    `.` and `/`. Decimals and fractions therefore surface as
//!    `INVALID_RATIO`.
//! 2. `INVALID_COLONS`: `::` anywhere.
//! 3. `INVALID_FORMAT`: fewer than two terms, or a leading/trailing colon.
//! 4. `INVALID_RATIO`: each term is digits only, no redundant leading zero,
//!    fits in `u64`.
//! 5. `INVALID_FORM`: the terms share a factor above 1 (or are all zero).
//!
//! Pure: no I/O, no shared state.

use crate::errors::{ParseError, ParseErrorKind};
use crate::reduce::is_simplest;
use crate::value::RatioValue;

const SEPARATOR: char = ':';

/// Parse learner input; the ratio must already be in simplest form.
pub fn parse(raw: &str) -> Result<RatioValue, ParseError> {
    let numbers = parse_terms(raw)?;
    if !is_simplest(&numbers) {
        return Err(reject(ParseErrorKind::InvalidForm, raw));
    }
    Ok(RatioValue::from_parsed(numbers))
}

/// Checks 1–4 only: returns the terms without applying the simplest-form policy.
pub fn parse_terms(raw: &str) -> Result<Vec<u64>, ParseError> {
    if !raw.bytes().all(is_ratio_byte) {
        return Err(reject(ParseErrorKind::InvalidChars, raw));
    }

    if raw.contains("::") {
        return Err(reject(ParseErrorKind::InvalidColons, raw));
    }

    // After the colon check, an empty segment can only sit at either end.
    let segments: Vec<&str> = raw.split(SEPARATOR).collect();
    let dangling = segments.first().map_or(true, |s| s.is_empty())
        || segments.last().map_or(true, |s| s.is_empty());
    if segments.len() < 2 || dangling {
        return Err(reject(ParseErrorKind::InvalidFormat, raw));
    }

    segments
        .iter()
        .map(|s| parse_term(s))
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| reject(ParseErrorKind::InvalidRatio, raw))
}

/// True iff `raw` parses (including the simplest-form policy).
#[inline]
pub fn is_valid(raw: &str) -> bool {
    parse(raw).is_ok()
}

#[inline]
fn is_ratio_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b':' | b'.' | b'/')
}

/// A plain non-negative integer literal: digits only, canonical (no leading
/// zero unless the term is `0` itself), representable as `u64`.
fn parse_term(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse::<u64>().ok()
}

fn reject(kind: ParseErrorKind, raw: &str) -> ParseError {
    tracing::debug!(code = kind.code(), raw, "ratio input rejected");
    ParseError::new(kind, raw)
}
