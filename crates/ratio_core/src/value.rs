//! `RatioValue`: an ordered, immutable sequence of non-negative integer terms.
//!
//! Invariants (enforced by every constructor):
//! - at least two terms;
//! - not every term is zero.
//!
//! Order is significant: `1:2` and `2:1` are different ratios.

use core::fmt;
use core::str::FromStr;

use crate::errors::{ParseError, ParseErrorKind, ValueError};
use crate::reduce::{divide_all, gcd_all};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u64>", into = "Vec<u64>"))]
pub struct RatioValue {
    numbers: Vec<u64>,
}

impl RatioValue {
    /// Trusted-path construction from an already-validated term list.
    ///
    /// Only the structural invariants are checked; the simplest-form policy
    /// applies to learner input (see [`crate::parse`]), not to references.
    pub fn from_list(numbers: Vec<u64>) -> Result<Self, ValueError> {
        if numbers.len() < 2 {
            return Err(ValueError::TooFewTerms(numbers.len()));
        }
        if numbers.iter().all(|&n| n == 0) {
            return Err(ValueError::AllZero);
        }
        Ok(Self { numbers })
    }

    /// Parse a reference ratio from text without the simplest-form policy.
    ///
    /// `"2:4:6"` is accepted here; it is rejected by [`crate::parse`].
    pub fn reference_from_str(raw: &str) -> Result<Self, ParseError> {
        let numbers = crate::parse::parse_terms(raw)?;
        // Structural checks in parse_terms already guarantee >= 2 terms.
        Self::from_list(numbers).map_err(|_| ParseError::new(ParseErrorKind::InvalidForm, raw))
    }

    /// Built by the parser once every check has passed.
    pub(crate) fn from_parsed(numbers: Vec<u64>) -> Self {
        debug_assert!(numbers.len() >= 2);
        Self { numbers }
    }

    #[inline]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    #[inline]
    pub fn into_numbers(self) -> Vec<u64> {
        self.numbers
    }

    /// Number of terms (never the length of the rendered string).
    #[inline]
    pub fn term_count(&self) -> usize {
        self.numbers.len()
    }

    /// Every term divided by the GCD of all terms.
    pub fn simplest_form(&self) -> Vec<u64> {
        match gcd_all(&self.numbers) {
            // 0 is unreachable under the not-all-zero invariant.
            0 | 1 => self.numbers.clone(),
            g => divide_all(&self.numbers, g),
        }
    }

    /// True iff the terms share no common factor above 1.
    #[inline]
    pub fn is_simplest(&self) -> bool {
        gcd_all(&self.numbers) == 1
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.numbers.iter();
        if let Some(first) = it.next() {
            write!(f, "{first}")?;
        }
        for n in it {
            write!(f, ":{n}")?;
        }
        Ok(())
    }
}

/// Untrusted-path construction; same as [`crate::parse`].
impl FromStr for RatioValue {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl TryFrom<Vec<u64>> for RatioValue {
    type Error = ValueError;
    fn try_from(v: Vec<u64>) -> Result<Self, Self::Error> {
        Self::from_list(v)
    }
}

impl From<RatioValue> for Vec<u64> {
    fn from(r: RatioValue) -> Self {
        r.numbers
    }
}

impl AsRef<[u64]> for RatioValue {
    fn as_ref(&self) -> &[u64] {
        &self.numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(v: &[u64]) -> RatioValue {
        RatioValue::from_list(v.to_vec()).unwrap()
    }

    #[test]
    fn from_list_keeps_order() {
        let v = r(&[1, 2, 3]);
        assert_eq!(v.numbers(), &[1, 2, 3]);
        assert_ne!(r(&[1, 2]), r(&[2, 1]));
    }

    #[test]
    fn from_list_rejects_short_and_zero() {
        assert_eq!(RatioValue::from_list(vec![]), Err(ValueError::TooFewTerms(0)));
        assert_eq!(RatioValue::from_list(vec![4]), Err(ValueError::TooFewTerms(1)));
        assert_eq!(RatioValue::from_list(vec![0, 0]), Err(ValueError::AllZero));
        assert!(RatioValue::from_list(vec![0, 3]).is_ok());
    }

    #[test]
    fn renders_colon_joined() {
        assert_eq!(r(&[1, 2, 3]).to_string(), "1:2:3");
        assert_eq!(r(&[2, 3, 5]).to_string(), "2:3:5");
        assert_eq!(r(&[2, 4, 6]).to_string(), "2:4:6");
        assert_eq!(r(&[10, 2, 15]).to_string(), "10:2:15");
        assert_eq!(r(&[1, 2, 3, 4]).to_string(), "1:2:3:4");
    }

    #[test]
    fn term_count_is_length_of_sequence() {
        assert_eq!(r(&[1, 2]).term_count(), 2);
        assert_eq!(r(&[1, 2, 3]).term_count(), 3);
        assert_eq!(r(&[1, 2, 3, 4, 5]).term_count(), 5);
        // Multi-digit terms: 3 terms, 7 characters without colons.
        assert_eq!(r(&[10, 2, 15]).term_count(), 3);
    }

    #[test]
    fn simplest_form_divides_by_gcd() {
        assert_eq!(r(&[1, 2, 3]).simplest_form(), vec![1, 2, 3]);
        assert_eq!(r(&[2, 4, 6]).simplest_form(), vec![1, 2, 3]);
        assert_eq!(r(&[3, 6, 9]).simplest_form(), vec![1, 2, 3]);
        assert_eq!(r(&[2, 3, 5]).simplest_form(), vec![2, 3, 5]);
        assert_eq!(r(&[2, 4, 5]).simplest_form(), vec![2, 4, 5]);
        assert_eq!(r(&[0, 6]).simplest_form(), vec![0, 1]);
    }

    #[test]
    fn simplest_form_does_not_mutate() {
        let v = r(&[2, 4, 6]);
        let _ = v.simplest_form();
        assert_eq!(v.numbers(), &[2, 4, 6]);
        assert!(!v.is_simplest());
    }

    #[test]
    fn reference_path_allows_unsimplified() {
        let v = RatioValue::reference_from_str("2:4:6").unwrap();
        assert_eq!(v.numbers(), &[2, 4, 6]);
        assert!("2:4:6".parse::<RatioValue>().is_err());

        let e = RatioValue::reference_from_str("0:0").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::InvalidForm);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_plain_arrays() {
        let v = r(&[1, 2, 3]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
        let back: RatioValue = serde_json::from_str("[2,4,6]").unwrap();
        assert_eq!(back.numbers(), &[2, 4, 6]);
        assert!(serde_json::from_str::<RatioValue>("[5]").is_err());
        assert!(serde_json::from_str::<RatioValue>("[0,0]").is_err());
        assert!(serde_json::from_str::<RatioValue>("[1,-2]").is_err());
    }
}
