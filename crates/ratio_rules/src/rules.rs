//! The three ratio comparison rules.
//!
//! - `Equals`: identical terms in identical order, no reduction.
//! - `HasNumberOfTermsEqualTo`: same number of *terms*. Term counts come from
//!   the parsed sequences; rendered string lengths are never compared.
//! - `IsEquivalent`: same simplest form.
//!
//! The reference (`input`) is trusted: it may be unsimplified (`2:4:6`).

use core::fmt;
use core::str::FromStr;

use ratio_core::RatioValue;

/// Element-by-element identity.
#[inline]
pub fn equals(answer: &RatioValue, input: &RatioValue) -> bool {
    answer.numbers() == input.numbers()
}

#[inline]
pub fn has_number_of_terms_equal_to(answer: &RatioValue, input: &RatioValue) -> bool {
    answer.term_count() == input.term_count()
}

/// Both sides reduced to simplest form, then compared element by element.
pub fn is_equivalent(answer: &RatioValue, input: &RatioValue) -> bool {
    answer.simplest_form() == input.simplest_form()
}

/// Named rule selector (stable names used in rule-set files and the CLI).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    Equals,
    HasNumberOfTermsEqualTo,
    IsEquivalent,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [
        RuleKind::Equals,
        RuleKind::HasNumberOfTermsEqualTo,
        RuleKind::IsEquivalent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Equals => "Equals",
            RuleKind::HasNumberOfTermsEqualTo => "HasNumberOfTermsEqualTo",
            RuleKind::IsEquivalent => "IsEquivalent",
        }
    }

    /// Evaluate this rule for `answer` against the reference `input`.
    pub fn evaluate(self, answer: &RatioValue, input: &RatioValue) -> bool {
        let hit = match self {
            RuleKind::Equals => equals(answer, input),
            RuleKind::HasNumberOfTermsEqualTo => has_number_of_terms_equal_to(answer, input),
            RuleKind::IsEquivalent => is_equivalent(answer, input),
        };
        tracing::trace!(rule = self.name(), %answer, %input, hit, "rule evaluated");
        hit
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised rule name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownRule(pub String);

impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rule: {}", self.0)
    }
}
impl std::error::Error for UnknownRule {}

impl FromStr for RuleKind {
    type Err = UnknownRule;

    /// Accepts the canonical names plus snake/kebab spellings (`is_equivalent`, `is-equivalent`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        RuleKind::ALL
            .into_iter()
            .find(|k| k.name().to_ascii_lowercase() == folded)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}
