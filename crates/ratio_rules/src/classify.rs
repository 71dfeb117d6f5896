//! First-match classification of an answer against an ordered rule list.
//!
//! Rules are checked in list order and the first one that holds wins, the
//! same way answer groups are matched. Evaluation is pure; callers own the
//! rule list and decide what a match means.

use ratio_core::RatioValue;

use crate::rules::RuleKind;

/// Reference inputs for a rule. `x` is trusted (validated upstream) and may
/// be unsimplified.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RuleInputs {
    pub x: RatioValue,
}

/// One configured rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RuleSpec {
    pub rule_type: RuleKind,
    pub inputs: RuleInputs,
}

impl RuleSpec {
    pub fn new(rule_type: RuleKind, x: RatioValue) -> Self {
        Self { rule_type, inputs: RuleInputs { x } }
    }

    #[inline]
    pub fn holds_for(&self, answer: &RatioValue) -> bool {
        self.rule_type.evaluate(answer, &self.inputs.x)
    }
}

/// The first rule that held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// Position in the rule list (0-based).
    pub index: usize,
    pub rule: &'a RuleSpec,
}

/// Per-rule verdict, in list order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleOutcome {
    pub index: usize,
    pub rule_type: RuleKind,
    pub input: String,
    pub hit: bool,
}

/// Return the first rule in `rules` that holds for `answer`, if any.
pub fn classify<'a>(answer: &RatioValue, rules: &'a [RuleSpec]) -> Option<RuleMatch<'a>> {
    rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.holds_for(answer))
        .map(|(index, rule)| RuleMatch { index, rule })
}

/// Evaluate every rule (no short-circuit); useful for audits and reports.
pub fn evaluate_all(answer: &RatioValue, rules: &[RuleSpec]) -> Vec<RuleOutcome> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleOutcome {
            index,
            rule_type: rule.rule_type,
            input: rule.inputs.x.to_string(),
            hit: rule.holds_for(answer),
        })
        .collect()
}
