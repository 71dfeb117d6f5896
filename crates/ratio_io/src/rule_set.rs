// crates/ratio_io/src/rule_set.rs
//
// Rule-set files: an ordered list of rules an answer is classified against.
//
// Wire shape (unknown fields rejected):
//
//   {
//     "id": "optional, non-normative",
//     "rules": [
//       { "rule_type": "IsEquivalent", "inputs": { "x": [2, 4, 6] } },
//       { "rule_type": "Equals",       "inputs": { "x": "1:2" } }
//     ]
//   }
//
// • `inputs.x` is a reference ratio: a JSON array of integers, or a ratio
//   string. References are trusted, so the simplest-form policy is NOT
//   applied (`"2:4:6"` is fine); structure still is.
// • Offline only: paths carrying a scheme are rejected before any read.
// • An empty `rules` list is an error; it would classify nothing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ratio_core::RatioValue;
use ratio_rules::{RuleKind, RuleSpec};

use crate::{looks_like_url_strict, IoError};

/// External (wire) form of a rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetFile {
    #[serde(default)]
    pub id: Option<String>,
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    /// Rule name; canonical (`IsEquivalent`) or snake/kebab spelling.
    pub rule_type: String,
    pub inputs: EntryInputs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryInputs {
    pub x: RatioInput,
}

/// A reference ratio as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatioInput {
    Terms(Vec<u64>),
    Text(String),
}

/// Validated, typed rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub id: Option<String>,
    pub rules: Vec<RuleSpec>,
}

impl RuleSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Load and validate a rule-set file from a local path.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, IoError> {
    let shown = path.to_string_lossy();
    if looks_like_url_strict(&shown) {
        return Err(IoError::Invalid(format!("rule set path must be local (no scheme): {shown}")));
    }
    let bytes = fs::read(path).map_err(|e| IoError::Path(format!("{shown}: {e}")))?;
    let set = parse_rule_set_bytes(&bytes)?;
    tracing::debug!(path = %shown, rules = set.len(), "rule set loaded");
    Ok(set)
}

/// Parse and validate rule-set JSON bytes.
pub fn parse_rule_set_bytes(bytes: &[u8]) -> Result<RuleSet, IoError> {
    let file: RuleSetFile = serde_json::from_slice(bytes)?;
    resolve(file)
}

/// Convert the wire form into typed rules, reporting the first bad entry.
pub fn resolve(file: RuleSetFile) -> Result<RuleSet, IoError> {
    if file.rules.is_empty() {
        return Err(IoError::Invalid("rules must not be empty".into()));
    }

    let mut rules = Vec::with_capacity(file.rules.len());
    for (i, entry) in file.rules.into_iter().enumerate() {
        let kind: RuleKind = entry.rule_type.parse().map_err(|e| IoError::Json {
            pointer: format!("/rules/{i}/rule_type"),
            msg: format!("{e}"),
        })?;
        let x = reference_ratio(&entry.inputs.x, &format!("/rules/{i}/inputs/x"))?;
        rules.push(RuleSpec::new(kind, x));
    }

    Ok(RuleSet { id: file.id, rules })
}

fn reference_ratio(input: &RatioInput, pointer: &str) -> Result<RatioValue, IoError> {
    match input {
        RatioInput::Terms(terms) => RatioValue::from_list(terms.clone()).map_err(|e| IoError::Json {
            pointer: pointer.to_string(),
            msg: e.to_string(),
        }),
        RatioInput::Text(raw) => RatioValue::reference_from_str(raw).map_err(|source| IoError::Ratio {
            pointer: pointer.to_string(),
            source,
        }),
    }
}
