// crates/ratio_rules/src/lib.rs
#![forbid(unsafe_code)]

//! Rule layer for ratio answers.
//!
//! Every rule is a pure predicate over `(answer, input)`; there is no service
//! object and no state to inject. [`classify`] walks an ordered rule list and
//! reports the first rule that holds.

pub use ratio_core::RatioValue;

// File modules
pub mod classify;
pub mod rules;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use classify::{classify, evaluate_all, RuleInputs, RuleMatch, RuleOutcome, RuleSpec};
pub use rules::{equals, has_number_of_terms_equal_to, is_equivalent, RuleKind, UnknownRule};
