//! ratio_core: Ratio value type, simplest-form reduction, and the strict parser.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across
//! the workspace (`ratio_rules`, `ratio_io`, `ratio_cli`).
//!
//! - `RatioValue`: ordered, immutable sequence of non-negative integer terms
//! - Integer-first reduction: iterative GCD, simplest form
//! - Strict parser with a closed five-kind error taxonomy
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors;
pub mod parse;
pub mod reduce;
pub mod value;

pub use errors::{ParseError, ParseErrorKind, ReduceError, ValueError};
pub use parse::{is_valid, parse, parse_terms};
pub use reduce::{gcd, gcd_all, is_simplest, reduce};
pub use value::RatioValue;
