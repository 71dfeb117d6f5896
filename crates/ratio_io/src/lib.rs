//! crates/ratio_io/src/lib.rs
//! Small, offline I/O crate for ratio tooling.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - `rule_set`: load and validate rule-set JSON files into typed `RuleSpec`s.
//! - `canonical_json`: sorted-key compact JSON and atomic file writes.

#![forbid(unsafe_code)]

use ratio_core::ParseError;
use thiserror::Error;

/// Unified error for ratio_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (read, create_dir_all, rename, …).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON syntax or shape errors, with a JSON Pointer when known.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// A ratio inside a rule set failed to parse.
    #[error("ratio error at {pointer}: {source}")]
    Ratio {
        pointer: String,
        #[source]
        source: ParseError,
    },

    /// Rule-set level invariants (empty rule list, unknown rule, bad path).
    #[error("invalid rule set: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps line/column, not a pointer; callers may enrich.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

pub mod canonical_json;
pub mod rule_set;

/// Returns true if `s` looks like a URL (any `<scheme>://`, plus bare http/https/file prefixes).
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://")
        || lower.starts_with("http:")
        || lower.starts_with("https:")
        || lower.starts_with("file:")
}

pub mod prelude {
    pub use crate::{looks_like_url_strict, IoError, IoResult};

    pub use crate::canonical_json::{to_canonical_json_bytes, write_canonical_file};
    pub use crate::rule_set::{load_rule_set, parse_rule_set_bytes, RuleSet};
}
