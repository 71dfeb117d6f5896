// crates/ratio_cli/src/args.rs
//
// CLI argument surface (types + light validation).
//
// Rules:
// - Ratio arguments are taken as raw text; parsing happens in main so that
//   rejections map to the ratio error codes, not to clap usage errors.
// - No networked paths: --rules / --out must be local (no scheme://).
// - --json switches stdout to canonical JSON; --out also writes it to a file.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ratio_rules::RuleKind;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ratio",
    version,
    disable_help_subcommand = true,
    about = "Parse, reduce, and rule-check colon-separated ratios"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Emit canonical JSON on stdout instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write the JSON result to this file (atomic replace).
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Parse learner input; must be digits separated by colons, in simplest form.
    Parse {
        /// Raw ratio text, e.g. 1:2:3
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Reduce a ratio to simplest form (unsimplified input allowed).
    Reduce {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Evaluate one rule for an answer against a reference ratio.
    Check {
        /// Equals | HasNumberOfTermsEqualTo | IsEquivalent (snake/kebab spellings accepted)
        #[arg(long, value_parser = parse_rule_kind)]
        rule: RuleKind,
        /// Learner answer (strict parse).
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
        /// Reference ratio (trusted; may be unsimplified).
        #[arg(long, allow_hyphen_values = true)]
        input: String,
    },
    /// Classify an answer against an ordered rule-set file (first match wins).
    Classify {
        /// Rule-set JSON path.
        #[arg(long)]
        rules: PathBuf,
        /// Learner answer (strict parse).
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
    },
}

/// Errors surfaced by argument validation.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    BadLogLevel(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            CliError::BadLogLevel(s) => write!(f, "invalid log level: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

pub fn parse_rule_kind(s: &str) -> Result<RuleKind, String> {
    s.parse::<RuleKind>().map_err(|e| e.to_string())
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    validate(&args)?;
    Ok(args)
}

pub fn validate(args: &Args) -> Result<(), CliError> {
    for p in iter_all_paths(args) {
        ensure_local_path(p)?;
    }
    if !matches!(
        args.log_level.to_ascii_lowercase().as_str(),
        "error" | "warn" | "info" | "debug" | "trace" | "off"
    ) {
        return Err(CliError::BadLogLevel(args.log_level.clone()));
    }
    Ok(())
}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if ratio_io::looks_like_url_strict(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}

fn iter_all_paths(args: &Args) -> impl Iterator<Item = &Path> {
    let rules = match &args.command {
        Command::Classify { rules, .. } => Some(rules.as_path()),
        _ => None,
    };
    [rules, args.out.as_deref()].into_iter().flatten()
}
