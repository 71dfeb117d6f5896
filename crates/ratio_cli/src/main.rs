// crates/ratio_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, logging, and the four
// subcommands (parse / reduce / check / classify). Each subcommand builds one
// JSON result value; plain-text output is derived from the same value.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Rule evaluated to false / no rule in the set matched.
    pub const NO_MATCH: i32 = 1;
    /// Ratio input rejected or bad flags.
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    /// Rule-set file is malformed.
    pub const CONFIG: i32 = 5;
}

use std::process::ExitCode;

use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{parse_and_validate as parse_cli, Args, Command};
use ratio_core::{parse, ParseError, RatioValue};
use ratio_io::{canonical_json, rule_set, IoError};
use ratio_rules::{classify, evaluate_all, RuleKind};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Learner or reference ratio rejected by the parser.
    Input(ParseError),
    /// Rule-set shape / content errors.
    Config(String),
    /// Read/write/path errors.
    Io(String),
}

/// Successful run: the JSON result plus whether the rule (or any rule) held.
struct Report {
    value: Value,
    text: String,
    matched: bool,
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("ratio: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_logging(&args.log_level);

    let rc = match run(&args).and_then(|report| emit(&args, report)) {
        Ok(true) => exitcodes::OK,
        Ok(false) => exitcodes::NO_MATCH,
        Err(e) => report_error(&args, &e),
    };
    ExitCode::from(rc as u8)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(args: &Args) -> Result<Report, MainError> {
    match &args.command {
        Command::Parse { raw } => run_parse(raw),
        Command::Reduce { raw } => run_reduce(raw),
        Command::Check { rule, answer, input } => run_check(*rule, answer, input),
        Command::Classify { rules, answer } => run_classify(rules, answer),
    }
}

fn run_parse(raw: &str) -> Result<Report, MainError> {
    let ratio = parse(raw).map_err(MainError::Input)?;
    Ok(Report {
        value: json!({
            "ok": true,
            "ratio": ratio.to_string(),
            "numbers": ratio.numbers(),
            "term_count": ratio.term_count(),
        }),
        text: ratio.to_string(),
        matched: true,
    })
}

fn run_reduce(raw: &str) -> Result<Report, MainError> {
    let ratio = RatioValue::reference_from_str(raw).map_err(MainError::Input)?;
    let simplest = ratio.simplest_form();
    let rendered = render_terms(&simplest);
    Ok(Report {
        value: json!({
            "ok": true,
            "input": ratio.to_string(),
            "simplest": rendered,
            "numbers": simplest,
            "already_simplest": ratio.is_simplest(),
        }),
        text: rendered,
        matched: true,
    })
}

fn run_check(rule: RuleKind, answer: &str, input: &str) -> Result<Report, MainError> {
    let answer = parse(answer).map_err(MainError::Input)?;
    let input = RatioValue::reference_from_str(input).map_err(MainError::Input)?;
    let hit = rule.evaluate(&answer, &input);
    tracing::info!(rule = rule.name(), %answer, %input, hit, "check");
    Ok(Report {
        value: json!({
            "rule": rule.name(),
            "answer": answer.to_string(),
            "input": input.to_string(),
            "hit": hit,
        }),
        text: hit.to_string(),
        matched: hit,
    })
}

fn run_classify(rules_path: &std::path::Path, answer: &str) -> Result<Report, MainError> {
    let set = rule_set::load_rule_set(rules_path).map_err(map_io_err)?;
    let answer = parse(answer).map_err(MainError::Input)?;

    let outcomes = evaluate_all(&answer, &set.rules);
    let first = classify(&answer, &set.rules);
    tracing::info!(
        rules = set.len(),
        matched = first.map(|m| m.index),
        %answer,
        "classify"
    );

    let (matched_json, text) = match first {
        Some(m) => (
            json!({
                "index": m.index,
                "rule_type": m.rule.rule_type.name(),
                "input": m.rule.inputs.x.to_string(),
            }),
            format!("match {} {} {}", m.index, m.rule.rule_type, m.rule.inputs.x),
        ),
        None => (Value::Null, "no match".to_string()),
    };

    Ok(Report {
        value: json!({
            "rule_set_id": set.id,
            "answer": answer.to_string(),
            "matched": matched_json,
            "outcomes": outcomes,
        }),
        text,
        matched: first.is_some(),
    })
}

/// Print the report (text or canonical JSON) and optionally persist it.
fn emit(args: &Args, report: Report) -> Result<bool, MainError> {
    if let Some(out) = &args.out {
        canonical_json::write_canonical_file(out, &report.value).map_err(map_io_err)?;
    }
    if args.json {
        let bytes = canonical_json::to_canonical_json_bytes(&report.value).map_err(map_io_err)?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        println!("{}", report.text);
    }
    Ok(report.matched)
}

/// Print the error in the selected format and return its exit code.
fn report_error(args: &Args, e: &MainError) -> i32 {
    match e {
        MainError::Input(pe) => {
            if args.json {
                let v = json!({
                    "ok": false,
                    "error": {
                        "code": pe.kind.code(),
                        "message": pe.kind.message(),
                        "raw": pe.raw,
                    }
                });
                match canonical_json::to_canonical_json_bytes(&v) {
                    Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
                    Err(_) => eprintln!("ratio: {}: {}", pe.kind.code(), pe.kind.message()),
                }
            } else {
                eprintln!("ratio: {}: {}", pe.kind.code(), pe.kind.message());
            }
        }
        MainError::Config(m) => eprintln!("ratio: rule set: {m}"),
        MainError::Io(m) => eprintln!("ratio: io: {m}"),
    }
    map_error(e)
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Input(_) => VALIDATION,
        MainError::Config(_) => CONFIG,
        MainError::Io(_) => IO,
    }
}

/// Translate ratio_io::IoError into MainError buckets for exit-code mapping.
fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Path(m) => MainError::Io(m),
        e @ (IoError::Json { .. } | IoError::Ratio { .. } | IoError::Invalid(_)) => {
            MainError::Config(e.to_string())
        }
    }
}

fn render_terms(terms: &[u64]) -> String {
    terms
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(":")
}
