//! Public-API scenarios for parsing and reduction.

use ratio_core::{gcd_all, parse, reduce, ParseErrorKind, RatioValue};

fn rejects(raw: &str) -> ParseErrorKind {
    parse(raw).expect_err("expected rejection").kind
}

#[test]
fn accepted_inputs() {
    assert_eq!(parse("1:2").unwrap().numbers(), &[1, 2]);
    assert_eq!(parse("3:5:7").unwrap().to_string(), "3:5:7");
    assert_eq!(parse("0:1").unwrap().numbers(), &[0, 1]);
}

#[test]
fn rejected_inputs_by_kind() {
    assert_eq!(rejects("2:4:6"), ParseErrorKind::InvalidForm);
    assert_eq!(rejects(":1:3"), ParseErrorKind::InvalidFormat);
    assert_eq!(rejects("1::2::3"), ParseErrorKind::InvalidColons);
    assert_eq!(rejects("1:3/2"), ParseErrorKind::InvalidRatio);
    assert_eq!(rejects("-1:3"), ParseErrorKind::InvalidChars);
}

#[test]
fn reduction_examples() {
    assert_eq!(reduce(&[2, 4, 6]).unwrap(), vec![1, 2, 3]);
    assert_eq!(reduce(&[2, 3, 5]).unwrap(), vec![2, 3, 5]);
    assert_eq!(gcd_all(&[12, 18, 30]), 6);
}

#[test]
fn trusted_reference_keeps_terms() {
    let x = RatioValue::reference_from_str("2:4:6").unwrap();
    assert_eq!(x.numbers(), &[2, 4, 6]);
    assert_eq!(x.simplest_form(), vec![1, 2, 3]);
    assert!(!x.is_simplest());
    assert_eq!(
        RatioValue::reference_from_str("0:0").unwrap_err().kind,
        ParseErrorKind::InvalidForm
    );
}

#[test]
fn error_display_names_code_and_input() {
    let e = parse("1::2").unwrap_err();
    assert_eq!(e.to_string(), "INVALID_COLONS: \"1::2\"");
    assert!(!e.kind.message().is_empty());
}
