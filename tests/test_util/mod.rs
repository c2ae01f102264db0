//! Shared test utilities for integration tests.
//!
//! These helpers evaluate literals and assert over parser errors. They mirror
//! a subset of the `litfold::test_util` module without requiring the
//! `test-support` feature, enabling integration tests to compile against the
//! published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use chumsky::error::{Simple, SimpleReason};
use litfold::{
    FloatConstant, IntegerConstant, SyntaxKind, TierTable,
    literal::{NumberConstant, Sign, evaluate_number},
};

/// Split an optional leading sign from a literal as written.
#[must_use]
pub fn split_sign(src: &str) -> (Sign, &str) {
    src.strip_prefix('-')
        .map(|rest| (Sign::Minus, rest))
        .or_else(|| src.strip_prefix('+').map(|rest| (Sign::Plus, rest)))
        .unwrap_or((Sign::None, src))
}

/// Evaluate a possibly signed integer literal with the default tiers.
///
/// # Panics
/// Panics if the literal is a float or fits no tier.
#[must_use]
#[track_caller]
pub fn int(src: &str) -> IntegerConstant {
    let (sign, text) = split_sign(src);
    match evaluate_number(sign, text, &TierTable::default()) {
        Ok(NumberConstant::Int(int)) => int,
        other => panic!("expected an integer constant for {src:?}, got {other:?}"),
    }
}

/// Evaluate a possibly signed float literal.
///
/// # Panics
/// Panics if the literal is not a float.
#[must_use]
#[track_caller]
pub fn float(src: &str) -> FloatConstant {
    let (sign, text) = split_sign(src);
    match evaluate_number(sign, text, &TierTable::default()) {
        Ok(NumberConstant::Float(float)) => float,
        other => panic!("expected a float constant for {src:?}, got {other:?}"),
    }
}

/// The message of a custom diagnostic.
#[must_use]
pub fn message(error: &Simple<SyntaxKind>) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        other => format!("{other:?}"),
    }
}

/// Assert that exactly one error with `fragment` in its message covers
/// `start..end`.
///
/// # Panics
/// Panics if the errors differ from that expectation.
#[track_caller]
pub fn assert_single_error(
    errors: &[Simple<SyntaxKind>],
    fragment: &str,
    start: usize,
    end: usize,
) {
    let [error] = errors else {
        panic!("expected one error, got {errors:?}");
    };
    let msg = message(error);
    assert!(
        msg.contains(fragment),
        "expected error to contain '{fragment}', got '{msg}'"
    );
    assert_eq!(error.span(), start..end);
}
