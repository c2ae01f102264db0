//! Helpers for evaluating literals and asserting parser errors in tests.
//!
//! These functions reduce boilerplate when checking evaluated constants and
//! verifying that failures surface precise spans and messages.

mod assertions;

pub use assertions::{assert_no_parse_errors, assert_parse_error};

use crate::config::TierTable;
use crate::literal::{FloatConstant, IntegerConstant, NumberConstant, Sign, evaluate_number};
use crate::{Span, SyntaxKind, tokenize_with_trivia};

/// Tokenize `src` into `(SyntaxKind, Span)` pairs using
/// [`tokenize_with_trivia`].
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use litfold::test_util::tokenize;
/// assert_eq!(tokenize("0x7AB7").len(), 1);
/// # }
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_with_trivia(src)
}

/// Common error message patterns for parser assertions.
#[derive(Debug, Clone)]
pub enum ErrorPattern {
    Custom(String),
}

impl From<&str> for ErrorPattern {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_string())
    }
}

/// Replace internal token names with human-readable forms.
pub(crate) fn normalise_tokens(s: &str) -> String {
    use SyntaxKind as K;
    let keys = [
        (K::T_LBRACE, "left brace"),
        (K::T_RBRACE, "right brace"),
        (K::T_COMMA, "comma"),
        (K::T_PLUS, "plus"),
        (K::T_MINUS, "minus"),
        (K::T_INT, "integer"),
        (K::T_FLOAT, "float"),
    ];
    let mut out = s.to_string();
    for (k, human) in keys {
        let raw = format!("{k:?}");
        out = out.replace(&raw, human);
    }
    out
}

/// Evaluate an integer token with the default tier table.
///
/// # Panics
/// Panics if the token is a float or fits no tier.
#[must_use]
#[track_caller]
pub fn eval_int(sign: Sign, text: &str) -> IntegerConstant {
    match evaluate_number(sign, text, &TierTable::default()) {
        Ok(NumberConstant::Int(int)) => int,
        other => panic!("expected an integer constant for {text:?}, got {other:?}"),
    }
}

/// Evaluate a float token.
///
/// # Panics
/// Panics if the token is not a float literal.
#[must_use]
#[track_caller]
pub fn eval_float(sign: Sign, text: &str) -> FloatConstant {
    match evaluate_number(sign, text, &TierTable::default()) {
        Ok(NumberConstant::Float(float)) => float,
        other => panic!("expected a float constant for {text:?}, got {other:?}"),
    }
}
