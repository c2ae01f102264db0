//! Assertion helpers for verifying parser errors in tests.

use super::{ErrorPattern, normalise_tokens};
use crate::SyntaxKind;
use chumsky::error::Simple;

/// Assert that a parser produced no errors.
///
/// # Examples
///
/// ```
/// use litfold::test_util::assert_no_parse_errors;
/// let errors: Vec<chumsky::error::Simple<litfold::SyntaxKind>> = Vec::new();
/// assert_no_parse_errors(&errors);
/// ```
///
/// # Panics
/// Panics if `errors` is not empty.
#[track_caller]
pub fn assert_no_parse_errors<E: std::fmt::Debug>(errors: &[E]) {
    assert!(errors.is_empty(), "Parse errors: {errors:?}");
}

/// Assert that the parser produced exactly one error matching
/// `expected_pattern` and span.
///
/// # Examples
///
/// ```
/// use chumsky::error::Simple;
/// use litfold::{test_util::assert_parse_error, SyntaxKind};
///
/// let err: Simple<SyntaxKind> = Simple::custom(0..1, "oops");
/// assert_parse_error(&[err], "oops", 0, 1);
/// ```
///
/// # Panics
/// Panics if `errors` does not hold exactly one error, if its message fails
/// to match, or if its span differs.
#[track_caller]
#[expect(clippy::expect_used, reason = "test helpers use expect for clarity")]
pub fn assert_parse_error(
    errors: &[Simple<SyntaxKind>],
    expected_pattern: impl Into<ErrorPattern>,
    start: usize,
    end: usize,
) {
    let pattern: ErrorPattern = expected_pattern.into();
    assert_eq!(errors.len(), 1, "expected one error, got {errors:?}");
    let error = errors.first().expect("error missing");
    let rendered = format!("{error:?}");
    let rendered_normalised = normalise_tokens(&rendered);
    let pattern_normalised = match &pattern {
        ErrorPattern::Custom(msg) => normalise_tokens(msg),
    };
    assert!(
        rendered_normalised.contains(&pattern_normalised),
        "expected error to contain pattern '{pattern:?}', got '{rendered}'",
    );
    assert_eq!(error.span(), start..end);
}
