//! Library crate for litfold.
//!
//! Evaluates the numeric, character and string literals of a C-like
//! language at compile time. Integers are narrowed to the smallest fitting
//! type of a configurable tier table, floats are rounded once per target
//! precision, and escapes are decoded into code units.

#![forbid(unsafe_code)]

pub mod bigint;
pub mod config;
pub mod language;
pub mod literal;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use config::{IntType, TierTable, TierTableError};
pub use language::SyntaxKind;
pub use literal::{FloatConstant, FloatKind, IntegerConstant, RangeError};
pub use parser::{Parsed, ast, parse_constant, parse_initializer};
pub use tokenizer::{Span, tokenize_with_trivia, tokenize_without_trivia};
