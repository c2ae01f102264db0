//! Compile-time evaluation of literal tokens.
//!
//! The lexer hands over a literal's raw text together with the sign written
//! in front of it. Integer literals are narrowed to the smallest type in the
//! configured [`TierTable`], floating literals are rounded to double
//! precision and demoted to single precision when that loses nothing, and
//! character and string literals have their escapes resolved into code
//! units.
//!
//! Every evaluator here is pure: identical inputs give identical outputs and
//! no state is shared between calls, so literals from independent files may
//! be evaluated on independent threads.

mod escape;
mod float;
mod integer;

pub use escape::{
    CharWidth, EscapeError, StringConstant, decode_units, evaluate_char_literal,
    evaluate_string_literal,
};
pub use float::{FloatConstant, FloatKind, evaluate_float_literal};
pub use integer::{IntegerConstant, RangeError, evaluate_integer_literal};

use crate::bigint::BigUint;
use crate::config::TierTable;

/// Sign written in front of a numeric literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    /// No sign; integer literals take unsigned tiers.
    #[default]
    None,
    /// An explicit `+`, forcing a signed integer type.
    Plus,
    /// An explicit `-`, negating the value.
    Minus,
}

impl Sign {
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Minus)
    }

    /// Source rendering of the sign: empty, `+` or `-`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// Base used by integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Binary integer literal (`0b`).
    Binary,
    /// Octal integer literal (leading `0`).
    Octal,
    /// Decimal integer literal.
    Decimal,
    /// Hexadecimal integer literal (`0x`).
    Hex,
}

impl Base {
    /// Radix associated with the base.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    /// Split an unsigned integer token into its base and digit text.
    ///
    /// `0x`/`0X` select hexadecimal and `0b`/`0B` binary. A leading zero
    /// followed by further digits selects octal; the zero stays in the digit
    /// text, where it does not affect the value.
    #[must_use]
    pub fn from_prefix(text: &str) -> (Self, &str) {
        if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            return (Self::Hex, rest);
        }
        if let Some(rest) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
            return (Self::Binary, rest);
        }
        if text.len() > 1 && text.starts_with('0') {
            return (Self::Octal, text);
        }
        (Self::Decimal, text)
    }

    /// Value of an ASCII digit in this base, if the digit is valid.
    #[must_use]
    pub fn digit_value(self, byte: u8) -> Option<u32> {
        char::from(byte).to_digit(self.radix())
    }
}

/// Either kind of numeric constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberConstant {
    /// An integer narrowed through the tier table.
    Int(IntegerConstant),
    /// A single or double precision float.
    Float(FloatConstant),
}

/// Evaluate a numeric token: a float when it contains `.`, else an integer.
///
/// # Errors
/// Returns a [`RangeError`] when an integer literal fits no tier.
///
/// # Panics
/// Panics if the token contains digits that are invalid for its base. The
/// lexer only produces well-formed numeric tokens.
pub fn evaluate_number(
    sign: Sign,
    text: &str,
    tiers: &TierTable,
) -> Result<NumberConstant, RangeError> {
    if let Some((integer_digits, fraction_digits)) = text.split_once('.') {
        return Ok(NumberConstant::Float(evaluate_float_literal(
            sign,
            integer_digits,
            fraction_digits,
        )));
    }
    let (base, digits) = Base::from_prefix(text);
    evaluate_integer_literal(sign, base, digits, tiers).map(NumberConstant::Int)
}

/// Fold `digits` into `acc` as `acc * radix + digit`, left to right.
fn accumulate_digits(acc: &mut BigUint, base: Base, digits: &str) {
    for byte in digits.bytes() {
        let value = base.digit_value(byte).unwrap_or_else(|| {
            panic!(
                "digit {:?} is not valid in base {}",
                char::from(byte),
                base.radix()
            )
        });
        acc.mul_small(u64::from(base.radix()));
        acc.add_small(u64::from(value));
    }
}
