//! Character and string literal decoding.
//!
//! Escape sequences are resolved into code units. Narrow literals produce
//! 8-bit units: ordinary source characters and universal character names are
//! UTF-8 encoded, while octal and hex escapes name a single unit directly.
//! Wide literals produce one 32-bit unit per code point or escape.

use log::debug;
use phf::phf_map;
use thiserror::Error;

use super::IntegerConstant;
use crate::config::IntType;

/// Escapes that stand for one fixed unit.
///
/// `\0` is not listed here; it decodes as a one-digit octal escape.
static SIMPLE_ESCAPES: phf::Map<char, u32> = phf_map! {
    'n' => 0x0A,
    't' => 0x09,
    'r' => 0x0D,
    'a' => 0x07,
    'b' => 0x08,
    'f' => 0x0C,
    'v' => 0x0B,
    '\\' => 0x5C,
    '\'' => 0x27,
    '"' => 0x22,
    '?' => 0x3F,
};

/// Unit width of a character or string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// Plain literal with 8-bit units.
    Narrow,
    /// `L`-prefixed literal with 32-bit units.
    Wide,
}

impl CharWidth {
    const fn max_unit(self) -> u32 {
        match self {
            Self::Narrow => 0xFF,
            Self::Wide => u32::MAX,
        }
    }

    const fn unit_type(self) -> IntType {
        match self {
            Self::Narrow => IntType::unsigned(8),
            Self::Wide => IntType::unsigned(32),
        }
    }
}

/// Errors raised while decoding a character or string literal body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// A backslash followed by a character with no escape meaning.
    #[error("unknown escape sequence '\\{0}'")]
    Unknown(char),
    /// The body ended right after a backslash.
    #[error("escape sequence is missing its character")]
    Truncated,
    /// `\x` without any hex digit.
    #[error("hex escape has no digits")]
    MissingHexDigits,
    /// `\u` or `\U` with fewer digits than required.
    #[error("universal character name needs {expected} hex digits")]
    ShortUniversalName { expected: usize },
    /// A universal character name that is not a Unicode scalar value.
    #[error("universal character name {0:#x} is not a valid code point")]
    InvalidCodePoint(u32),
    /// An octal or hex escape too large for the literal's unit width.
    #[error("escape value {value:#x} does not fit a {bits}-bit unit")]
    OutOfRange { value: u64, bits: u32 },
    /// A character literal without any unit.
    #[error("empty character literal")]
    EmptyCharacter,
    /// A character literal that decodes to more than one unit.
    #[error("character literal decodes to {0} units")]
    MultiCharacter(usize),
}

/// A decoded string literal, terminated by a zero unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringConstant {
    width: CharWidth,
    units: Vec<u32>,
}

impl StringConstant {
    #[must_use]
    pub const fn width(&self) -> CharWidth {
        self.width
    }

    /// Code units including the terminating zero.
    #[must_use]
    pub fn units(&self) -> &[u32] {
        &self.units
    }
}

/// Decode a literal body, without its quotes, into code units.
///
/// # Errors
/// Returns an [`EscapeError`] for malformed or out-of-range escapes.
pub fn decode_units(body: &str, width: CharWidth) -> Result<Vec<u32>, EscapeError> {
    let mut units = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            push_char(&mut units, ch, width);
            continue;
        }
        let escape = chars.next().ok_or(EscapeError::Truncated)?;
        if let Some(unit) = SIMPLE_ESCAPES.get(&escape) {
            units.push(*unit);
            continue;
        }
        match escape {
            '0'..='7' => {
                let mut value = u64::from(octal_value(escape));
                for _ in 0..2 {
                    let Some(digit) = chars.peek().copied().filter(|c| c.is_digit(8)) else {
                        break;
                    };
                    chars.next();
                    value = (value << 3) | u64::from(octal_value(digit));
                }
                units.push(fit_unit(value, width)?);
            }
            'x' => {
                let mut value = 0u64;
                let mut seen = false;
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
                    chars.next();
                    seen = true;
                    value = (value << 4) | u64::from(digit);
                    if value > u64::from(u32::MAX) {
                        return Err(EscapeError::OutOfRange {
                            value,
                            bits: width.unit_type().width(),
                        });
                    }
                }
                if !seen {
                    return Err(EscapeError::MissingHexDigits);
                }
                units.push(fit_unit(value, width)?);
            }
            'u' | 'U' => {
                let expected = if escape == 'u' { 4 } else { 8 };
                let mut value = 0u32;
                for _ in 0..expected {
                    let digit = chars
                        .next()
                        .and_then(|c| c.to_digit(16))
                        .ok_or(EscapeError::ShortUniversalName { expected })?;
                    value = (value << 4) | digit;
                }
                let ch = char::from_u32(value).ok_or(EscapeError::InvalidCodePoint(value))?;
                push_char(&mut units, ch, width);
            }
            other => return Err(EscapeError::Unknown(other)),
        }
    }
    Ok(units)
}

/// Evaluate a character literal body to an unsigned integer constant.
///
/// Narrow literals are `u8`, wide literals `u32`.
///
/// # Errors
/// Returns an [`EscapeError`] when the body is malformed or does not decode
/// to exactly one unit.
pub fn evaluate_char_literal(
    body: &str,
    width: CharWidth,
) -> Result<IntegerConstant, EscapeError> {
    let units = decode_units(body, width)?;
    match units.as_slice() {
        [] => Err(EscapeError::EmptyCharacter),
        [unit] => Ok(IntegerConstant::new(width.unit_type(), u64::from(*unit))),
        many => {
            debug!("character literal {body:?} decoded to {} units", many.len());
            Err(EscapeError::MultiCharacter(many.len()))
        }
    }
}

/// Evaluate a string literal body, appending the terminating zero unit.
///
/// # Errors
/// Returns an [`EscapeError`] when an escape is malformed.
pub fn evaluate_string_literal(
    body: &str,
    width: CharWidth,
) -> Result<StringConstant, EscapeError> {
    let mut units = decode_units(body, width)?;
    units.push(0);
    Ok(StringConstant { width, units })
}

fn push_char(units: &mut Vec<u32>, ch: char, width: CharWidth) {
    match width {
        CharWidth::Narrow => {
            let mut buf = [0u8; 4];
            units.extend(ch.encode_utf8(&mut buf).bytes().map(u32::from));
        }
        CharWidth::Wide => units.push(u32::from(ch)),
    }
}

fn octal_value(digit: char) -> u32 {
    digit.to_digit(8).unwrap_or(0)
}

fn fit_unit(value: u64, width: CharWidth) -> Result<u32, EscapeError> {
    u32::try_from(value)
        .ok()
        .filter(|unit| *unit <= width.max_unit())
        .ok_or(EscapeError::OutOfRange {
            value,
            bits: width.unit_type().width(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("abc", vec![0x61, 0x62, 0x63])]
    #[case::newline("a\\n", vec![0x61, 0x0A])]
    #[case::octal_zero("\\0", vec![0])]
    #[case::octal_three_digits("\\101\\0123", vec![0x41, 0x0A, 0x33])]
    #[case::hex("\\x41\\xff", vec![0x41, 0xFF])]
    #[case::quotes("\\'\\\"\\?", vec![0x27, 0x22, 0x3F])]
    #[case::utf8_source("é", vec![0xC3, 0xA9])]
    #[case::universal("\\u00e9", vec![0xC3, 0xA9])]
    fn decodes_narrow_units(#[case] body: &str, #[case] expected: Vec<u32>) {
        assert_eq!(decode_units(body, CharWidth::Narrow), Ok(expected));
    }

    #[rstest]
    #[case::source_char("é", vec![0xE9])]
    #[case::long_universal("\\U0001F600", vec![0x1_F600])]
    #[case::wide_hex("\\x1234", vec![0x1234])]
    fn decodes_wide_units(#[case] body: &str, #[case] expected: Vec<u32>) {
        assert_eq!(decode_units(body, CharWidth::Wide), Ok(expected));
    }

    #[rstest]
    #[case::unknown("\\q", EscapeError::Unknown('q'))]
    #[case::truncated("a\\", EscapeError::Truncated)]
    #[case::bare_hex("\\xg", EscapeError::MissingHexDigits)]
    #[case::short_universal("\\u12", EscapeError::ShortUniversalName { expected: 4 })]
    #[case::surrogate("\\ud800", EscapeError::InvalidCodePoint(0xD800))]
    #[case::narrow_overflow("\\x100", EscapeError::OutOfRange { value: 0x100, bits: 8 })]
    #[case::octal_overflow("\\777", EscapeError::OutOfRange { value: 0o777, bits: 8 })]
    fn rejects_malformed_escapes(#[case] body: &str, #[case] expected: EscapeError) {
        assert_eq!(decode_units(body, CharWidth::Narrow), Err(expected));
    }

    #[test]
    fn character_literals_need_one_unit() {
        assert_eq!(
            evaluate_char_literal("", CharWidth::Narrow),
            Err(EscapeError::EmptyCharacter)
        );
        assert_eq!(
            evaluate_char_literal("ab", CharWidth::Narrow),
            Err(EscapeError::MultiCharacter(2))
        );
        let wide = evaluate_char_literal("é", CharWidth::Wide)
            .unwrap_or_else(|err| panic!("wide char should decode: {err}"));
        assert_eq!(wide.ty(), IntType::unsigned(32));
        assert_eq!(wide.bits(), 0xE9);
    }

    #[test]
    fn strings_are_zero_terminated() {
        let string = evaluate_string_literal("hi", CharWidth::Narrow)
            .unwrap_or_else(|err| panic!("string should decode: {err}"));
        assert_eq!(string.units(), &[0x68, 0x69, 0]);
        assert_eq!(string.width(), CharWidth::Narrow);
    }
}
