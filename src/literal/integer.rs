//! Integer literal evaluation.
//!
//! The magnitude is accumulated exactly, then the literal is given the
//! narrowest type from the [`TierTable`] that can hold it. A literal written
//! without a sign walks the unsigned tiers; an explicit `+` or `-` forces the
//! signed tiers, even for zero.

use std::fmt;

use log::debug;
use thiserror::Error;

use super::{Base, Sign, accumulate_digits};
use crate::bigint::BigUint;
use crate::config::{IntType, TierTable};

/// A typed integer constant.
///
/// `bits` holds the value reinterpreted in the type's width: negative values
/// are stored in two's complement and masked to `ty.width()` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerConstant {
    ty: IntType,
    bits: u64,
}

impl IntegerConstant {
    /// Build a constant, discarding bits above the type's width.
    #[must_use]
    pub const fn new(ty: IntType, bits: u64) -> Self {
        Self {
            ty,
            bits: bits & ty.mask(),
        }
    }

    #[must_use]
    pub const fn ty(&self) -> IntType {
        self.ty
    }

    /// Raw bit pattern in the type's width.
    #[must_use]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Numeric value, sign-extended for signed types.
    #[must_use]
    pub fn value(&self) -> i128 {
        let raw = i128::from(self.bits);
        let width = self.ty.width();
        if self.ty.is_signed() && (self.bits >> (width - 1)) & 1 == 1 {
            raw - (1i128 << width)
        } else {
            raw
        }
    }
}

impl fmt::Display for IntegerConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.ty, self.value())
    }
}

/// An integer literal too large for every tier of its signedness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("integer literal {literal} does not fit any {} type", signedness(.signed))]
pub struct RangeError {
    literal: String,
    signed: bool,
}

impl RangeError {
    fn new(sign: Sign, base: Base, digits: &str) -> Self {
        let prefix = match base {
            Base::Hex => "0x",
            Base::Binary => "0b",
            Base::Octal if !digits.starts_with('0') => "0",
            Base::Octal | Base::Decimal => "",
        };
        Self {
            literal: format!("{}{prefix}{digits}", sign.as_str()),
            signed: sign.is_explicit(),
        }
    }

    /// The literal as written, including sign and base prefix.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Whether the signed tiers were searched.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }
}

fn signedness(signed: &bool) -> &'static str {
    if *signed { "signed" } else { "unsigned" }
}

/// Evaluate an integer literal and narrow it through `tiers`.
///
/// `digits` carries no sign and no base prefix.
///
/// # Errors
/// Returns a [`RangeError`] when the value fits no tier of the signedness the
/// sign selects.
///
/// # Panics
/// Panics if `digits` contains a character that is not a digit of `base`.
pub fn evaluate_integer_literal(
    sign: Sign,
    base: Base,
    digits: &str,
    tiers: &TierTable,
) -> Result<IntegerConstant, RangeError> {
    let mut magnitude = BigUint::new();
    accumulate_digits(&mut magnitude, base, digits);

    let signed = sign.is_explicit();
    let narrowed = magnitude.to_u64().and_then(|m| {
        let value = if sign.is_negative() {
            -i128::from(m)
        } else {
            i128::from(m)
        };
        tiers.narrowest(signed, value).map(|tier| (tier, m))
    });

    let Some((tier, m)) = narrowed else {
        let err = RangeError::new(sign, base, digits);
        debug!("{err}");
        return Err(err);
    };
    let bits = if sign.is_negative() {
        m.wrapping_neg()
    } else {
        m
    };
    Ok(IntegerConstant::new(tier.ty(), bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(sign: Sign, base: Base, digits: &str) -> Result<IntegerConstant, RangeError> {
        evaluate_integer_literal(sign, base, digits, &TierTable::default())
    }

    #[test]
    fn negative_values_are_stored_in_twos_complement() {
        let constant = eval(Sign::Minus, Base::Decimal, "1")
            .unwrap_or_else(|err| panic!("unexpected range error: {err}"));
        assert_eq!(constant.ty(), IntType::signed(8));
        assert_eq!(constant.bits(), 0xFF);
        assert_eq!(constant.value(), -1);
    }

    #[test]
    fn range_error_renders_the_literal() {
        let err = match eval(Sign::None, Base::Hex, "10000000000000000") {
            Ok(constant) => panic!("expected range error, got {constant}"),
            Err(err) => err,
        };
        assert_eq!(err.literal(), "0x10000000000000000");
        assert!(!err.is_signed());
        assert_eq!(
            err.to_string(),
            "integer literal 0x10000000000000000 does not fit any unsigned type"
        );
    }

    #[test]
    fn displays_type_and_value() {
        let constant = IntegerConstant::new(IntType::signed(16), 0xFF7F);
        assert_eq!(constant.to_string(), "(i16 -129)");
    }
}
