//! Floating literal evaluation.
//!
//! A decimal literal `I.F` denotes the rational `IF / 10^len(F)`. The
//! evaluator divides that out exactly enough to obtain a binary mantissa of
//! [`QUOTIENT_BITS`] bits whose lowest bit is forced on when the division
//! left a remainder. That sticky bit sits far below any rounding position,
//! so every tie and half-way test made on the truncated quotient agrees with
//! the exact value.
//!
//! The quotient is then rounded to double precision, and the double result
//! is rounded again to single precision. The second step consumes the
//! direction recorded by the first, which makes the chained result equal to
//! a direct rounding of the exact value. The literal is typed `float` when
//! the single result widens back to exactly the double result.

use std::fmt;

use log::{debug, trace};

use super::{Base, Sign, accumulate_digits};
use crate::bigint::{BigUint, RoundingDirection};

/// Significant bits kept from the scaled division before rounding.
const QUOTIENT_BITS: usize = 64;

/// Shape of an IEEE-754 binary interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Format {
    /// Significand bits including the implicit leading bit.
    precision: i64,
    /// Smallest exponent of a normal number.
    min_exponent: i64,
    /// Largest exponent of a finite number; also the exponent bias.
    max_exponent: i64,
    exponent_bits: u32,
}

const DOUBLE: Format = Format {
    precision: 53,
    min_exponent: -1022,
    max_exponent: 1023,
    exponent_bits: 11,
};

const SINGLE: Format = Format {
    precision: 24,
    min_exponent: -126,
    max_exponent: 127,
    exponent_bits: 8,
};

impl Format {
    fn fraction_bits(self) -> u32 {
        u32::try_from(self.precision - 1).unwrap_or(0)
    }

    fn sign_bit(self) -> u64 {
        1 << (self.fraction_bits() + self.exponent_bits)
    }

    fn infinity(self) -> u64 {
        ((1 << self.exponent_bits) - 1) << self.fraction_bits()
    }

    /// Bits the format can hold for a value whose leading bit has weight
    /// `2^msb_exponent`, or `None` when the value lies below half of the
    /// smallest subnormal.
    fn precision_at(self, msb_exponent: i64) -> Option<usize> {
        let available = if msb_exponent >= self.min_exponent {
            self.precision
        } else {
            self.precision - (self.min_exponent - msb_exponent)
        };
        usize::try_from(available).ok()
    }
}

/// The value `mantissa * 2^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BinaryFloat {
    mantissa: BigUint,
    exponent: i64,
}

impl BinaryFloat {
    fn zero() -> Self {
        Self {
            mantissa: BigUint::new(),
            exponent: 0,
        }
    }

    /// `numerator / denominator` truncated to at least [`QUOTIENT_BITS`]
    /// bits, with a sticky lowest bit standing in for any remainder.
    fn quotient(numerator: &BigUint, denominator: &BigUint) -> Self {
        let shift = to_i64(QUOTIENT_BITS) - to_i64(numerator.significant_bits())
            + to_i64(denominator.significant_bits());
        let magnitude = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
        let (mut mantissa, remainder) = if shift >= 0 {
            numerator.shifted_left(magnitude).div_rem(denominator)
        } else {
            numerator.div_rem(&denominator.shifted_left(magnitude))
        };
        if !remainder.is_zero() {
            mantissa.set_bit(0);
        }
        Self {
            mantissa,
            exponent: -shift,
        }
    }

    fn msb_exponent(&self) -> i64 {
        self.exponent + to_i64(self.mantissa.significant_bits()) - 1
    }

    /// Round to what `format` can represent at this magnitude.
    fn round(&self, format: Format, incoming: RoundingDirection) -> (Self, RoundingDirection) {
        if self.mantissa.is_zero() {
            return (self.clone(), incoming);
        }
        let Some(precision) = format.precision_at(self.msb_exponent()) else {
            return (Self::zero(), RoundingDirection::Down);
        };
        let (mantissa, direction) = self.mantissa.round_to_bits(precision, incoming);
        trace!(
            "rounded to {precision} bits at 2^{}: {direction:?}",
            self.msb_exponent()
        );
        (
            Self {
                mantissa,
                exponent: self.exponent,
            },
            direction,
        )
    }

    /// Encode an already rounded value as an IEEE-754 bit pattern.
    fn encode(&self, format: Format, negative: bool) -> u64 {
        let sign = if negative { format.sign_bit() } else { 0 };
        if self.mantissa.is_zero() {
            return sign;
        }
        let msb = self.msb_exponent();
        if msb > format.max_exponent {
            return sign | format.infinity();
        }
        let available = self.mantissa.significant_bits();
        let fraction_bits = format.fraction_bits();
        if msb >= format.min_exponent {
            let precision = usize::try_from(format.precision).unwrap_or(0);
            let kept = available.min(precision);
            let significand = self.mantissa.top_bits(kept) << (precision - kept);
            let biased = u64::try_from(msb + format.max_exponent).unwrap_or(0);
            let fraction = significand & ((1 << fraction_bits) - 1);
            return sign | (biased << fraction_bits) | fraction;
        }
        let lowest = format.min_exponent - i64::from(fraction_bits);
        let kept = usize::try_from(msb - lowest + 1).unwrap_or(0);
        sign | self.mantissa.top_bits(kept.min(available))
    }
}

/// Precision a float literal is typed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    /// IEEE-754 binary32.
    Single,
    /// IEEE-754 binary64.
    Double,
}

/// A typed floating constant holding its IEEE-754 bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatConstant {
    Single(u32),
    Double(u64),
}

impl FloatConstant {
    #[must_use]
    pub const fn kind(&self) -> FloatKind {
        match self {
            Self::Single(_) => FloatKind::Single,
            Self::Double(_) => FloatKind::Double,
        }
    }

    /// The bit pattern, zero-extended for single precision.
    #[must_use]
    pub fn bits(&self) -> u64 {
        match self {
            Self::Single(bits) => u64::from(*bits),
            Self::Double(bits) => *bits,
        }
    }

    /// The value as an `f64`; single constants widen exactly.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Single(bits) => f64::from(f32::from_bits(*bits)),
            Self::Double(bits) => f64::from_bits(*bits),
        }
    }
}

impl fmt::Display for FloatConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(bits) => write!(f, "(f32 {bits:#010x})"),
            Self::Double(bits) => write!(f, "(f64 {bits:#018x})"),
        }
    }
}

/// Evaluate a decimal floating literal `integer_digits.fraction_digits`.
///
/// Either digit string may be empty, but not both. The literal is typed
/// single precision only when that loses nothing relative to the double
/// precision result; `-0.0` keeps its sign bit. Values beyond the double
/// range become infinity and values below half the smallest subnormal
/// become zero.
///
/// # Panics
/// Panics if either string contains a non-decimal character.
#[must_use]
pub fn evaluate_float_literal(
    sign: Sign,
    integer_digits: &str,
    fraction_digits: &str,
) -> FloatConstant {
    let negative = sign.is_negative();
    let (double, single) = rounded_candidates(&scaled_value(integer_digits, fraction_digits));
    let double_bits = double.encode(DOUBLE, negative);
    let single_bits = low_word(single.encode(SINGLE, negative));

    let constant = if f64::from(f32::from_bits(single_bits)).to_bits() == double_bits {
        FloatConstant::Single(single_bits)
    } else {
        FloatConstant::Double(double_bits)
    };
    debug!(
        "float literal {}{integer_digits}.{fraction_digits} evaluated to {constant}",
        sign.as_str()
    );
    constant
}

fn scaled_value(integer_digits: &str, fraction_digits: &str) -> BinaryFloat {
    let mut digits = BigUint::new();
    accumulate_digits(&mut digits, Base::Decimal, integer_digits);
    accumulate_digits(&mut digits, Base::Decimal, fraction_digits);
    if digits.is_zero() {
        return BinaryFloat::zero();
    }
    BinaryFloat::quotient(&digits, &BigUint::power_of_ten(fraction_digits.len()))
}

/// Round to double precision, then round that result to single precision
/// using the direction the first rounding recorded.
fn rounded_candidates(value: &BinaryFloat) -> (BinaryFloat, BinaryFloat) {
    let (double, direction) = value.round(DOUBLE, RoundingDirection::Exact);
    let (single, _) = double.round(SINGLE, direction);
    (double, single)
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn low_word(value: u64) -> u32 {
    u32::try_from(value & u64::from(u32::MAX)).unwrap_or(u32::MAX)
}
