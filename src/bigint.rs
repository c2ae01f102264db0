//! Arbitrary-precision unsigned integers for literal evaluation.
//!
//! [`BigUint`] wraps [`num_bigint::BigUint`], whose 32-bit digits are stored
//! least significant first. On top of the crate's arithmetic it adds what
//! the literal evaluators need: small-operand accumulation, bit inspection
//! and a rounding primitive that reports the direction of the error it
//! introduced.
//!
//! Rounding is a pure function of the value, the target precision, and the
//! direction of any earlier rounding. Threading the direction explicitly lets
//! two chained roundings (double precision, then single precision) agree with
//! a single direct rounding to the narrower format.

use num_traits::{One, ToPrimitive, Zero};

/// Direction of the error introduced by a rounding step.
///
/// `Down` means the stored value is smaller than the true value, `Up` means
/// it is larger. `Exact` covers both "no bits were lost" and "never rounded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingDirection {
    /// The stored value is below the true value.
    Down,
    /// The stored value equals the true value.
    #[default]
    Exact,
    /// The stored value is above the true value.
    Up,
}

impl RoundingDirection {
    /// The direction as a sign: `-1`, `0`, or `+1`.
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Down => -1,
            Self::Exact => 0,
            Self::Up => 1,
        }
    }
}

/// Non-negative integer of unbounded size.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigUint {
    value: num_bigint::BigUint,
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        Self {
            value: num_bigint::BigUint::from(value),
        }
    }
}

impl BigUint {
    /// A zero value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `10^exponent`.
    #[must_use]
    pub fn power_of_ten(exponent: usize) -> Self {
        Self {
            value: num_traits::pow(num_bigint::BigUint::from(10u32), exponent),
        }
    }

    /// The 32-bit digits, least significant first. Zero is a single zero
    /// digit and no other value has a leading zero digit.
    #[must_use]
    pub fn digits(&self) -> Vec<u32> {
        let digits = self.value.to_u32_digits();
        if digits.is_empty() { vec![0] } else { digits }
    }

    /// Number of populated 32-bit digits. Never zero.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits().len()
    }

    /// Returns `true` when the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Multiply in place by a small factor.
    pub fn mul_small(&mut self, factor: u64) {
        self.value *= factor;
    }

    /// Add a small value in place.
    pub fn add_small(&mut self, addend: u64) {
        self.value += addend;
    }

    /// Number of bits from the most significant set bit down to bit 0.
    #[must_use]
    pub fn significant_bits(&self) -> usize {
        usize::try_from(self.value.bits()).unwrap_or(usize::MAX)
    }

    /// The bit at `index`, counted from the least significant bit.
    ///
    /// Bits above the most significant bit read as zero.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        self.value.bit(wide(index))
    }

    /// Set the bit at `index`, growing the value as needed.
    pub fn set_bit(&mut self, index: usize) {
        self.value.set_bit(wide(index), true);
    }

    /// The `count` most significant bits, right aligned.
    ///
    /// # Panics
    /// Panics if `count` exceeds 64 or the number of significant bits.
    #[must_use]
    pub fn top_bits(&self, count: usize) -> u64 {
        let total = self.significant_bits();
        assert!(
            count <= 64 && count <= total,
            "cannot take {count} bits from a {total}-bit value"
        );
        (&self.value >> (total - count)).to_u64().unwrap_or(u64::MAX)
    }

    /// The value as a `u64`, if it fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    /// Round to the `precision` most significant bits, half to even.
    ///
    /// All bits below the kept ones are cleared. On an exact tie the
    /// `incoming` direction of an earlier rounding takes precedence over the
    /// even rule: a value that was previously rounded down rounds up now and
    /// vice versa. The returned direction describes the error of the result
    /// relative to the true value; when no set bits are discarded the
    /// incoming direction is passed through unchanged.
    ///
    /// A precision of zero rounds either to zero or to the next power of two
    /// above the most significant bit.
    #[must_use]
    pub fn round_to_bits(
        &self,
        precision: usize,
        incoming: RoundingDirection,
    ) -> (Self, RoundingDirection) {
        let total = self.significant_bits();
        if total <= precision {
            return (self.clone(), incoming);
        }
        let cutoff = total - precision - 1;
        let guard = self.bit(cutoff);
        let sticky = self.any_bit_below(cutoff);
        if !guard && !sticky {
            return (self.clone(), incoming);
        }

        let round_up = match (guard, sticky) {
            (false, _) => false,
            (true, true) => true,
            (true, false) => match incoming {
                RoundingDirection::Down => true,
                RoundingDirection::Up => false,
                RoundingDirection::Exact => self.bit(cutoff + 1),
            },
        };

        let kept = &self.value >> (cutoff + 1);
        if round_up {
            let value = (kept + num_bigint::BigUint::one()) << (cutoff + 1);
            (Self { value }, RoundingDirection::Up)
        } else {
            let value = kept << (cutoff + 1);
            (Self { value }, RoundingDirection::Down)
        }
    }

    /// Shift left by `bits` positions.
    #[must_use]
    pub fn shifted_left(&self, bits: usize) -> Self {
        Self {
            value: &self.value << bits,
        }
    }

    /// Quotient and remainder of `self / divisor`.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division of a big integer by zero");
        let quotient = &self.value / &divisor.value;
        let remainder = &self.value % &divisor.value;
        (Self { value: quotient }, Self { value: remainder })
    }

    /// Returns `true` if any bit strictly below `index` is set.
    fn any_bit_below(&self, index: usize) -> bool {
        self.value
            .trailing_zeros()
            .is_some_and(|zeros| zeros < wide(index))
    }
}

fn wide(index: usize) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX)
}
