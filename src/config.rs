//! Integer type-narrowing configuration.
//!
//! A [`TierTable`] lists, per signedness, the integer widths an unsuffixed
//! literal may be given, narrowest first. The evaluator walks the list and
//! picks the first tier whose range contains the literal's value, so the
//! table decides the target's literal typing without touching evaluator
//! logic.

use std::fmt;

use thiserror::Error;

/// Widest tier a table may declare.
pub const MAX_TIER_WIDTH: u32 = 64;

const FOUR_TIER_WIDTHS: [u32; 4] = [8, 16, 32, 64];
const THREE_TIER_WIDTHS: [u32; 3] = [8, 32, 64];

/// An integer type: bit width plus signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    width: u32,
    signed: bool,
}

impl IntType {
    /// An unsigned type of `width` bits.
    #[must_use]
    pub const fn unsigned(width: u32) -> Self {
        Self {
            width,
            signed: false,
        }
    }

    /// A two's complement signed type of `width` bits.
    #[must_use]
    pub const fn signed(width: u32) -> Self {
        Self {
            width,
            signed: true,
        }
    }

    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// Mask selecting the low `width` bits of a `u64`.
    #[must_use]
    pub const fn mask(self) -> u64 {
        if self.width >= MAX_TIER_WIDTH {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{prefix}{}", self.width)
    }
}

/// One row of the tier table: a type and its inclusive value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    ty: IntType,
    min: i128,
    max: i128,
}

impl Tier {
    fn new(ty: IntType) -> Self {
        let width = ty.width();
        let (min, max) = if ty.is_signed() {
            let half = 1i128 << (width - 1);
            (-half, half - 1)
        } else {
            (0, (1i128 << width) - 1)
        };
        Self { ty, min, max }
    }

    #[must_use]
    pub const fn ty(&self) -> IntType {
        self.ty
    }

    /// Smallest value the tier admits.
    #[must_use]
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// Largest value the tier admits.
    #[must_use]
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Returns `true` when `value` lies within the tier's range.
    #[must_use]
    pub const fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Errors raised when building a custom [`TierTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierTableError {
    /// A signedness was given no tiers at all.
    #[error("{kind} tier list is empty")]
    Empty { kind: &'static str },
    /// A width of zero or above the supported maximum.
    #[error("tier width {width} is outside 1..={MAX_TIER_WIDTH}")]
    InvalidWidth { width: u32 },
    /// Widths must grow strictly from one tier to the next.
    #[error("{kind} tier widths must be strictly ascending: {prev} then {next}")]
    NotAscending {
        kind: &'static str,
        prev: u32,
        next: u32,
    },
}

/// Ordered integer tiers for unsigned and signed literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    unsigned: Vec<Tier>,
    signed: Vec<Tier>,
}

impl Default for TierTable {
    /// Eight, sixteen, thirty-two and sixty-four bit tiers.
    fn default() -> Self {
        Self::from_valid_widths(&FOUR_TIER_WIDTHS, &FOUR_TIER_WIDTHS)
    }
}

impl TierTable {
    /// Build a table from explicit width lists.
    ///
    /// # Errors
    /// Returns a [`TierTableError`] when a list is empty, a width falls
    /// outside `1..=64`, or widths are not strictly ascending.
    pub fn new(unsigned_widths: &[u32], signed_widths: &[u32]) -> Result<Self, TierTableError> {
        validate_widths("unsigned", unsigned_widths)?;
        validate_widths("signed", signed_widths)?;
        Ok(Self::from_valid_widths(unsigned_widths, signed_widths))
    }

    /// The eight, thirty-two and sixty-four bit table without 16-bit tiers.
    #[must_use]
    pub fn three_tier() -> Self {
        Self::from_valid_widths(&THREE_TIER_WIDTHS, &THREE_TIER_WIDTHS)
    }

    /// Tiers for literals written without a sign.
    #[must_use]
    pub fn unsigned(&self) -> &[Tier] {
        &self.unsigned
    }

    /// Tiers for literals written with an explicit sign.
    #[must_use]
    pub fn signed(&self) -> &[Tier] {
        &self.signed
    }

    /// The narrowest tier of the requested signedness containing `value`.
    #[must_use]
    pub fn narrowest(&self, signed: bool, value: i128) -> Option<Tier> {
        let tiers = if signed { &self.signed } else { &self.unsigned };
        tiers.iter().copied().find(|tier| tier.contains(value))
    }

    fn from_valid_widths(unsigned_widths: &[u32], signed_widths: &[u32]) -> Self {
        Self {
            unsigned: unsigned_widths
                .iter()
                .map(|w| Tier::new(IntType::unsigned(*w)))
                .collect(),
            signed: signed_widths
                .iter()
                .map(|w| Tier::new(IntType::signed(*w)))
                .collect(),
        }
    }
}

fn validate_widths(kind: &'static str, widths: &[u32]) -> Result<(), TierTableError> {
    if widths.is_empty() {
        return Err(TierTableError::Empty { kind });
    }
    if let Some(width) = widths
        .iter()
        .copied()
        .find(|w| *w == 0 || *w > MAX_TIER_WIDTH)
    {
        return Err(TierTableError::InvalidWidth { width });
    }
    for (prev, next) in widths.iter().zip(widths.iter().skip(1)) {
        if prev >= next {
            return Err(TierTableError::NotAscending {
                kind,
                prev: *prev,
                next: *next,
            });
        }
    }
    Ok(())
}
