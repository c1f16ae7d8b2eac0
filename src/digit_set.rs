//! Digits and the fixed-size bitset over them
//!
//! Candidate bookkeeping is the hot path of the solver, so the two types
//! live together: [`Digit`] is one of the nine symbols a cell can hold,
//! [`DigitSet`] is a 9-bit mask of the symbols a cell may still hold.
//! Elimination is a single AND-NOT and a cell is determined exactly when
//! one bit is left.

use std::fmt;
use std::num::NonZeroU8;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Set of candidate digits for one cell, stored as a 9-bit mask.
///
/// Bit `k` set means digit `k + 1` is still possible. An empty set is a
/// contradiction, a single-bit set is a determined cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

/// Returned by [`DigitSet::unique`] when the set has no element left.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Empty;

impl DigitSet {
    /// Set containing all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Construct a set from a raw 9-bit mask.
    ///
    /// # Panic
    /// Panics, if the mask contains bits above the 9th.
    pub fn from_bits(mask: u16) -> Self {
        assert!(mask <= Self::ALL.0);
        DigitSet(mask)
    }

    /// Return the raw mask backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the digits in this set that aren't present in `other`.
    pub fn without(self, other: Self) -> Self {
        DigitSet(self.0 & !other.0)
    }

    /// Deletes all digits from this set that are present in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Checks if `self` contains every digit of `other`.
    pub fn contains(self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self & other == other
    }

    /// Returns the number of digits in this set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains no digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks whether this set contains all nine digits.
    pub fn is_full(self) -> bool {
        self == Self::ALL
    }

    /// Returns the only digit in this set, iff exactly 1 digit remains.
    /// An empty set returns `Err(Empty)`, more than 1 digit `Ok(None)`.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.len() {
            1 => {
                let digit = self.into_iter().next();
                debug_assert!(digit.is_some());
                Ok(digit)
            }
            0 => Err(Empty),
            _ => Ok(None),
        }
    }
}

/// One of the nine symbols a cell can hold.
///
/// Carries its face value: `Digit::new(5).get() == 5`. Bit positions in a
/// [`DigitSet`] are offset by one, which [`Digit::as_index`] and
/// [`Digit::as_set`] take care of.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`, if the value is in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the value is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit` from its bit position in a [`DigitSet`].
    ///
    /// # Panic
    /// Panics, if the position is not in the range of `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new_checked(idx + 1).unwrap()
    }

    /// Returns an iterator over all digits, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the face value.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the 0-based bit position of this digit, i.e. its value minus one.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }

    /// Returns the `DigitSet` containing only this digit.
    pub fn as_set(self) -> DigitSet {
        DigitSet(1 << self.as_index())
    }
}

impl From<Digit> for DigitSet {
    fn from(digit: Digit) -> Self {
        digit.as_set()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DigitSet::NONE, |set, digit| set | digit.as_set())
    }
}

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl $trait for DigitSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    DigitSet($trait::$fn_name(self.0, other.0))
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl $trait for DigitSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl Not for DigitSet {
    type Output = Self;
    fn not(self) -> Self {
        Self::ALL.without(self)
    }
}

/// Iterator over the digits contained in a [`DigitSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iter(u16);

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.0 <= DigitSet::ALL.0, "{:o}", self.0);
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(Digit::from_index(bit_pos))
    }
}

impl fmt::Binary for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:09b}", self.0)
    }
}
