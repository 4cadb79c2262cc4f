//! # BitSet - 64-Cell Occupancy Masks
//!
//! ## Overview
//!
//! Every set of cells the engine reasons about (one player's pieces, the empty
//! cells, one winning line, one plane) is a single `u64` with bit *i* standing for
//! cell *i*. Membership, union, intersection and counting all reduce to one or
//! two native instructions, which matters because the evaluation touches all 76
//! lines for every leaf of the search tree.
//!
//! ## Conventions
//!
//! - Bit positions are `u8` in `0..64`. Passing anything larger is a programming
//!   error and panics immediately.
//! - [`BitSet::msb`] returns `None` for the empty set. Geometry code relies on
//!   this to tell "no intersection" apart from cell 0.
//! - [`BitSet::ones`] yields positions in **ascending** order: each step clears
//!   the lowest set bit and reports it. Move generation inherits this order, so
//!   the search breaks ties in favour of the lowest cell index.
//!
//! ## Text Forms
//!
//! `Display` and `FromStr` use a position list such as `{0,5,21,63}`. For table
//! dumps, [`BitSet::to_radix_string`] renders the raw 64-bit value in any base
//! from 2 to 36 with digit grouping.

use crate::error::EngineError;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitSet(pub u64);

#[inline]
fn bit(position: u8) -> u64 {
    assert!(position < 64, "bit position {position} out of range (0-63)");
    1u64 << position
}

impl BitSet {
    pub const EMPTY: BitSet = BitSet(0);
    pub const FULL: BitSet = BitSet(u64::MAX);

    pub const fn new() -> Self {
        BitSet(0)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Set containing exactly one position
    #[inline]
    pub fn singleton(position: u8) -> Self {
        BitSet(bit(position))
    }

    #[inline]
    pub fn contains(self, position: u8) -> bool {
        (self.0 & bit(position)) != 0
    }

    /// Copy of this set with `position` added
    #[inline]
    #[must_use]
    pub fn with(self, position: u8) -> Self {
        BitSet(self.0 | bit(position))
    }

    /// Copy of this set with `position` removed
    #[inline]
    #[must_use]
    pub fn without(self, position: u8) -> Self {
        BitSet(self.0 & !bit(position))
    }

    pub fn insert(&mut self, position: u8) {
        self.0 |= bit(position);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn count_zeros(self) -> u32 {
        self.0.count_zeros()
    }

    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Position of the highest set bit, `None` when the set is empty
    #[inline]
    pub const fn msb(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros() as u8)
        }
    }

    #[inline]
    pub const fn intersects(self, other: BitSet) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_subset_of(self, other: BitSet) -> bool {
        (self.0 & other.0) == self.0
    }

    /// Positions of the set bits, lowest first
    #[inline]
    pub const fn ones(self) -> Ones {
        Ones { bits: self.0 }
    }

    /// Positions of the clear bits, lowest first
    #[inline]
    pub const fn zeros(self) -> Ones {
        Ones { bits: !self.0 }
    }

    /// Render the full 64-bit value in `base` (2-36), zero-padded to the width of
    /// `u64::MAX` in that base.
    ///
    /// When `group` is set, digits are grouped from the right: bytes for base 2,
    /// nibbles for base 16, threes otherwise, separated by `_` (`,` for base 10).
    pub fn to_radix_string(self, base: u32, group: bool) -> String {
        assert!((2..=36).contains(&base), "radix {base} out of range");

        let width = radix_width(base);
        let mut digits = vec![b'0'; width];
        let mut value = self.0;
        for slot in digits.iter_mut().rev() {
            *slot = DIGITS[(value % base as u64) as usize];
            value /= base as u64;
        }
        let digits: String = digits.into_iter().map(char::from).collect();

        if !group {
            return digits;
        }

        let size = match base {
            2 => 8,
            16 => 4,
            _ => 3,
        };
        let separator = if base == 10 { ',' } else { '_' };
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / size);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % size == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

/// Digits needed for `u64::MAX` in `base`
fn radix_width(base: u32) -> usize {
    let mut width = 0;
    let mut value = u64::MAX;
    while value > 0 {
        value /= base as u64;
        width += 1;
    }
    width
}

/// Iterator over set-bit positions, lowest first
///
/// Each call clears the lowest remaining bit and yields its position. The
/// iterator is a plain copy of the mask, so a `BitSet` can be iterated any
/// number of times with the same result.
#[derive(Copy, Clone, Debug)]
pub struct Ones {
    bits: u64,
}

impl Iterator for Ones {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let position = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(position)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Ones {}

impl std::iter::FusedIterator for Ones {}

impl IntoIterator for BitSet {
    type Item = u8;
    type IntoIter = Ones;

    fn into_iter(self) -> Ones {
        self.ones()
    }
}

impl FromIterator<u8> for BitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = BitSet::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl BitAnd for BitSet {
    type Output = BitSet;

    #[inline]
    fn bitand(self, rhs: BitSet) -> BitSet {
        BitSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for BitSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: BitSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for BitSet {
    type Output = BitSet;

    #[inline]
    fn bitor(self, rhs: BitSet) -> BitSet {
        BitSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: BitSet) {
        self.0 |= rhs.0;
    }
}

impl Not for BitSet {
    type Output = BitSet;

    #[inline]
    fn not(self) -> BitSet {
        BitSet(!self.0)
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, position) in self.ones().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{position}")?;
        }
        f.write_str("}")
    }
}

impl FromStr for BitSet {
    type Err = EngineError;

    /// Parse a position list such as `{1,2,3}`; braces, commas, spaces and tabs
    /// are all delimiters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPositionList {
            input: s.to_string(),
        };

        s.split(|c: char| matches!(c, '{' | '}' | ',' | ' ' | '\t'))
            .filter(|token| !token.is_empty())
            .try_fold(BitSet::new(), |set, token| {
                let position: u8 = token.parse().map_err(|_| invalid())?;
                if position >= 64 {
                    return Err(invalid());
                }
                Ok(set.with(position))
            })
    }
}
