//! Truth-table bitmasks.
//!
//! A boolean function over `n` terms is stored as a `2^n`-bit integer, one bit per
//! truth-table row. In row `j`, the term with index `i` takes the value of bit `i` of `j`:
//!
//! ```text
//! row   c b a     a  b  c
//!  0    0 0 0     0  0  0
//!  1    0 0 1     1  0  0
//!  2    0 1 0     0  1  0
//!  3    0 1 1     1  1  0
//!  4    1 0 0     0  0  1
//!  ...
//! mask            ...10101010  ...11001100  ...11110000
//! ```
//!
//! Both the encoding and everything built on it cost `O(n * 2^n)`, so the number of
//! distinct terms is the practical limit of the whole pipeline.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use num_bigint::BigUint;

use crate::terms::Terms;

/// A truth-table column over a fixed number of rows.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Mask {
    rows: usize,
    bits: BigUint,
}

// Constructors
impl Mask {
    /// The constant-false column.
    pub fn zero(rows: usize) -> Self {
        Self {
            rows,
            bits: BigUint::ZERO,
        }
    }

    /// The constant-true column: `2^rows - 1`.
    pub fn ones(rows: usize) -> Self {
        Self {
            rows,
            bits: (BigUint::from(1u8) << rows) - BigUint::from(1u8),
        }
    }

    /// Wraps raw bits, dropping anything above `rows`.
    pub fn from_bits(rows: usize, bits: BigUint) -> Self {
        let bits = bits & Self::ones(rows).bits;
        Self { rows, bits }
    }

    /// The column of the term with index `index` among `num_terms` terms.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_terms` or if `2^num_terms` rows cannot be addressed.
    pub fn for_term(index: usize, num_terms: usize) -> Self {
        assert!(index < num_terms, "Term index {} out of range", index);
        let rows = row_count(num_terms);
        let mut bits = BigUint::ZERO;
        for row in 0..rows {
            if (row >> index) & 1 == 1 {
                bits.set_bit(row as u64, true);
            }
        }
        Self { rows, bits }
    }
}

// Getters
impl Mask {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn bits(&self) -> &BigUint {
        &self.bits
    }

    /// Value of the column in the given row.
    pub fn bit(&self, row: usize) -> bool {
        self.bits.bit(row as u64)
    }

    /// Number of rows where the column is true.
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }
}

// Checks
impl Mask {
    pub fn is_zero(&self) -> bool {
        self.bits == BigUint::ZERO
    }

    pub fn is_ones(&self) -> bool {
        *self == Self::ones(self.rows)
    }

    /// Returns `true` iff every row true in `self` is also true in `other`.
    pub fn is_subset_of(&self, other: &Mask) -> bool {
        debug_assert_eq!(self.rows, other.rows);
        (&self.bits & &other.bits) == self.bits
    }
}

impl BitAnd for &Mask {
    type Output = Mask;

    fn bitand(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.rows, rhs.rows);
        Mask {
            rows: self.rows,
            bits: &self.bits & &rhs.bits,
        }
    }
}

impl BitOr for &Mask {
    type Output = Mask;

    fn bitor(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.rows, rhs.rows);
        Mask {
            rows: self.rows,
            bits: &self.bits | &rhs.bits,
        }
    }
}

impl Not for &Mask {
    type Output = Mask;

    /// Complement restricted to the mask width.
    fn not(self) -> Self::Output {
        Mask {
            rows: self.rows,
            bits: &self.bits ^ Mask::ones(self.rows).bits,
        }
    }
}

impl Not for Mask {
    type Output = Mask;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Most significant row first, like a truth-table column read bottom-up.
        write!(f, "Mask(")?;
        for row in (0..self.rows).rev() {
            write!(f, "{}", u8::from(self.bit(row)))?;
        }
        write!(f, ")")
    }
}

/// Number of truth-table rows for `num_terms` terms.
///
/// # Panics
///
/// Panics if `2^num_terms` does not fit in `usize`.
pub fn row_count(num_terms: usize) -> usize {
    assert!(
        num_terms < usize::BITS as usize,
        "Too many terms for a truth table: {}",
        num_terms
    );
    1 << num_terms
}

/// Encodes every term of `terms` as its truth-table column.
pub fn encode_terms(terms: &Terms) -> Vec<Mask> {
    (0..terms.len())
        .map(|i| Mask::for_term(i, terms.len()))
        .collect()
}
