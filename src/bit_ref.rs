//! Mutable single-bit proxy.
//!
//! A [`BitRef`] stands in for `bv[i]` on the write side: it borrows the
//! vector mutably for its lifetime, reads and writes the packed field
//! directly, and supports compound assignment with a `bool` operand.
//!
//! ```
//! use bitweave::BitVector;
//!
//! let mut bv = BitVector::new(3);
//! let mut bit = bv.bit_mut(1).unwrap();
//! bit |= true;
//! bit ^= true;
//! bit += true;
//! assert!(bit.get());
//! assert_eq!(bv.get_ones(), vec![1]);
//! ```
//!
//! Arithmetic operators treat the bit as the integer 0 or 1 and clamp the
//! result back into `{0, 1}`: `+=` saturates (OR), `-=` saturates at zero
//! (AND-NOT), `*=` multiplies (AND), and `/=` divides (identity for `true`).

use crate::bitvector::BitVector;
use crate::error::Result;
use std::fmt;
use std::ops::{AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, SubAssign};

/// Read/write view of one bit of a [`BitVector`].
pub struct BitRef<'a> {
    vector: &'a mut BitVector,
    index: usize,
}

impl BitVector {
    /// Borrow bit `i` through a mutable proxy.
    pub fn bit_mut(&mut self, i: usize) -> Result<BitRef<'_>> {
        self.get(i)?;
        Ok(BitRef {
            vector: self,
            index: i,
        })
    }
}

impl BitRef<'_> {
    /// Current value of the bit.
    #[inline]
    pub fn get(&self) -> bool {
        self.vector.get_unchecked(self.index)
    }

    /// Overwrite the bit.
    #[inline]
    pub fn set(&mut self, value: bool) {
        self.vector.set_unchecked(self.index, value);
    }

    /// Flip the bit.
    #[inline]
    pub fn toggle(&mut self) {
        let value = self.get();
        self.set(!value);
    }

    /// Position of the bit in its vector.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl BitAndAssign<bool> for BitRef<'_> {
    fn bitand_assign(&mut self, rhs: bool) {
        let value = self.get() & rhs;
        self.set(value);
    }
}

impl BitOrAssign<bool> for BitRef<'_> {
    fn bitor_assign(&mut self, rhs: bool) {
        let value = self.get() | rhs;
        self.set(value);
    }
}

impl BitXorAssign<bool> for BitRef<'_> {
    fn bitxor_assign(&mut self, rhs: bool) {
        let value = self.get() ^ rhs;
        self.set(value);
    }
}

impl AddAssign<bool> for BitRef<'_> {
    fn add_assign(&mut self, rhs: bool) {
        let value = self.get() || rhs;
        self.set(value);
    }
}

impl SubAssign<bool> for BitRef<'_> {
    fn sub_assign(&mut self, rhs: bool) {
        let value = self.get() && !rhs;
        self.set(value);
    }
}

impl MulAssign<bool> for BitRef<'_> {
    fn mul_assign(&mut self, rhs: bool) {
        let value = self.get() && rhs;
        self.set(value);
    }
}

impl DivAssign<bool> for BitRef<'_> {
    /// # Panics
    ///
    /// Panics when dividing by `false`, as integer division by zero does.
    fn div_assign(&mut self, rhs: bool) {
        assert!(rhs, "attempt to divide a bit by zero");
    }
}

impl From<BitRef<'_>> for bool {
    fn from(bit: BitRef<'_>) -> bool {
        bit.get()
    }
}

impl PartialEq<bool> for BitRef<'_> {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl fmt::Debug for BitRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("index", &self.index)
            .field("value", &self.get())
            .finish()
    }
}
