//! Boolean algebra and shifts over whole bit vectors.
//!
//! Named methods (`and`, `nand_assign`, ...) report a size mismatch as
//! [`BitVectorError::SizeMismatch`]. The `std::ops` operators mirror the
//! named methods and panic on mismatched sizes, as arithmetic operators do.
//!
//! Shifts work inside the fixed length: `<<` moves bits toward higher
//! indices, `>>` toward lower ones, and bits pushed past either end are lost.

use crate::bitvector::BitVector;
use crate::error::{BitVectorError, Result};
use crate::utils::{Field, FIELD_BITS};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

impl BitVector {
    /// Combine `other` into `self` field by field, then restore padding.
    fn zip_assign<F>(&mut self, other: &BitVector, op: F) -> Result<&mut Self>
    where
        F: Fn(Field, Field) -> Field,
    {
        if self.len() != other.len() {
            return Err(BitVectorError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        for (a, &b) in self.bits.as_raw_mut_slice().iter_mut().zip(other.fields()) {
            *a = op(*a, b);
        }
        self.mask_last_field();
        Ok(self)
    }

    // =========================================================================
    // In-place Forms
    // =========================================================================

    /// `self = self & other`
    pub fn and_assign(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.zip_assign(other, |a, b| a & b)
    }

    /// `self = self | other`
    pub fn or_assign(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.zip_assign(other, |a, b| a | b)
    }

    /// `self = self ^ other`
    pub fn xor_assign(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.zip_assign(other, |a, b| a ^ b)
    }

    /// `self = !(self & other)`
    pub fn nand_assign(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.zip_assign(other, |a, b| !(a & b))
    }

    /// `self = !(self | other)`
    pub fn nor_assign(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.zip_assign(other, |a, b| !(a | b))
    }

    /// `self = !(self ^ other)`, i.e. 1 wherever the operands agree.
    pub fn equ_assign(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.zip_assign(other, |a, b| !(a ^ b))
    }

    /// Complement every bit in place.
    pub fn not_assign(&mut self) -> &mut Self {
        self.toggle_all();
        self
    }

    // =========================================================================
    // Pure Forms
    // =========================================================================

    /// Bitwise AND into a new vector.
    pub fn and(&self, other: &BitVector) -> Result<BitVector> {
        let mut result = self.clone();
        result.and_assign(other)?;
        Ok(result)
    }

    /// Bitwise OR into a new vector.
    pub fn or(&self, other: &BitVector) -> Result<BitVector> {
        let mut result = self.clone();
        result.or_assign(other)?;
        Ok(result)
    }

    /// Bitwise XOR into a new vector.
    pub fn xor(&self, other: &BitVector) -> Result<BitVector> {
        let mut result = self.clone();
        result.xor_assign(other)?;
        Ok(result)
    }

    /// Bitwise NAND into a new vector.
    pub fn nand(&self, other: &BitVector) -> Result<BitVector> {
        let mut result = self.clone();
        result.nand_assign(other)?;
        Ok(result)
    }

    /// Bitwise NOR into a new vector.
    pub fn nor(&self, other: &BitVector) -> Result<BitVector> {
        let mut result = self.clone();
        result.nor_assign(other)?;
        Ok(result)
    }

    /// Bitwise equivalence (XNOR) into a new vector.
    pub fn equ(&self, other: &BitVector) -> Result<BitVector> {
        let mut result = self.clone();
        result.equ_assign(other)?;
        Ok(result)
    }

    // =========================================================================
    // Shifts
    // =========================================================================

    /// Move every bit `n` positions toward higher indices.
    pub fn shift_left_assign(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len() {
            self.clear_all();
            return;
        }

        let field_shift = n / FIELD_BITS;
        let bit_shift = n % FIELD_BITS;
        let fields = self.bits.as_raw_mut_slice();
        let len = fields.len();

        if field_shift > 0 {
            fields.copy_within(0..len - field_shift, field_shift);
            fields[..field_shift].fill(0);
        }

        if bit_shift > 0 {
            for i in (field_shift + 1..len).rev() {
                fields[i] =
                    (fields[i] << bit_shift) | (fields[i - 1] >> (FIELD_BITS - bit_shift));
            }
            fields[field_shift] <<= bit_shift;
        }

        self.mask_last_field();
    }

    /// Move every bit `n` positions toward lower indices.
    pub fn shift_right_assign(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len() {
            self.clear_all();
            return;
        }

        let field_shift = n / FIELD_BITS;
        let bit_shift = n % FIELD_BITS;
        let fields = self.bits.as_raw_mut_slice();
        let len = fields.len();
        let kept = len - field_shift;

        if field_shift > 0 {
            fields.copy_within(field_shift..len, 0);
            fields[kept..].fill(0);
        }

        if bit_shift > 0 {
            for i in 0..kept - 1 {
                fields[i] =
                    (fields[i] >> bit_shift) | (fields[i + 1] << (FIELD_BITS - bit_shift));
            }
            fields[kept - 1] >>= bit_shift;
        }
    }

    /// Shifted copy, bits moved toward higher indices.
    pub fn shift_left(&self, n: usize) -> BitVector {
        let mut result = self.clone();
        result.shift_left_assign(n);
        result
    }

    /// Shifted copy, bits moved toward lower indices.
    pub fn shift_right(&self, n: usize) -> BitVector {
        let mut result = self.clone();
        result.shift_right_assign(n);
        result
    }
}

// =============================================================================
// Bitwise Operators
// =============================================================================

/// Unwrap the result of a named operation for operator sugar.
fn expect_same_size<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("BitVectors must have same size: {}", err),
    }
}

impl BitAnd for &BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: Self) -> BitVector {
        expect_same_size(self.and(rhs))
    }
}

impl BitAnd for BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: Self) -> BitVector {
        &self & &rhs
    }
}

impl BitOr for &BitVector {
    type Output = BitVector;

    fn bitor(self, rhs: Self) -> BitVector {
        expect_same_size(self.or(rhs))
    }
}

impl BitOr for BitVector {
    type Output = BitVector;

    fn bitor(self, rhs: Self) -> BitVector {
        &self | &rhs
    }
}

impl BitXor for &BitVector {
    type Output = BitVector;

    fn bitxor(self, rhs: Self) -> BitVector {
        expect_same_size(self.xor(rhs))
    }
}

impl BitXor for BitVector {
    type Output = BitVector;

    fn bitxor(self, rhs: Self) -> BitVector {
        &self ^ &rhs
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        let mut result = self.clone();
        result.toggle_all();
        result
    }
}

impl Not for BitVector {
    type Output = BitVector;

    fn not(mut self) -> BitVector {
        self.toggle_all();
        self
    }
}

impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, rhs: &BitVector) {
        expect_same_size(self.and_assign(rhs));
    }
}

impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, rhs: &BitVector) {
        expect_same_size(self.or_assign(rhs));
    }
}

impl BitXorAssign<&BitVector> for BitVector {
    fn bitxor_assign(&mut self, rhs: &BitVector) {
        expect_same_size(self.xor_assign(rhs));
    }
}

// =============================================================================
// Shift Operators
// =============================================================================

impl Shl<usize> for &BitVector {
    type Output = BitVector;

    fn shl(self, n: usize) -> BitVector {
        self.shift_left(n)
    }
}

impl Shl<usize> for BitVector {
    type Output = BitVector;

    fn shl(mut self, n: usize) -> BitVector {
        self.shift_left_assign(n);
        self
    }
}

impl Shr<usize> for &BitVector {
    type Output = BitVector;

    fn shr(self, n: usize) -> BitVector {
        self.shift_right(n)
    }
}

impl Shr<usize> for BitVector {
    type Output = BitVector;

    fn shr(mut self, n: usize) -> BitVector {
        self.shift_right_assign(n);
        self
    }
}

impl ShlAssign<usize> for BitVector {
    fn shl_assign(&mut self, n: usize) {
        self.shift_left_assign(n);
    }
}

impl ShrAssign<usize> for BitVector {
    fn shr_assign(&mut self, n: usize) {
        self.shift_right_assign(n);
    }
}
