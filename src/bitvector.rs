//! BitVector - dynamically sized bit storage built on the `bitvec` crate.
//!
//! # Design
//!
//! - Uses `BitVec<u64, Lsb0>` for storage (64-bit fields, LSB-first ordering)
//! - Bit indexing: field_idx = bit_idx / 64, bit_offset = bit_idx % 64
//! - Single-bit access, searching, resizing and splicing go through `bitvec`;
//!   counting, comparison, hashing, logic and shifts work on the raw fields
//! - Bits of the last field beyond `len()` ("padding") are always zero, so the
//!   raw-field paths never see stale bits
//! - Byte and 32-bit windows are addressed from the low end regardless of
//!   the field width
//!
//! # Examples
//!
//! ```
//! use bitweave::BitVector;
//!
//! let mut bv = BitVector::new(100);
//! bv.set(5, true).unwrap();
//! bv.set(70, true).unwrap();
//! assert_eq!(bv.count_ones(), 2);
//! assert_eq!(bv.get_ones(), vec![5, 70]);
//! ```

use crate::error::{BitVectorError, Result};
use crate::random::RandomSource;
use crate::serialize::BitVectorRepr;
use crate::utils::{bitmask, field_index, field_offset, Field, FIELD_BITS, FIELD_MAX};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

/// Largest number of bits a vector may hold.
pub const MAX_BITS: usize = BitSlice::<Field, Lsb0>::MAX_BITS;

/// Probability used by the customary "coin flip" random vector.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Width of the windows addressed by `get_uint` / `set_uint`.
const UINT_BITS: usize = 32;

/// Dynamically sized, word-packed bit vector.
///
/// All bit indices are 0-based. Equality compares size and bits; ordering
/// treats the vector as an unsigned integer with bit 0 least significant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "BitVectorRepr", into = "BitVectorRepr")]
pub struct BitVector {
    /// Underlying bitvec storage with u64 fields, LSB0 ordering
    pub(crate) bits: BitVec<Field, Lsb0>,
}

impl BitVector {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a new BitVector with `n` bits, all initialized to 0.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`MAX_BITS`]; [`try_new`](Self::try_new) reports it instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitweave::BitVector;
    ///
    /// let bv = BitVector::new(1024);
    /// assert_eq!(bv.len(), 1024);
    /// assert_eq!(bv.count_ones(), 0);
    /// ```
    #[inline]
    pub fn new(n: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, n),
        }
    }

    /// Create a new BitVector with `n` zero bits, rejecting sizes above
    /// [`MAX_BITS`].
    pub fn try_new(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self::new(n))
    }

    /// Create a BitVector with every one of its `n` bits set to `fill`.
    pub fn with_fill(n: usize, fill: bool) -> Self {
        Self::from_storage(BitVec::repeat(fill, n))
    }

    /// Wrap storage built elsewhere, zeroing whatever lies past its length.
    pub(crate) fn from_storage(mut bits: BitVec<Field, Lsb0>) -> Self {
        bits.force_align();
        let mut bv = Self { bits };
        bv.mask_last_field();
        bv
    }

    /// Create a BitVector whose bits are independently 1 with probability `p`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitweave::{BitVector, DEFAULT_PROBABILITY};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let bv = BitVector::random(1000, &mut rng, DEFAULT_PROBABILITY).unwrap();
    /// assert!(bv.count_ones() > 400 && bv.count_ones() < 600);
    /// ```
    pub fn random<S: RandomSource + ?Sized>(n: usize, rng: &mut S, p: f64) -> Result<Self> {
        let mut bv = Self::try_new(n)?;
        bv.randomize(rng, p)?;
        Ok(bv)
    }

    /// Create a BitVector with exactly `k` ones at random distinct positions.
    pub fn random_count<S: RandomSource + ?Sized>(n: usize, rng: &mut S, k: usize) -> Result<Self> {
        let mut bv = Self::try_new(n)?;
        bv.choose_random(rng, k)?;
        Ok(bv)
    }

    /// Create a BitVector holding the first `n` bits of `source`.
    pub fn from_prefix(source: &BitVector, n: usize) -> Result<Self> {
        match source.bits.get(..n) {
            Some(prefix) => Ok(Self::from_storage(prefix.to_bitvec())),
            None => Err(BitVectorError::InvalidSize {
                requested: n,
                limit: source.len(),
            }),
        }
    }

    /// Create a BitVector from a list of 0/1 values, index 0 first.
    ///
    /// Any non-zero value is treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitweave::BitVector;
    ///
    /// let bv = BitVector::from_bits(&[1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1]);
    /// assert_eq!(bv.len(), 13);
    /// assert_eq!(bv.count_ones(), 7);
    /// ```
    pub fn from_bits(vals: &[u8]) -> Self {
        Self::from_storage(vals.iter().map(|&val| val > 0).collect())
    }

    /// Convert into a `bitvec` vector with the same length and bit order.
    pub fn to_bitvec(&self) -> BitVec<Field, Lsb0> {
        self.bits.clone()
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Get total number of bits.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the vector holds no bits.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get number of storage fields.
    #[inline(always)]
    pub fn num_fields(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Get number of bytes needed for the logical bits (rounded up).
    #[inline(always)]
    pub fn num_bytes(&self) -> usize {
        self.len().div_ceil(8)
    }

    /// Number of distinct states the vector can represent (`2^len`).
    pub fn num_states(&self) -> f64 {
        (self.len() as f64).exp2()
    }

    /// Resize the BitVector to contain `n` bits.
    ///
    /// Existing bits below `n` are kept, new bits are 0.
    pub fn resize(&mut self, n: usize) -> Result<()> {
        check_size(n)?;
        self.bits.resize(n, false);
        self.mask_last_field();
        Ok(())
    }

    /// Read-only view of the packed storage fields.
    #[inline(always)]
    pub fn fields(&self) -> &[Field] {
        self.bits.as_raw_slice()
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Get bit at position `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Result<bool> {
        self.check_index(i)?;
        Ok(self.bits[i])
    }

    /// True if `i` is in range and the bit at `i` is set.
    ///
    /// Never fails, whatever the index.
    #[inline]
    pub fn has(&self, i: usize) -> bool {
        self.bits.get(i).map_or(false, |bit| *bit)
    }

    /// Set bit at position `i` to `value`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) -> Result<()> {
        self.check_index(i)?;
        self.bits.set(i, value);
        Ok(())
    }

    /// Toggle bit at position `i` (0 -> 1, 1 -> 0).
    #[inline]
    pub fn toggle(&mut self, i: usize) -> Result<()> {
        self.check_index(i)?;
        let current = self.bits[i];
        self.bits.set(i, !current);
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn get_unchecked(&self, i: usize) -> bool {
        debug_assert!(i < self.len(), "bit index {} out of bounds (length: {})", i, self.len());
        self.bits[i]
    }

    #[inline(always)]
    pub(crate) fn set_unchecked(&mut self, i: usize, value: bool) {
        debug_assert!(i < self.len(), "bit index {} out of bounds (length: {})", i, self.len());
        self.bits.set(i, value);
    }

    // =========================================================================
    // Byte and Word Access
    // =========================================================================

    /// Get the byte covering bits `[8 * b, 8 * b + 8)`.
    pub fn get_byte(&self, b: usize) -> Result<u8> {
        check_unit(b, self.num_bytes())?;
        Ok(self.window(b * 8, 8).load_le::<u8>())
    }

    /// Set the byte covering bits `[8 * b, 8 * b + 8)`.
    ///
    /// Bits of `value` that fall beyond `len()` are discarded.
    pub fn set_byte(&mut self, b: usize, value: u8) -> Result<()> {
        check_unit(b, self.num_bytes())?;
        self.window_mut(b * 8, 8).store_le(value);
        Ok(())
    }

    /// Get the aligned 32-bit window `w`, covering bits `[32 * w, 32 * w + 32)`.
    pub fn get_uint(&self, w: usize) -> Result<u32> {
        check_unit(w, self.len().div_ceil(UINT_BITS))?;
        Ok(self.window(w * UINT_BITS, UINT_BITS).load_le::<u32>())
    }

    /// Set the aligned 32-bit window `w`.
    ///
    /// Bits of `value` that fall beyond `len()` are discarded.
    pub fn set_uint(&mut self, w: usize, value: u32) -> Result<()> {
        check_unit(w, self.len().div_ceil(UINT_BITS))?;
        self.window_mut(w * UINT_BITS, UINT_BITS).store_le(value);
        Ok(())
    }

    /// Get the aligned 64-bit window `w` (one storage field).
    pub fn get_uint64(&self, w: usize) -> Result<u64> {
        check_unit(w, self.num_fields())?;
        Ok(self.fields()[w])
    }

    /// Set the aligned 64-bit window `w` (one storage field).
    pub fn set_uint64(&mut self, w: usize, value: u64) -> Result<()> {
        check_unit(w, self.num_fields())?;
        self.bits.as_raw_mut_slice()[w] = value;
        self.mask_last_field();
        Ok(())
    }

    /// Get 32 bits starting at any bit offset; bits past the end read as 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitweave::BitVector;
    ///
    /// let mut bv = BitVector::new(80);
    /// bv.set(65, true).unwrap();
    /// bv.set(71, true).unwrap();
    /// assert_eq!(bv.get_uint_at_bit(64).unwrap(), 130);
    /// assert_eq!(bv.get_uint_at_bit(60).unwrap(), 130 << 4);
    /// ```
    pub fn get_uint_at_bit(&self, bit: usize) -> Result<u32> {
        self.check_index(bit)?;
        Ok(self.window(bit, UINT_BITS).load_le::<u32>())
    }

    /// Write 32 bits starting at any bit offset; bits past the end are dropped.
    pub fn set_uint_at_bit(&mut self, bit: usize, value: u32) -> Result<()> {
        self.check_index(bit)?;
        self.window_mut(bit, UINT_BITS).store_le(value);
        Ok(())
    }

    /// Up to `width` bits starting at `start`, cut short at the end of the vector.
    ///
    /// Callers guarantee `start < len()`, so the window is never empty.
    fn window(&self, start: usize, width: usize) -> &BitSlice<Field, Lsb0> {
        let end = (start + width).min(self.len());
        &self.bits[start..end]
    }

    fn window_mut(&mut self, start: usize, width: usize) -> &mut BitSlice<Field, Lsb0> {
        let end = (start + width).min(self.len());
        &mut self.bits[start..end]
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Count set bits by repeatedly clearing the lowest one in each field.
    ///
    /// Faster than [`count_ones`](Self::count_ones) only when very few bits
    /// are set; the result is always identical.
    pub fn count_ones_sparse(&self) -> usize {
        let mut count = 0;
        for &field in self.fields() {
            let mut word = field;
            while word != 0 {
                word &= word - 1;
                count += 1;
            }
        }
        count
    }

    /// Count number of cleared bits.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.bits.count_zeros()
    }

    /// True if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.bits.any()
    }

    /// True if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        self.bits.not_any()
    }

    /// True if every bit is set (vacuously true when empty).
    #[inline]
    pub fn all(&self) -> bool {
        self.bits.all()
    }

    // =========================================================================
    // Search Operations
    // =========================================================================

    /// Find the first set bit at or after `start`.
    ///
    /// Returns `None` if no set bit exists in `[start, len)`.
    pub fn find_bit(&self, start: usize) -> Option<usize> {
        let offset = self.bits.get(start..)?.first_one()?;
        Some(start + offset)
    }

    /// Find the first set bit at or after `start`, clear it and return its index.
    ///
    /// The vector is unchanged when `None` is returned.
    pub fn pop_bit(&mut self, start: usize) -> Option<usize> {
        let found = self.find_bit(start)?;
        self.bits.set(found, false);
        Some(found)
    }

    /// Get indices of all set bits, in ascending order.
    pub fn get_ones(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Iterate over the indices of set bits, in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Iterate over all bits in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Set range of bits `[begin, end)` to 1.
    pub fn set_range(&mut self, begin: usize, end: usize) -> Result<()> {
        self.range_mut(begin, end)?.fill(true);
        Ok(())
    }

    /// Clear range of bits `[begin, end)` to 0.
    pub fn clear_range(&mut self, begin: usize, end: usize) -> Result<()> {
        self.range_mut(begin, end)?.fill(false);
        Ok(())
    }

    /// Toggle range of bits `[begin, end)`.
    ///
    /// Works a field at a time with edge masks rather than bit by bit.
    pub fn toggle_range(&mut self, begin: usize, end: usize) -> Result<()> {
        self.range_mut(begin, end)?;
        if begin == end {
            return Ok(());
        }

        let fields = self.bits.as_raw_mut_slice();
        let first = field_index(begin);
        let last = field_index(end - 1);
        let begin_mask = FIELD_MAX << field_offset(begin);
        let end_mask = bitmask(end - last * FIELD_BITS);

        if first == last {
            fields[first] ^= begin_mask & end_mask;
            return Ok(());
        }

        fields[first] ^= begin_mask;
        for field in &mut fields[first + 1..last] {
            *field = !*field;
        }
        fields[last] ^= end_mask;
        Ok(())
    }

    /// Checked view of `[begin, end)`.
    fn range_mut(&mut self, begin: usize, end: usize) -> Result<&mut BitSlice<Field, Lsb0>> {
        let size = self.len();
        self.bits
            .get_mut(begin..end)
            .ok_or(BitVectorError::InvalidRange { begin, end, size })
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Set all bits to 1.
    pub fn set_all(&mut self) {
        self.bits.fill(true);
    }

    /// Clear all bits to 0.
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// Toggle all bits (binary NOT operation).
    ///
    /// Uses field-level NOT, then restores the padding.
    pub fn toggle_all(&mut self) {
        for field in self.bits.as_raw_mut_slice() {
            *field = !*field;
        }
        self.mask_last_field();
    }

    /// Zero the padding bits of the last field.
    ///
    /// Every path that writes raw fields or changes the length ends here.
    #[inline]
    pub(crate) fn mask_last_field(&mut self) {
        let live = field_offset(self.len());
        if live != 0 {
            if let Some(last) = self.bits.as_raw_mut_slice().last_mut() {
                *last &= bitmask(live);
            }
        }
    }

    // =========================================================================
    // Insertion and Removal
    // =========================================================================

    /// Insert `count` copies of `value` at `pos`, shifting later bits up.
    pub fn insert(&mut self, pos: usize, value: bool, count: usize) -> Result<()> {
        let old_len = self.len();
        if pos > old_len {
            return Err(BitVectorError::IndexOutOfRange {
                index: pos,
                size: old_len,
            });
        }
        let new_len = old_len.checked_add(count).ok_or(BitVectorError::InvalidSize {
            requested: usize::MAX,
            limit: MAX_BITS,
        })?;
        check_size(new_len)?;
        if count == 0 {
            return Ok(());
        }

        self.bits.resize(new_len, false);
        self.bits.copy_within(pos..old_len, pos + count);
        self.bits[pos..pos + count].fill(value);
        self.mask_last_field();
        Ok(())
    }

    /// Remove `count` bits starting at `pos`, shifting later bits down.
    pub fn delete(&mut self, pos: usize, count: usize) -> Result<()> {
        let len = self.len();
        let end = pos.checked_add(count).filter(|&end| end <= len);
        let Some(end) = end else {
            return Err(BitVectorError::InvalidRange {
                begin: pos,
                end: pos.saturating_add(count),
                size: len,
            });
        };
        if count == 0 {
            return Ok(());
        }

        self.bits.copy_within(end..len, pos);
        self.bits.truncate(len - count);
        self.mask_last_field();
        Ok(())
    }

    /// Append one bit at the high end.
    pub fn push_back(&mut self, value: bool) {
        self.bits.push(value);
        self.mask_last_field();
    }

    /// Remove and return the highest bit.
    pub fn pop_back(&mut self) -> Result<bool> {
        let value = self.bits.pop().ok_or(BitVectorError::EmptyContainer)?;
        self.mask_last_field();
        Ok(value)
    }

    // =========================================================================
    // Random Operations
    // =========================================================================

    /// Set each bit independently to 1 with probability `p`.
    pub fn randomize<S: RandomSource + ?Sized>(&mut self, rng: &mut S, p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(BitVectorError::InvalidProbability(p));
        }
        for i in 0..self.len() {
            let value = rng.next_bool(p);
            self.bits.set(i, value);
        }
        Ok(())
    }

    /// Clear the vector, then set exactly `k` bits at random distinct positions.
    ///
    /// The indices drawn from `rng` are checked before anything is written.
    /// Unless they hold exactly `k` distinct positions below `len()`, the call
    /// fails with [`BitVectorError::InvalidSample`] and the vector is unchanged.
    pub fn choose_random<S: RandomSource + ?Sized>(&mut self, rng: &mut S, k: usize) -> Result<()> {
        let upper = self.len();
        if k > upper {
            return Err(BitVectorError::InvalidSize {
                requested: k,
                limit: upper,
            });
        }

        let mut picked = rng.next_unique_indices(k, upper);
        picked.sort_unstable();
        picked.dedup();
        picked.retain(|&idx| idx < upper);
        if picked.len() != k {
            return Err(BitVectorError::InvalidSample {
                expected: k,
                distinct: picked.len(),
                upper,
            });
        }

        self.clear_all();
        for idx in picked {
            self.bits.set(idx, true);
        }
        Ok(())
    }

    // =========================================================================
    // Hashing
    // =========================================================================

    /// Deterministic hash of the size and logical bits.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    #[inline]
    fn check_index(&self, i: usize) -> Result<()> {
        check_unit(i, self.len())
    }
}

#[inline]
fn check_unit(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(BitVectorError::IndexOutOfRange { index, size })
    }
}

#[inline]
pub(crate) fn check_size(n: usize) -> Result<()> {
    if n > MAX_BITS {
        return Err(BitVectorError::InvalidSize {
            requested: n,
            limit: MAX_BITS,
        });
    }
    Ok(())
}

// =============================================================================
// Indexing
// =============================================================================

impl Index<usize> for BitVector {
    type Output = bool;

    /// Read-only bit access.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    fn index(&self, i: usize) -> &bool {
        &self.bits[i]
    }
}

// =============================================================================
// Comparison Operators
// =============================================================================

impl PartialEq for BitVector {
    /// Compare lengths, then whole fields; padding is always zero.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.fields() == other.fields()
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.fields().hash(state);
    }
}

impl Ord for BitVector {
    /// Compare as unsigned integers (bit 0 least significant), zero-extending
    /// the shorter vector; equal values are ordered by size.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.fields(), other.fields());
        for i in (0..a.len().max(b.len())).rev() {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            match x.cmp(&y) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl PartialOrd for BitVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl FromStr for BitVector {
    type Err = BitVectorError;

    /// Parse a string of '0'/'1'; the leftmost character is bit 0.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => {
                    return Err(BitVectorError::InvalidCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        Ok(Self::from_storage(bits))
    }
}

impl From<&[bool]> for BitVector {
    fn from(bits: &[bool]) -> Self {
        Self::from_storage(bits.iter().copied().collect())
    }
}

impl<const N: usize> From<[bool; N]> for BitVector {
    fn from(bits: [bool; N]) -> Self {
        Self::from(&bits[..])
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self::from(bits.as_slice())
    }
}

impl<T, O> From<&BitSlice<T, O>> for BitVector
where
    T: BitStore,
    O: BitOrder,
{
    /// Copy a `bitvec` slice or fixed-width array; index `i` maps to bit `i`.
    fn from(bits: &BitSlice<T, O>) -> Self {
        Self::from_storage(bits.iter().by_vals().collect())
    }
}
