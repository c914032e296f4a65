//! Field arithmetic shared by the bit vector modules.
//!
//! Bits are packed low-to-high into 64-bit fields: bit `i` lives in field
//! `i / 64` at offset `i % 64`.

/// Word type for bit storage (64-bit unsigned integer)
pub type Field = u64;

/// Number of bits per field
pub const FIELD_BITS: usize = 64;

/// Field with every bit set
pub const FIELD_MAX: Field = Field::MAX;

/// Get field index from bit position
#[inline(always)]
pub const fn field_index(bit_pos: usize) -> usize {
    bit_pos >> 6 // bit_pos / 64
}

/// Get bit offset within its field
#[inline(always)]
pub const fn field_offset(bit_pos: usize) -> usize {
    bit_pos & 63 // bit_pos % 64
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
pub const fn bitmask(n: usize) -> Field {
    if n == 0 {
        0
    } else if n >= FIELD_BITS {
        FIELD_MAX
    } else {
        FIELD_MAX >> (FIELD_BITS - n)
    }
}

/// Number of fields needed to hold `num_bits` bits.
#[inline(always)]
pub const fn fields_for(num_bits: usize) -> usize {
    num_bits.div_ceil(FIELD_BITS)
}

/// Partial Fisher-Yates over `pool`, returning the first `count` entries in
/// ascending order.
///
/// `count` is clamped to the pool size. `next_index(bound)` must return a
/// value in `0..bound`.
pub(crate) fn sample_with<F>(pool: &mut [usize], count: usize, mut next_index: F) -> Vec<usize>
where
    F: FnMut(usize) -> usize,
{
    let count = count.min(pool.len());
    for i in 0..count {
        let j = i + next_index(pool.len() - i);
        pool.swap(i, j);
    }
    let mut picked = pool[..count].to_vec();
    picked.sort_unstable();
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_field_position() {
        assert_eq!(field_index(0), 0);
        assert_eq!(field_index(63), 0);
        assert_eq!(field_index(64), 1);
        assert_eq!(field_offset(65), 1);
        assert_eq!(field_offset(127), 63);
    }

    #[test]
    fn test_bitmask() {
        assert_eq!(bitmask(0), 0);
        assert_eq!(bitmask(1), 1);
        assert_eq!(bitmask(8), 0xFF);
        assert_eq!(bitmask(64), FIELD_MAX);
        assert_eq!(bitmask(100), FIELD_MAX);
    }

    #[test]
    fn test_sizing() {
        assert_eq!(fields_for(0), 0);
        assert_eq!(fields_for(1), 1);
        assert_eq!(fields_for(64), 1);
        assert_eq!(fields_for(65), 2);
    }

    #[test]
    fn test_sample_with_unique() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut pool: Vec<usize> = (0..100).collect();
        let picked = sample_with(&mut pool, 50, |bound| rng.gen_range(0..bound));
        assert_eq!(picked.len(), 50);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert!(picked.iter().all(|&i| i < 100));
    }

    #[test]
    fn test_sample_with_clamped() {
        let mut pool: Vec<usize> = (0..4).collect();
        let picked = sample_with(&mut pool, 10, |_| 0);
        assert_eq!(picked, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sample_with_last_choice() {
        let mut pool: Vec<usize> = (0..6).collect();
        let picked = sample_with(&mut pool, 3, |bound| bound - 1);
        assert_eq!(picked, vec![0, 1, 5]);
        assert_eq!(pool, vec![5, 0, 1, 3, 4, 2]);
    }
}
