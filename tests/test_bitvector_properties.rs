//! Property tests for BitVector invariants.

use bitweave::{BitVector, FIELD_BITS};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn padding_clear(bv: &BitVector) -> bool {
    let live = bv.len() % FIELD_BITS;
    match bv.fields().last() {
        Some(&last) if live != 0 => last >> live == 0,
        _ => true,
    }
}

fn random_range<R: Rng>(rng: &mut R, len: usize) -> (usize, usize) {
    let begin = rng.gen_range(0..=len);
    let end = rng.gen_range(begin..=len);
    (begin, end)
}

fn std_hash(bv: &BitVector) -> u64 {
    let mut hasher = DefaultHasher::new();
    bv.hash(&mut hasher);
    hasher.finish()
}

fn bit_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('0'), Just('1')], 0..300)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_new_is_all_zero(n in 0..2000usize) {
        let bv = BitVector::new(n);
        prop_assert_eq!(bv.len(), n);
        prop_assert_eq!(bv.count_ones(), 0);
        prop_assert!(bv.none());
        prop_assert_eq!(bv.find_bit(0), None);
    }

    #[test]
    fn prop_counts_agree(n in 0..2000usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bv = BitVector::random(n, &mut rng, 0.3).unwrap();

        prop_assert_eq!(bv.count_ones(), bv.count_ones_sparse());
        prop_assert_eq!(bv.count_ones() + bv.count_zeros(), n);
        prop_assert_eq!(bv.get_ones().len(), bv.count_ones());
    }

    #[test]
    fn prop_num_bytes_rounds_up(n in 0..5000usize) {
        prop_assert_eq!(BitVector::new(n).num_bytes(), (n + 7) / 8);
    }

    #[test]
    fn prop_string_round_trip(text in bit_string()) {
        let bv: BitVector = text.parse().unwrap();
        prop_assert_eq!(bv.len(), text.len());
        prop_assert_eq!(bv.count_ones(), text.matches('1').count());
        prop_assert_eq!(bv.to_string(), text);
    }

    #[test]
    fn prop_double_not_identity(n in 0..1000usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bv = BitVector::random(n, &mut rng, 0.5).unwrap();

        prop_assert_eq!(!!bv.clone(), bv.clone());

        let mut twice = bv.clone();
        twice.not_assign().not_assign();
        prop_assert_eq!(twice, bv);
    }

    #[test]
    fn prop_not_complements_count(n in 0..1000usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bv = BitVector::random(n, &mut rng, 0.5).unwrap();
        let inverted = !&bv;

        prop_assert_eq!(inverted.count_ones(), n - bv.count_ones());
        prop_assert!(padding_clear(&inverted));
    }

    #[test]
    fn prop_shift_round_trip_keeps_low_bits(n in 1..600usize, k in 0..700usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bv = BitVector::random(n, &mut rng, 0.5).unwrap();
        let back = &(&bv << k) >> k;

        let kept = n.saturating_sub(k);
        for i in 0..n {
            let expected = i < kept && bv.has(i);
            prop_assert_eq!(back.has(i), expected);
        }
    }

    #[test]
    fn prop_shift_matches_bitwise_model(n in 1..300usize, k in 0..320usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bv = BitVector::random(n, &mut rng, 0.5).unwrap();
        let left = &bv << k;
        let right = &bv >> k;

        for i in 0..n {
            prop_assert_eq!(left.has(i), i >= k && bv.has(i - k));
            prop_assert_eq!(right.has(i), bv.has(i + k));
        }
        prop_assert!(padding_clear(&left));
    }

    #[test]
    fn prop_set_then_clear_range(n in 1..700usize, a in 0..700usize, b in 0..700usize) {
        let (begin, end) = (a.min(b).min(n), a.max(b).min(n));
        let mut bv = BitVector::new(n);

        bv.set_range(begin, end).unwrap();
        prop_assert_eq!(bv.count_ones(), end - begin);
        prop_assert_eq!(bv.find_bit(0), if begin < end { Some(begin) } else { None });

        bv.clear_range(begin, end).unwrap();
        prop_assert!(bv.none());
    }

    #[test]
    fn prop_toggle_range_matches_per_bit(n in 1..500usize, a in 0..500usize, b in 0..500usize, seed in any::<u64>()) {
        let (begin, end) = (a.min(b).min(n), a.max(b).min(n));
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut fast = BitVector::random(n, &mut rng, 0.5).unwrap();
        let mut slow = fast.clone();

        fast.toggle_range(begin, end).unwrap();
        for i in begin..end {
            slow.toggle(i).unwrap();
        }
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn prop_padding_stays_clear(n in 0..400usize, seed in any::<u64>(), steps in 1..40usize) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut bv = BitVector::new(n);

        for _ in 0..steps {
            let len = bv.len();
            match rng.gen_range(0..19) {
                0 => bv.set_all(),
                1 => bv.toggle_all(),
                2 => bv <<= rng.gen_range(0..70usize),
                3 => bv >>= rng.gen_range(0..70usize),
                4 => bv.push_back(rng.gen()),
                5 => {
                    let _ = bv.pop_back();
                }
                6 => {
                    let pos = rng.gen_range(0..=len);
                    bv.insert(pos, rng.gen(), rng.gen_range(0..80usize)).unwrap();
                }
                7 => {
                    let pos = rng.gen_range(0..=len);
                    let count = rng.gen_range(0..=len - pos);
                    bv.delete(pos, count).unwrap();
                }
                8 if len > 0 => {
                    let b = rng.gen_range(0..bv.num_bytes());
                    bv.set_byte(b, rng.gen()).unwrap();
                }
                9 if len > 0 => {
                    let w = rng.gen_range(0..len.div_ceil(32));
                    bv.set_uint(w, rng.gen()).unwrap();
                }
                10 if len > 0 => {
                    let bit = rng.gen_range(0..len);
                    bv.set_uint_at_bit(bit, rng.gen()).unwrap();
                }
                11 if len > 0 => {
                    let w = rng.gen_range(0..bv.num_fields());
                    bv.set_uint64(w, rng.gen()).unwrap();
                }
                12 => {
                    let (begin, end) = random_range(&mut rng, len);
                    bv.set_range(begin, end).unwrap();
                }
                13 => {
                    let (begin, end) = random_range(&mut rng, len);
                    bv.toggle_range(begin, end).unwrap();
                }
                14 => {
                    let other = BitVector::random(len, &mut rng, 0.5).unwrap();
                    bv.nand_assign(&other).unwrap();
                }
                15 => {
                    let other = BitVector::random(len, &mut rng, 0.5).unwrap();
                    bv.nor_assign(&other).unwrap();
                }
                16 => {
                    let other = BitVector::random(len, &mut rng, 0.5).unwrap();
                    bv.equ_assign(&other).unwrap();
                }
                17 => {
                    bv.not_assign();
                }
                _ => {
                    let size = rng.gen_range(0..400usize);
                    bv.resize(size).unwrap();
                }
            }
            prop_assert!(padding_clear(&bv));
            prop_assert_eq!(bv.num_fields(), (bv.len() + FIELD_BITS - 1) / FIELD_BITS);
        }
    }

    #[test]
    fn prop_insert_then_delete_restores(n in 0..300usize, count in 0..150usize, pos_seed in any::<usize>(), seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let original = BitVector::random(n, &mut rng, 0.5).unwrap();
        let pos = pos_seed % (n + 1);

        let mut bv = original.clone();
        bv.insert(pos, true, count).unwrap();
        prop_assert_eq!(bv.len(), n + count);
        prop_assert_eq!(bv.count_ones(), original.count_ones() + count);

        bv.delete(pos, count).unwrap();
        prop_assert_eq!(bv, original);
    }

    #[test]
    fn prop_ordering_consistent_with_eq(a in bit_string(), b in bit_string()) {
        let x: BitVector = a.parse().unwrap();
        let y: BitVector = b.parse().unwrap();

        prop_assert_eq!(x.cmp(&y) == std::cmp::Ordering::Equal, x == y);
        prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
        if x == y {
            prop_assert_eq!(std_hash(&x), std_hash(&y));
            prop_assert_eq!(x.hash_value(), y.hash_value());
        }
    }

    #[test]
    fn prop_random_count_exact(n in 0..2000usize, frac in 0.0..=1.0f64, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let k = (n as f64 * frac) as usize;
        let bv = BitVector::random_count(n, &mut rng, k).unwrap();
        prop_assert_eq!(bv.count_ones(), k);
    }

    #[test]
    fn prop_binary_round_trip(n in 0..1000usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let bv = BitVector::random(n, &mut rng, 0.5).unwrap();
        let restored = BitVector::from_binary(&bv.to_binary().unwrap()).unwrap();
        prop_assert_eq!(restored, bv);
    }
}
