//! Bitweave - Packed Bit Vectors for Scientific Computing
//!
//! Bitweave provides [`BitVector`], a dynamically sized sequence of bits packed
//! into 64-bit fields. It is the bit-storage foundation for simulations and
//! evolutionary-computation code that manipulates large binary genomes.
//!
//! # Key Characteristics
//!
//! - Bit, byte, 32-bit and 64-bit addressing, aligned or at any bit offset
//! - Field-at-a-time boolean algebra, shifts and range operations
//! - Population count, set-bit search and set-bit iteration
//! - Random construction through any [`rand::Rng`] or custom [`RandomSource`]
//! - Text, JSON and binary output
//!
//! # Architecture
//!
//! - **bitvector**: `bitvec`-backed storage, construction, access, counting, ranges, ordering
//! - **ops**: AND/OR/XOR/NAND/NOR/EQU/NOT and shifts, named and as operators
//! - **bit_ref**: [`BitRef`] proxy for `bv[i] op= value` style updates
//! - **format**: `print*` family and `Display`
//! - **random**: the [`RandomSource`] capability
//! - **serialize**: serde representation and persistence helpers
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use bitweave::BitVector;
//!
//! let mut bv: BitVector = "10011001010000011101".parse().unwrap();
//! assert_eq!(bv.len(), 20);
//! assert_eq!(bv.count_ones(), 9);
//!
//! bv.toggle_range(0, 4).unwrap();
//! assert_eq!(bv.to_string(), "01101001010000011101");
//!
//! // Bitwise operations
//! let mask = BitVector::with_fill(20, true);
//! assert_eq!(&bv & &mask, bv);
//! assert!((&bv ^ &bv).none());
//! ```
//!
//! ## Random Pattern Generation
//!
//! ```
//! use bitweave::BitVector;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let bv = BitVector::random_count(2048, &mut rng, 200).unwrap();
//! assert_eq!(bv.count_ones(), 200);
//! ```
//!
//! # Safety
//!
//! Direct access (`get`, `set`, `get_byte`, ...) is bounds-checked and reports
//! [`BitVectorError`]. Internal hot paths use `debug_assert!` for their own
//! invariants.

// Module declarations
pub mod bit_ref;
pub mod bitvector;
pub mod error;
pub mod format;
pub mod ops;
pub mod random;
pub mod serialize;
pub mod utils;

// Re-exports for convenient access
pub use bit_ref::BitRef;
pub use bitvector::{BitVector, DEFAULT_PROBABILITY, MAX_BITS};
pub use error::{BitVectorError, Result};
pub use random::RandomSource;
pub use serialize::BitVectorRepr;
pub use utils::{Field, FIELD_BITS};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Bitweave";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Bitweave"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _bv = BitVector::new(64);
        let _result: Result<()> = Ok(());
        assert_eq!(FIELD_BITS, 64);
    }
}
