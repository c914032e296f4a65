//! Error types for bitweave.
//!
//! All fallible operations report a [`BitVectorError`], built with the
//! `thiserror` crate. Search operations such as `find_bit` do not fail; they
//! return `None` when nothing is found.

use thiserror::Error;

/// The main error type for bit vector operations.
#[derive(Error, Debug)]
pub enum BitVectorError {
    /// Direct bit, byte or word access past the end of the vector
    #[error("Index out of range: index {index}, size {size}")]
    IndexOutOfRange {
        /// The index that was accessed
        index: usize,
        /// The number of addressable units
        size: usize,
    },

    /// Requested size cannot be represented
    #[error("Invalid size: requested {requested}, limit {limit}")]
    InvalidSize {
        /// Size that was asked for
        requested: usize,
        /// Largest size that would have been accepted
        limit: usize,
    },

    /// Half-open range is reversed or extends past the end
    #[error("Invalid range: [{begin}, {end}) in vector of size {size}")]
    InvalidRange {
        /// Range start
        begin: usize,
        /// Range end (exclusive)
        end: usize,
        /// Vector size
        size: usize,
    },

    /// Binary operation on vectors of different sizes
    #[error("Size mismatch: left has {left} bits, right has {right} bits")]
    SizeMismatch {
        /// Size of the left operand
        left: usize,
        /// Size of the right operand
        right: usize,
    },

    /// Removal from an empty vector
    #[error("Cannot remove a bit from an empty vector")]
    EmptyContainer,

    /// Probability outside [0, 1]
    #[error("Invalid probability: {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),

    /// Character other than '0' or '1' in a bit string
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Position within the string
        position: usize,
    },

    /// Random source returned indices that do not form a valid sample
    #[error("Invalid sample: expected {expected} distinct indices below {upper}, got {distinct}")]
    InvalidSample {
        /// Number of indices requested
        expected: usize,
        /// Number of distinct in-range indices received
        distinct: usize,
        /// Exclusive upper bound for the indices
        upper: usize,
    },

    /// Decoded data violates the storage layout
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization error occurred
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for bit vector operations.
pub type Result<T> = std::result::Result<T, BitVectorError>;
