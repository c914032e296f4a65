//! Persistence for bit vectors.
//!
//! `BitVector` goes through serde as `{ num_bits, fields }`. Decoding checks
//! the field count and that padding bits are zero, so a decoded vector always
//! satisfies the storage invariants. JSON uses `serde_json`; the compact
//! binary form and files use `bincode`.
//!
//! # Examples
//!
//! ```
//! use bitweave::BitVector;
//!
//! let bv: BitVector = "1011".parse().unwrap();
//! let json = bv.to_json().unwrap();
//! assert_eq!(BitVector::from_json(&json).unwrap(), bv);
//!
//! let bytes = bv.to_binary().unwrap();
//! assert_eq!(BitVector::from_binary(&bytes).unwrap(), bv);
//! ```

use crate::bitvector::{check_size, BitVector};
use crate::error::{BitVectorError, Result};
use crate::utils::{bitmask, field_offset, fields_for, Field};
use bitvec::vec::BitVec;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Wire representation of a [`BitVector`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitVectorRepr {
    /// Number of logical bits
    pub num_bits: usize,
    /// Packed storage fields
    pub fields: Vec<Field>,
}

impl From<BitVector> for BitVectorRepr {
    fn from(bv: BitVector) -> Self {
        Self {
            num_bits: bv.len(),
            fields: bv.bits.into_vec(),
        }
    }
}

impl TryFrom<BitVectorRepr> for BitVector {
    type Error = BitVectorError;

    fn try_from(repr: BitVectorRepr) -> Result<Self> {
        check_size(repr.num_bits)?;
        let expected = fields_for(repr.num_bits);
        if repr.fields.len() != expected {
            return Err(BitVectorError::InvalidEncoding(format!(
                "{} bits need {} fields, found {}",
                repr.num_bits,
                expected,
                repr.fields.len()
            )));
        }

        let live = field_offset(repr.num_bits);
        if let Some(&last) = repr.fields.last() {
            if live != 0 && last & !bitmask(live) != 0 {
                return Err(BitVectorError::InvalidEncoding(
                    "padding bits beyond the vector size are set".to_string(),
                ));
            }
        }

        let mut bits = BitVec::from_vec(repr.fields);
        bits.truncate(repr.num_bits);
        Ok(Self::from_storage(bits))
    }
}

impl BitVector {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }

    /// Write the vector to `path` in binary form.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a vector previously written with [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }
}
