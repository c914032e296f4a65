//! Text rendering of bit vectors.
//!
//! - `print` / `print_array`: one '0'/'1' per bit, index 0 first
//! - `print_one_ids`: set-bit indices, each followed by a space
//! - `print_fields`: raw storage, most significant field first

use crate::bitvector::BitVector;
use crate::utils::FIELD_BITS;
use itertools::Itertools;
use std::fmt;
use std::io::{self, Write};

impl BitVector {
    /// Write the bits as '0'/'1' characters, index 0 first.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_bit_string().as_bytes())
    }

    /// Write the bits in array order (index 0 first); same text as [`print`](Self::print).
    pub fn print_array<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.print(out)
    }

    /// Write the index of every set bit followed by a single space.
    pub fn print_one_ids<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for idx in self.ones() {
            write!(out, "{} ", idx)?;
        }
        Ok(())
    }

    /// Write each storage field in binary, most significant field first.
    ///
    /// Lower fields use the full field width; the top field shows only the
    /// bits that belong to the vector.
    ///
    /// ```
    /// use bitweave::BitVector;
    ///
    /// let mut bv = BitVector::new(70);
    /// bv.set(64, true).unwrap();
    /// bv.set(1, true).unwrap();
    ///
    /// let mut out = Vec::new();
    /// bv.print_fields(&mut out).unwrap();
    /// let text = String::from_utf8(out).unwrap();
    /// assert_eq!(text, format!("000001 {:064b}", 2));
    /// ```
    pub fn print_fields<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let top = self.num_fields().saturating_sub(1);
        let text = self
            .fields()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, field)| {
                let width = if i == top {
                    self.len() - top * FIELD_BITS
                } else {
                    FIELD_BITS
                };
                format!("{:0width$b}", field, width = width)
            })
            .join(" ");
        out.write_all(text.as_bytes())
    }

    /// Render the bits as a '0'/'1' string, index 0 first.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(print: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_index_zero_first() {
        let mut bv = BitVector::new(8);
        bv.set_byte(0, 130).unwrap();
        assert_eq!(render(|out| bv.print(out)), "01000001");
        assert_eq!(render(|out| bv.print_array(out)), "01000001");
        assert_eq!(bv.to_string(), "01000001");
    }

    #[test]
    fn test_print_one_ids() {
        let mut bv = BitVector::new(8);
        bv.set_byte(0, 130).unwrap();
        assert_eq!(render(|out| bv.print_one_ids(out)), "1 7 ");
        assert_eq!(render(|out| BitVector::new(8).print_one_ids(out)), "");
    }

    #[test]
    fn test_print_fields_widths() {
        let bv = BitVector::new(128);
        let text = render(|out| bv.print_fields(out));
        assert_eq!(text, format!("{} {}", "0".repeat(64), "0".repeat(64)));

        assert_eq!(render(|out| BitVector::new(0).print_fields(out)), "");
        assert_eq!(render(|out| BitVector::new(3).print_fields(out)), "000");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(BitVector::default().to_string(), "");
    }
}
