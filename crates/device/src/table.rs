//! Table-driven software accumulator.
//!
//! Same register semantics as [`SoftCrc`](crate::SoftCrc), but each word is
//! consumed a byte at a time through a 256-entry table generated at compile
//! time. Used where the bit-serial model is too slow (benches, fuzzing).

use traits::{POLYNOMIAL, RESET_VALUE, WordAccumulator};

/// MSB-first lookup table for [`POLYNOMIAL`].
static TABLE: [u32; 256] = generate_table(POLYNOMIAL);

/// Compute a single MSB-first table entry: the CRC of byte `index` from a
/// zero register.
#[must_use]
pub const fn table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = (index as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
    bit += 1;
  }
  crc
}

/// Generate the 256-entry MSB-first table for `poly`.
#[must_use]
#[allow(clippy::indexing_slicing)] // i is 0..256, table is [u32; 256]
pub const fn generate_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = table_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Table-driven model of a word accumulator.
///
/// A freshly constructed accumulator is already reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableCrc {
  reg: u32,
}

impl TableCrc {
  /// Create an accumulator in its reset state.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { reg: RESET_VALUE }
  }
}

impl Default for TableCrc {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl WordAccumulator for TableCrc {
  #[inline]
  fn reset(&mut self) {
    self.reg = RESET_VALUE;
  }

  #[inline]
  #[allow(clippy::indexing_slicing)] // index is 0..=255 by shift, table is [u32; 256]
  fn write(&mut self, word: u32) {
    let mut crc = self.reg;
    for byte in word.to_be_bytes() {
      let index = ((crc >> 24) ^ u32::from(byte)) as usize;
      crc = (crc << 8) ^ TABLE[index];
    }
    self.reg = crc;
  }

  #[inline]
  fn read(&self) -> u32 {
    self.reg
  }

  fn name(&self) -> &'static str {
    "soft/table"
  }
}
