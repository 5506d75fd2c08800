//! Bit-serial software accumulator.
//!
//! [`SoftCrc`] models a CRC peripheral with the reference shift register in
//! [`crate::reference`]. It is the simulated device used by the test suites:
//! slow, but correct by construction.

use traits::{RESET_VALUE, WordAccumulator};

use crate::reference::crc32_msb_word;

/// Software model of a word accumulator, one bit per iteration.
///
/// A freshly constructed accumulator is already reset.
///
/// # Example
///
/// ```
/// use device::SoftCrc;
/// use traits::WordAccumulator;
///
/// let mut acc = SoftCrc::new();
/// acc.write(0x1234_5678);
/// assert_eq!(acc.read(), 0xDF8A_8A2B);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoftCrc {
  reg: u32,
}

impl SoftCrc {
  /// Create an accumulator in its reset state.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { reg: RESET_VALUE }
  }
}

impl Default for SoftCrc {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl WordAccumulator for SoftCrc {
  #[inline]
  fn reset(&mut self) {
    self.reg = RESET_VALUE;
  }

  #[inline]
  fn write(&mut self, word: u32) {
    self.reg = crc32_msb_word(self.reg, word);
  }

  #[inline]
  fn read(&self) -> u32 {
    self.reg
  }

  fn name(&self) -> &'static str {
    "soft/bitwise"
  }
}
