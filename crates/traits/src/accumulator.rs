//! Word accumulator capability.
//!
//! A word accumulator is a CRC device (an MCU peripheral, or a software model
//! of one) whose register can only be driven through three operations:
//!
//! - `reset()` loads the fixed value [`RESET_VALUE`]
//! - `write(word)` advances the register by one 32-bit word, MSB first
//! - `read()` returns the register
//!
//! There is no way to load an arbitrary value or to XOR bits into the
//! register. Everything else (custom initial values, byte-granular input)
//! is layered on top by the engine in `wordcrc`.
//!
//! # Register Update
//!
//! For polynomial `P = 0x04C11DB7`, writing `word` performs 32 iterations of
//!
//! ```text
//! top = (reg ^ word) bit 31
//! reg = (reg << 1) ^ (P if top else 0);  word <<= 1
//! ```
//!
//! which is linear over GF(2): `write(a ^ b)` from register `r` equals
//! `write(a)` from `r ^ b`. The engine relies on exactly this property.

/// CRC-32 generator polynomial (normal form, MSB-first).
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// Register value after `reset()`.
pub const RESET_VALUE: u32 = 0xFFFF_FFFF;

/// Bytes consumed per accumulator write.
pub const WORD_BYTES: usize = 4;

/// A CRC device that only accepts whole 32-bit words.
///
/// Implementations must process each written word most-significant bit
/// first with [`POLYNOMIAL`], and `reset()` must load [`RESET_VALUE`].
///
/// # Example
///
/// ```
/// use traits::{POLYNOMIAL, RESET_VALUE, WordAccumulator};
///
/// struct Bitwise(u32);
///
/// impl WordAccumulator for Bitwise {
///   fn reset(&mut self) {
///     self.0 = RESET_VALUE;
///   }
///   fn write(&mut self, word: u32) {
///     let mut reg = self.0 ^ word;
///     for _ in 0..32 {
///       let mask = 0u32.wrapping_sub(reg >> 31);
///       reg = (reg << 1) ^ (POLYNOMIAL & mask);
///     }
///     self.0 = reg;
///   }
///   fn read(&self) -> u32 {
///     self.0
///   }
/// }
///
/// let mut acc = Bitwise(0);
/// acc.reset();
/// acc.write(0x1234_5678);
/// assert_eq!(acc.read(), 0xDF8A_8A2B);
/// ```
pub trait WordAccumulator {
  /// Load [`RESET_VALUE`] into the register.
  fn reset(&mut self);

  /// Advance the register by one word, most-significant bit first.
  fn write(&mut self, word: u32);

  /// Current register value. Has no side effects.
  #[must_use]
  fn read(&self) -> u32;

  /// Backend name for introspection (e.g. `"soft/bitwise"`, `"stm32/mmio"`).
  #[must_use]
  fn name(&self) -> &'static str {
    "unknown"
  }
}

impl<A: WordAccumulator + ?Sized> WordAccumulator for &mut A {
  #[inline]
  fn reset(&mut self) {
    (**self).reset();
  }

  #[inline]
  fn write(&mut self, word: u32) {
    (**self).write(word);
  }

  #[inline]
  fn read(&self) -> u32 {
    (**self).read()
  }

  #[inline]
  fn name(&self) -> &'static str {
    (**self).name()
  }
}
