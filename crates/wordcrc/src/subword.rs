//! Sub-word corrector: fold 1–3 bytes into a word-only accumulator.
//!
//! The accumulator consumes whole words, so a short run of bytes at the head
//! or tail of a range cannot be written directly. Instead the CRC step is
//! split algebraically.
//!
//! # Derivation
//!
//! Let `crc = reg ^ correction` be the true CRC before the bytes, `n` the
//! byte count and `k = 8n`. Shifting `k` data bits `d` through a 32-bit
//! MSB-first register gives
//!
//! ```text
//! crc' = (crc << k) ^ R(top_k(crc) ^ d)
//! ```
//!
//! where `R(x)` is the reduction of `x` by the polynomial. Writing a word whose
//! only set bits are the low `k` bits `x` into a zeroed register first
//! shifts `x` up (no reduction, the high bits are zero) and then reduces it:
//! that is exactly `R(x)`. So:
//!
//! - write `x = top_k(crc) ^ d` into a cleared register,
//! - keep `crc << k` outside the device as the new correction.
//!
//! The register is "cleared" by XORing its current reading into the written
//! word: `write(reg ^ x)` from `reg` equals `write(x)` from zero.
//!
//! | n | data bits | `top_k(crc)` | correction |
//! |---|-----------|--------------|------------|
//! | 1 | `[7:0]`   | `crc >> 24`  | `crc << 8`  |
//! | 2 | `[15:0]`  | `crc >> 16`  | `crc << 16` |
//! | 3 | `[23:0]`  | `crc >> 8`   | `crc << 24` |

/// The word to write and the correction to keep after folding 1–3 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fold {
  /// Word to write to the accumulator, as is.
  pub word: u32,
  /// Correction value once `word` has been written.
  pub correction: u32,
}

/// Fold `bytes` (1–3 of them, in stream order) into the state `register ^
/// correction`.
///
/// Returns `None` for an empty slice or more than three bytes.
///
/// # Example
///
/// ```
/// use wordcrc::subword::{Fold, fold};
///
/// // Tail of the 11-byte worked example: register after two full words.
/// let step = fold(0x7D24_A31B, 0, &[0xA6, 0xB7, 0xC8]);
/// assert_eq!(step, Some(Fold { word: 0x7DFF_3070, correction: 0x1B00_0000 }));
/// ```
#[inline]
#[must_use]
pub const fn fold(register: u32, correction: u32, bytes: &[u8]) -> Option<Fold> {
  let (data, bits) = match *bytes {
    [a] => (a as u32, 8),
    [a, b] => (((a as u32) << 8) | b as u32, 16),
    [a, b, c] => (((a as u32) << 16) | ((b as u32) << 8) | c as u32, 24),
    _ => return None,
  };

  let crc = register ^ correction;
  Some(Fold {
    word: register ^ (crc >> (32 - bits)) ^ data,
    correction: crc << bits,
  })
}
