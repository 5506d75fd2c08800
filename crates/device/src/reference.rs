//! Bit-serial reference shift register.
//!
//! This module is the "source of truth" for the MSB-first CRC-32 that every
//! accumulator implements and that the engine in `wordcrc` must reproduce.
//! It processes one bit at a time, making it:
//!
//! - **Obviously correct**: the loop is the textbook shift register
//! - **Alignment-free**: any byte count, no word grouping
//! - **Const-evaluable**: check values are verified at compile time
//!
//! # CRC Model
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `width`   | 32 |
//! | `poly`    | 0x04C11DB7 |
//! | `init`    | caller supplied |
//! | `refin`   | false |
//! | `refout`  | false |
//! | `xorout`  | 0 |
//!
//! With `init = 0xFFFFFFFF` this is CRC-32/MPEG-2.

// Indexing is bounded by `0..data.len()`; iterators are not usable in const fn.
#![allow(clippy::indexing_slicing)]

use traits::POLYNOMIAL;

/// Bitwise CRC-32 over `data`, MSB first, starting from register `init`.
///
/// Returns the raw register (no reflection, no final XOR).
///
/// # Example
///
/// ```
/// use device::reference::crc32_msb_bitwise;
///
/// assert_eq!(crc32_msb_bitwise(0xFFFF_FFFF, b"123456789"), 0x0376_E6E7);
/// ```
#[must_use]
pub const fn crc32_msb_bitwise(init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 {
        (crc << 1) ^ POLYNOMIAL
      } else {
        crc << 1
      };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// One accumulator step: feed the 32 bits of `word`, MSB first, into `reg`.
///
/// Equivalent to `crc32_msb_bitwise(reg, &word.to_be_bytes())`.
#[must_use]
pub const fn crc32_msb_word(reg: u32, word: u32) -> u32 {
  let mut crc = reg ^ word;
  let mut bit: u32 = 0;
  while bit < 32 {
    let mask = 0u32.wrapping_sub(crc >> 31);
    crc = (crc << 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/MPEG-2: init=0xFFFFFFFF, xorout=0x00000000
// Check value: 0x0376E6E7
const _: () = {
  let check = crc32_msb_bitwise(!0u32, CHECK_INPUT);
  assert!(check == 0x0376_E6E7);
};

// CRC-32/BZIP2: init=0xFFFFFFFF, xorout=0xFFFFFFFF
// Check value: 0xFC891918
const _: () = {
  let check = crc32_msb_bitwise(!0u32, CHECK_INPUT) ^ !0u32;
  assert!(check == 0xFC89_1918);
};

// The word step is the bitwise CRC of the word's big-endian bytes.
const _: () = {
  let word = crc32_msb_word(!0u32, 0x1234_5678);
  let bytes = crc32_msb_bitwise(!0u32, &[0x12, 0x34, 0x56, 0x78]);
  assert!(word == bytes);
  assert!(word == 0xDF8A_8A2B);
};
