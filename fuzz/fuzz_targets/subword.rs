//! Fuzz target for a single sub-word fold.
//!
//! For any register, correction and 1–3 bytes, applying the fold to a
//! device must leave `register ^ correction` equal to the bit-serial CRC of
//! the bytes continued from the old `register ^ correction`.

#![no_main]

use arbitrary::Arbitrary;
use device::reference::{crc32_msb_bitwise, crc32_msb_word};
use libfuzzer_sys::fuzz_target;
use wordcrc::subword;

#[derive(Arbitrary, Debug)]
struct Input {
  register: u32,
  correction: u32,
  bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Some(step) = subword::fold(input.register, input.correction, &input.bytes) else {
    assert!(input.bytes.is_empty() || input.bytes.len() > 3);
    return;
  };

  let before = input.register ^ input.correction;
  let after = crc32_msb_word(input.register, step.word) ^ step.correction;
  assert_eq!(after, crc32_msb_bitwise(before, &input.bytes));
});
