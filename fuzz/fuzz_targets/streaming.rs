//! Fuzz target for the streaming session API.
//!
//! Arbitrary chunk sizes and start offsets (so every head and tail residue
//! is reached) must produce the bit-serial reference CRC.

#![no_main]

use arbitrary::Arbitrary;
use device::{TableCrc, reference::crc32_msb_bitwise};
use libfuzzer_sys::fuzz_target;
use wordcrc::{FeedForce, Session};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Bytes skipped before the fed range (shifts the address residue).
  offset: u8,
  initial: u32,
  /// Chunk sizes for streaming feeds
  chunk_sizes: Vec<u8>,
  subword: bool,
}

fuzz_target!(|input: Input| {
  let skip = usize::from(input.offset % 4).min(input.data.len());
  let data = &input.data[skip..];
  let force = if input.subword { FeedForce::Subword } else { FeedForce::Auto };

  let expected = crc32_msb_bitwise(input.initial, data);

  let mut session = Session::begin_with(TableCrc::new(), input.initial, force);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      usize::from(input.chunk_sizes[chunk_idx % input.chunk_sizes.len()])
    };

    // Zero-length feeds are valid and must be no-ops.
    let end = (offset + chunk_size).min(data.len());
    session.feed(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
    if chunk_idx > data.len() * 2 + 16 {
      session.feed(&data[offset..]);
      break;
    }
  }

  let stats = session.stats();
  assert_eq!(session.finish(), expected, "streaming mismatch: {stats}");
});
