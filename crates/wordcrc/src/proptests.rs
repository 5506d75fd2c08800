//! Property tests for the session engine.
//!
//! The oracle is the bit-serial reference register in `device::reference`:
//! whatever the chunking, alignment, seed or feed path, a session must land
//! on the same CRC as one continuous shift register over the same bytes.

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use device::{SoftCrc, TableCrc, reference::crc32_msb_bitwise};
use proptest::prelude::*;

use crate::{FeedForce, Session, subword};

/// Word-aligned scratch buffer: `&buf.0[offset..]` starts at grid + offset.
#[repr(C, align(4))]
struct Aligned([u8; 512]);

fn feed_in_chunks<A: traits::WordAccumulator>(session: &mut Session<A>, data: &[u8], sizes: &[usize]) {
  let mut offset = 0;
  let mut idx = 0;
  while offset < data.len() {
    // Zero sizes become one byte so the loop always advances.
    let size = if sizes.is_empty() { 1 } else { sizes[idx % sizes.len()].max(1) };
    let end = (offset + size).min(data.len());
    session.feed(&data[offset..end]);
    offset = end;
    idx += 1;
  }
}

#[test]
fn zero_chunk_sizes_still_advance() {
  let data = [1u8, 2, 3];
  let mut session = Session::begin_with(SoftCrc::new(), 0, FeedForce::Auto);
  feed_in_chunks(&mut session, &data, &[0]);
  assert_eq!(session.finish(), crc32_msb_bitwise(0, &data));
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn oneshot_matches_reference(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    initial in any::<u32>()
  ) {
    let mut session = Session::begin_with(TableCrc::new(), initial, FeedForce::Auto);
    session.feed(&data);
    prop_assert_eq!(session.finish(), crc32_msb_bitwise(initial, &data));
  }

  #[test]
  fn chunking_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    sizes in proptest::collection::vec(0usize..=9, 0..16),
    initial in any::<u32>()
  ) {
    let mut session = Session::begin_with(SoftCrc::new(), initial, FeedForce::Auto);
    feed_in_chunks(&mut session, &data, &sizes);
    prop_assert_eq!(session.finish(), crc32_msb_bitwise(initial, &data));
  }

  #[test]
  fn alignment_independence(
    bytes in proptest::collection::vec(any::<u8>(), 0..=500),
    offset in 0usize..4,
    initial in any::<u32>()
  ) {
    let mut buf = Aligned([0u8; 512]);
    let data = &mut buf.0[offset..offset + bytes.len()];
    data.copy_from_slice(&bytes);

    let mut session = Session::begin_with(SoftCrc::new(), initial, FeedForce::Auto);
    session.feed(data);
    prop_assert_eq!(session.finish(), crc32_msb_bitwise(initial, &bytes));
  }

  #[test]
  fn concatenation(
    a in proptest::collection::vec(any::<u8>(), 0..=64),
    b in proptest::collection::vec(any::<u8>(), 0..=64),
    initial in any::<u32>()
  ) {
    let mut split = Session::begin_with(SoftCrc::new(), initial, FeedForce::Auto);
    split.feed(&a);
    split.feed(&b);

    let joined: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
    let mut whole = Session::begin_with(SoftCrc::new(), initial, FeedForce::Auto);
    whole.feed(&joined);

    prop_assert_eq!(split.finish(), whole.finish());
  }

  #[test]
  fn subword_path_matches_word_path(
    data in proptest::collection::vec(any::<u8>(), 0..=256),
    sizes in proptest::collection::vec(1usize..=7, 1..8),
    initial in any::<u32>()
  ) {
    let mut words = Session::begin_with(SoftCrc::new(), initial, FeedForce::Auto);
    let mut folds = Session::begin_with(SoftCrc::new(), initial, FeedForce::Subword);
    feed_in_chunks(&mut words, &data, &sizes);
    feed_in_chunks(&mut folds, &data, &sizes);
    prop_assert_eq!(words.finish(), folds.finish());
  }

  #[test]
  fn fold_preserves_invariant(
    register in any::<u32>(),
    correction in any::<u32>(),
    bytes in proptest::collection::vec(any::<u8>(), 1..=3)
  ) {
    let step = subword::fold(register, correction, &bytes).unwrap();
    let after = device::reference::crc32_msb_word(register, step.word) ^ step.correction;
    prop_assert_eq!(after, crc32_msb_bitwise(register ^ correction, &bytes));
  }
}
