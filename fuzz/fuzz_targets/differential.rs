//! Differential fuzzing against the `crc-fast` crate.
//!
//! A session seeded with `0xFFFFFFFF` computes CRC-32/MPEG-2; with the
//! final XOR applied it computes CRC-32/BZIP2.

#![no_main]

use crc_fast::CrcAlgorithm;
use device::{SoftCrc, TableCrc};
use libfuzzer_sys::fuzz_target;
use wordcrc::{FeedForce, Session, checksum};

fuzz_target!(|data: &[u8]| {
  let mpeg2 = crc_fast::checksum(CrcAlgorithm::Crc32Mpeg2, data) as u32;
  let bzip2 = crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, data) as u32;

  let table = checksum(TableCrc::new(), 0xFFFF_FFFF, data);
  assert_eq!(table, mpeg2, "table vs crc-fast mpeg2");
  assert_eq!(table ^ 0xFFFF_FFFF, bzip2, "table vs crc-fast bzip2");

  if data.len() <= 1024 {
    let mut soft = Session::begin_with(SoftCrc::new(), 0xFFFF_FFFF, FeedForce::Subword);
    soft.feed(data);
    assert_eq!(soft.finish(), mpeg2, "soft/subword vs crc-fast mpeg2");
  }
});
