//! Incremental CRC sessions.
//!
//! A [`Session`] is one begin → feed* → finish computation against a
//! [`WordAccumulator`]. The true CRC is never held by the device alone: it is
//! `register ^ correction`, where the correction is kept here because the
//! device can neither be seeded nor have bits XORed into it.
//!
//! # Feed Path
//!
//! ```text
//! |  head  |          aligned words          | tail |
//!   0..=3     written as big-endian words      0..=3
//!   folded    (first word absorbs correction)  folded
//! ```
//!
//! The head is measured against the 4-byte address grid, so the middle is
//! read from aligned memory. Results do not depend on the grid: any split of
//! the stream, at any alignment, yields the same CRC.

use core::fmt;

use traits::{RESET_VALUE, WORD_BYTES, WordAccumulator};

use crate::{
  config::{self, FeedForce},
  subword,
};

/// Counters for one session.
///
/// # Examples
///
/// ```
/// use device::SoftCrc;
/// use wordcrc::Session;
///
/// let data = [0u8; 11];
/// let mut session = Session::begin(SoftCrc::new(), 0xFFFF_FFFF);
/// session.feed(&data);
/// let stats = session.stats();
/// assert_eq!(stats.bytes, 11);
/// assert_eq!(stats.words * 4 + stats.folded_bytes, 11);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedStats {
  /// Bytes fed.
  pub bytes: u64,
  /// Whole words written.
  pub words: u64,
  /// Sub-word folds performed (each writes one word).
  pub folds: u64,
  /// Bytes consumed by folds.
  pub folded_bytes: u64,
  /// Words that absorbed a non-zero correction.
  pub installs: u64,
}

impl fmt::Display for FeedStats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "bytes={} words={} folds={} ({} bytes) installs={}",
      self.bytes, self.words, self.folds, self.folded_bytes, self.installs
    )
  }
}

/// One in-flight CRC computation.
///
/// The session owns its accumulator (or an exclusive borrow of it, since
/// `&mut A` is an accumulator too). Calling `feed` or `finish` without
/// `begin`, finishing twice, or running two sessions on one device does not
/// type-check.
///
/// # Example
///
/// ```
/// use device::SoftCrc;
/// use wordcrc::Session;
///
/// let mut acc = SoftCrc::new();
/// let mut session = Session::begin(&mut acc, 0xFFFF_FFFF);
/// session.feed(b"1234");
/// session.feed(b"56789");
/// assert_eq!(session.finish(), 0x0376_E6E7); // CRC-32/MPEG-2 check value
/// ```
#[derive(Debug)]
pub struct Session<A: WordAccumulator> {
  acc: A,
  correction: u32,
  force: FeedForce,
  stats: FeedStats,
}

impl<A: WordAccumulator> Session<A> {
  /// Reset `acc` and start a CRC seeded with `initial`.
  ///
  /// The feed path comes from [`config::get`].
  #[inline]
  #[must_use]
  pub fn begin(acc: A, initial: u32) -> Self {
    Self::begin_with(acc, initial, config::get().force)
  }

  /// Like [`begin`](Self::begin), with an explicit feed path.
  #[must_use]
  pub fn begin_with(mut acc: A, initial: u32, force: FeedForce) -> Self {
    acc.reset();
    Self {
      acc,
      // Cancels the reset value and substitutes `initial` once XORed into
      // the first word written.
      correction: RESET_VALUE ^ initial,
      force,
      stats: FeedStats::default(),
    }
  }

  /// Feed `data` in byte order.
  ///
  /// Any length (including zero) and any start address is accepted.
  pub fn feed(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.stats.bytes += data.len() as u64;

    match self.force {
      FeedForce::Auto => self.feed_words(data),
      FeedForce::Subword => self.fold(data),
    }
  }

  /// Feed several buffers in order.
  ///
  /// Identical to calling [`feed`](Self::feed) on each buffer.
  #[inline]
  pub fn feed_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.feed(buf);
    }
  }

  /// The CRC of everything fed so far, without ending the session.
  #[inline]
  #[must_use]
  pub fn value(&self) -> u32 {
    self.acc.read() ^ self.correction
  }

  /// End the session and return the CRC.
  #[inline]
  #[must_use]
  pub fn finish(self) -> u32 {
    self.value()
  }

  /// End the session, returning the CRC and the accumulator.
  #[inline]
  #[must_use]
  pub fn finish_and_release(self) -> (u32, A) {
    let crc = self.value();
    (crc, self.acc)
  }

  /// Counters for this session.
  #[inline]
  #[must_use]
  pub fn stats(&self) -> FeedStats {
    self.stats
  }

  /// Feed path in use.
  #[inline]
  #[must_use]
  pub fn force(&self) -> FeedForce {
    self.force
  }

  /// Name of the accumulator backend (e.g. `"soft/bitwise"`).
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.acc.name()
  }

  // ───────────────────────────────────────────────────────────────────────
  // Word-stream feeder
  // ───────────────────────────────────────────────────────────────────────

  fn feed_words(&mut self, data: &[u8]) {
    let head = head_len(data);
    let (head, rest) = data.split_at(head);
    self.fold(head);

    let (words, tail) = rest.as_chunks::<WORD_BYTES>();
    for word in words {
      self.write_word(u32::from_be_bytes(*word));
    }

    self.fold(tail);
  }

  /// Write one data word, absorbing any pending correction.
  #[inline]
  fn write_word(&mut self, word: u32) {
    let correction = core::mem::take(&mut self.correction);
    if correction != 0 {
      self.stats.installs += 1;
    }
    self.acc.write(word ^ correction);
    self.stats.words += 1;
  }

  // ───────────────────────────────────────────────────────────────────────
  // Sub-word corrector
  // ───────────────────────────────────────────────────────────────────────

  /// Fold `bytes` three at a time; no-op for an empty slice.
  #[inline]
  fn fold(&mut self, bytes: &[u8]) {
    for group in bytes.chunks(WORD_BYTES - 1) {
      // `chunks` never yields an empty or oversized group.
      if let Some(step) = subword::fold(self.acc.read(), self.correction, group) {
        self.acc.write(step.word);
        self.correction = step.correction;
        self.stats.folds += 1;
        self.stats.folded_bytes += group.len() as u64;
      }
    }
  }
}

/// Bytes before the first word boundary of `data`, at most `data.len()`.
#[inline]
fn head_len(data: &[u8]) -> usize {
  let misalign = data.as_ptr().addr() % WORD_BYTES;
  ((WORD_BYTES - misalign) % WORD_BYTES).min(data.len())
}

/// Compute the CRC of `data` seeded with `initial` in one session.
///
/// # Example
///
/// ```
/// use device::SoftCrc;
///
/// assert_eq!(wordcrc::checksum(SoftCrc::new(), 0xFFFF_FFFF, b""), 0xFFFF_FFFF);
/// ```
#[inline]
#[must_use]
pub fn checksum<A: WordAccumulator>(acc: A, initial: u32, data: &[u8]) -> u32 {
  let mut session = Session::begin(acc, initial);
  session.feed(data);
  session.finish()
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::{string::ToString, vec::Vec};

  use device::{SoftCrc, TableCrc, reference::crc32_msb_bitwise};

  use super::*;

  const WORKED: [u8; 11] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0xA6, 0xB7, 0xC8];

  /// Word-aligned storage, so slicing at `residue` lands on grid + residue.
  #[repr(C, align(4))]
  struct Aligned<const N: usize>([u8; N]);

  #[test]
  fn worked_scenario() {
    let mut session = Session::begin_with(SoftCrc::new(), 0xFFFF_FFFF, FeedForce::Auto);
    session.feed(&WORKED);
    assert_eq!(session.finish(), 0xF783_2A2F);
  }

  #[test]
  fn empty_returns_initial() {
    for initial in [0, 1, 0xFFFF_FFFF, 0xAAAA_AAAA, 0x1234_5678] {
      let mut session = Session::begin(SoftCrc::new(), initial);
      session.feed(&[]);
      assert_eq!(session.value(), initial);
      assert_eq!(session.finish(), initial);
    }
  }

  #[test]
  fn check_values() {
    assert_eq!(checksum(SoftCrc::new(), 0xFFFF_FFFF, b"123456789"), 0x0376_E6E7);
    assert_eq!(checksum(SoftCrc::new(), 0, b"123456789"), 0x89A1_897F);
    assert_eq!(checksum(SoftCrc::new(), 0xAAAA_AAAA, b"123456789"), 0x7AC4_3C6F);
  }

  #[test]
  fn begin_resets_a_dirty_device() {
    let mut acc = TableCrc::new();
    {
      let mut abandoned = Session::begin(&mut acc, 0);
      abandoned.feed(b"left mid-stream");
    }
    let crc = checksum(&mut acc, 0xFFFF_FFFF, b"123456789");
    assert_eq!(crc, 0x0376_E6E7);
  }

  #[test]
  fn subword_force_matches_auto() {
    for len in 0..=WORKED.len() {
      let data = &WORKED[..len];
      let mut auto = Session::begin_with(SoftCrc::new(), 0x0BAD_CAFE, FeedForce::Auto);
      let mut forced = Session::begin_with(SoftCrc::new(), 0x0BAD_CAFE, FeedForce::Subword);
      auto.feed(data);
      forced.feed(data);
      assert_eq!(forced.force(), FeedForce::Subword);
      assert_eq!(forced.stats().words, 0);
      assert_eq!(auto.finish(), forced.finish(), "len={len}");
    }
  }

  #[test]
  fn value_tracks_reference_between_feeds() {
    let mut session = Session::begin(SoftCrc::new(), 0x5555_AAAA);
    let mut fed = Vec::new();
    for chunk in WORKED.chunks(3).chain(WORKED.chunks(5)) {
      session.feed(chunk);
      fed.extend_from_slice(chunk);
      assert_eq!(session.value(), crc32_msb_bitwise(0x5555_AAAA, &fed));
    }
  }

  #[test]
  fn stats_account_for_every_byte() {
    let data: Vec<u8> = (0..=200u8).collect();
    let mut session = Session::begin_with(SoftCrc::new(), 0x1234_5678, FeedForce::Auto);
    session.feed(&data[1..]);
    session.feed(&data[..7]);
    let stats = session.stats();
    assert_eq!(stats.bytes, 207);
    assert_eq!(stats.words * 4 + stats.folded_bytes, stats.bytes);
    assert!(stats.installs >= 1);
    assert!(stats.to_string().starts_with("bytes=207 "));
  }

  #[test]
  fn seed_is_installed_by_first_word() {
    let buf = Aligned([0u8; 8]);
    let mut session = Session::begin_with(SoftCrc::new(), 0, FeedForce::Auto);
    session.feed(&buf.0);
    let stats = session.stats();
    assert_eq!(stats.words, 2);
    assert_eq!(stats.folds, 0);
    assert_eq!(stats.installs, 1);
    assert_eq!(session.finish(), crc32_msb_bitwise(0, &[0u8; 8]));
  }

  #[test]
  fn head_and_tail_follow_the_address_grid() {
    let mut buf = Aligned([0u8; 16]);
    buf.0.copy_from_slice(b"0123456789abcdef");
    for start in 0..4 {
      for end in 12..=16 {
        let data = &buf.0[start..end];
        let mut session = Session::begin_with(SoftCrc::new(), 0xFFFF_FFFF, FeedForce::Auto);
        session.feed(data);
        let stats = session.stats();
        let head = (4 - start) % 4;
        let tail = (end - start - head) % 4;
        assert_eq!(stats.folds, u64::from(head != 0) + u64::from(tail != 0), "start={start} end={end}");
        assert_eq!(stats.folded_bytes, (head + tail) as u64);
        assert_eq!(session.finish(), crc32_msb_bitwise(0xFFFF_FFFF, data));
      }
    }
  }

  #[test]
  fn short_unaligned_range_only_folds() {
    let buf = Aligned(*b"abcdefgh");
    let mut session = Session::begin_with(SoftCrc::new(), 0xFFFF_FFFF, FeedForce::Auto);
    session.feed(&buf.0[1..3]);
    let stats = session.stats();
    assert_eq!((stats.folds, stats.folded_bytes, stats.words), (1, 2, 0));
    assert_eq!(session.finish(), crc32_msb_bitwise(0xFFFF_FFFF, b"bc"));
  }

  #[test]
  fn release_returns_accumulator() {
    let buf = Aligned(*b"1234");
    let mut session = Session::begin_with(TableCrc::new(), 0xFFFF_FFFF, FeedForce::Auto);
    session.feed(&buf.0);
    assert_eq!(session.backend_name(), "soft/table");
    let (crc, acc) = session.finish_and_release();
    // One aligned word absorbs the whole correction.
    assert_eq!(crc, acc.read());
    assert_eq!(crc, crc32_msb_bitwise(0xFFFF_FFFF, b"1234"));
  }

  #[test]
  fn fold_consumes_long_runs() {
    let mut session = Session::begin_with(SoftCrc::new(), 0xFFFF_FFFF, FeedForce::Auto);
    session.fold(b"123456789");
    assert_eq!(session.value(), 0x0376_E6E7);
    let stats = session.stats();
    assert_eq!((stats.folds, stats.folded_bytes, stats.words), (3, 9, 0));
  }

  #[test]
  fn head_len_follows_address() {
    let buf = Aligned([0u8; 16]);
    for start in 0..4 {
      for len in 0..12 {
        let data = &buf.0[start..start + len];
        assert_eq!(head_len(data), ((4 - start) % 4).min(len), "start={start} len={len}");
      }
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    let mut vectored = Session::begin(SoftCrc::new(), 0xFFFF_FFFF);
    vectored.feed_vectored(&[&WORKED[..1], &[], &WORKED[1..6], &WORKED[6..]]);
    assert_eq!(vectored.finish(), 0xF783_2A2F);
  }
}
