//! `std::io::Write` adapter.

use std::io::{self, Write};

use traits::WordAccumulator;

use crate::Session;

/// Writer that feeds every byte it passes through into a session.
///
/// Only the bytes the inner writer accepts are fed, so short writes keep
/// the CRC in step with the output.
///
/// # Example
///
/// ```
/// use std::io::Write;
///
/// use device::SoftCrc;
/// use wordcrc::{Session, io::SessionWriter};
///
/// let mut writer = SessionWriter::new(Vec::new(), Session::begin(SoftCrc::new(), 0xFFFF_FFFF));
/// writer.write_all(b"123456789")?;
/// let (out, crc) = writer.into_parts();
/// assert_eq!(out, b"123456789");
/// assert_eq!(crc, 0x0376_E6E7);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct SessionWriter<W, A: WordAccumulator> {
  inner: W,
  session: Session<A>,
}

impl<W, A: WordAccumulator> SessionWriter<W, A> {
  /// Wrap `inner`, feeding `session`.
  #[inline]
  #[must_use]
  pub fn new(inner: W, session: Session<A>) -> Self {
    Self { inner, session }
  }

  /// CRC of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.session.value()
  }

  /// Reference to the inner writer.
  #[inline]
  pub fn get_ref(&self) -> &W {
    &self.inner
  }

  /// Finish the session; return the inner writer and the CRC.
  #[inline]
  #[must_use]
  pub fn into_parts(self) -> (W, u32) {
    (self.inner, self.session.finish())
  }
}

impl<W: Write, A: WordAccumulator> Write for SessionWriter<W, A> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(written) = buf.get(..n) {
      self.session.feed(written);
    }
    Ok(n)
  }

  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}
