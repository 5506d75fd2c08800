//! Exclusive access to a shared accumulator.
//!
//! The correction value lives outside the device, so two interleaved
//! sessions on one accumulator silently corrupt each other. [`Shared`] puts
//! the device behind a mutex and hands out sessions that hold the lock from
//! `begin` until they are finished (or dropped).
//!
//! A session abandoned by a panic poisons the mutex. That is harmless here:
//! every `begin` resets the device, so the poison is cleared and the next
//! session starts from a clean register.

use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use traits::{BusyError, WordAccumulator};

use crate::Session;

/// An accumulator shared between threads or tasks.
///
/// # Example
///
/// ```
/// use device::SoftCrc;
/// use wordcrc::Shared;
///
/// static CRC: Shared<SoftCrc> = Shared::new(SoftCrc::new());
///
/// let mut session = CRC.begin(0xFFFF_FFFF);
/// session.feed(b"123456789");
/// assert!(CRC.try_begin(0).is_err()); // held until finished
/// assert_eq!(session.finish(), 0x0376_E6E7);
/// assert!(CRC.try_begin(0).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Shared<A> {
  inner: Mutex<A>,
}

impl<A> Shared<A> {
  /// Wrap `acc`.
  #[inline]
  #[must_use]
  pub const fn new(acc: A) -> Self {
    Self { inner: Mutex::new(acc) }
  }

  /// Unwrap the accumulator.
  #[must_use]
  pub fn into_inner(self) -> A {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<A: WordAccumulator> Shared<A> {
  /// Wait for exclusive access, then begin a session seeded with `initial`.
  #[must_use]
  pub fn begin(&self, initial: u32) -> Session<Locked<'_, A>> {
    let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
    Session::begin(Locked { guard }, initial)
  }

  /// Begin a session only if no other session holds the accumulator.
  pub fn try_begin(&self, initial: u32) -> Result<Session<Locked<'_, A>>, BusyError> {
    let guard = match self.inner.try_lock() {
      Ok(guard) => guard,
      Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
      Err(TryLockError::WouldBlock) => return Err(BusyError::new()),
    };
    Ok(Session::begin(Locked { guard }, initial))
  }

  /// One-shot CRC of `data` under the lock.
  #[must_use]
  pub fn checksum(&self, initial: u32, data: &[u8]) -> u32 {
    let mut session = self.begin(initial);
    session.feed(data);
    session.finish()
  }
}

/// Accumulator handle holding the [`Shared`] lock.
#[derive(Debug)]
pub struct Locked<'a, A> {
  guard: MutexGuard<'a, A>,
}

impl<A: WordAccumulator> WordAccumulator for Locked<'_, A> {
  #[inline]
  fn reset(&mut self) {
    self.guard.reset();
  }

  #[inline]
  fn write(&mut self, word: u32) {
    self.guard.write(word);
  }

  #[inline]
  fn read(&self) -> u32 {
    self.guard.read()
  }

  #[inline]
  fn name(&self) -> &'static str {
    self.guard.name()
  }
}
