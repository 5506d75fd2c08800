//! Error types for accumulator access.
//!
//! The CRC algebra itself cannot fail: every byte range, alignment and
//! initial value is valid input. The one runtime condition callers can
//! observe is contention for a shared accumulator.

use core::fmt;

/// The accumulator is held by another session.
///
/// Returned by non-blocking acquisition of a shared accumulator when a
/// session is already in flight against it. The holder keeps exclusive
/// access until its session is finished or dropped.
///
/// # Examples
///
/// ```
/// use traits::BusyError;
///
/// fn acquire(held: bool) -> Result<(), BusyError> {
///   if held { Err(BusyError::new()) } else { Ok(()) }
/// }
///
/// assert!(acquire(true).is_err());
/// assert!(acquire(false).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct BusyError;

impl BusyError {
  /// Create a new busy error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for BusyError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for BusyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("accumulator is held by another session")
  }
}

impl core::error::Error for BusyError {}
