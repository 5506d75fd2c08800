//! STM32 CRC peripheral.
//!
//! The CRC unit found on STM32 F0/F1/F2/F3/F4/F7/L0/L4/G0/G4 parts exposes
//! the word accumulator contract directly:
//!
//! | Offset | Register | Use |
//! |--------|----------|-----|
//! | `0x00` | `DR`  | write: feed one word; read: current CRC |
//! | `0x04` | `IDR` | scratch byte, unused here |
//! | `0x08` | `CR`  | bit 0 `RESET` loads `0xFFFFFFFF` into `DR` |
//!
//! Parts with a programmable unit (`INIT`/`POL` registers, `REV_IN`/`REV_OUT`
//! bits) must be left at their reset configuration: 32-bit polynomial
//! `0x04C11DB7`, init `0xFFFFFFFF`, no bit reversal.
//!
//! The peripheral clock must be enabled before the first access; that is the
//! job of the board support code, not this crate.

use core::ptr::NonNull;

use traits::WordAccumulator;

/// Base address of the CRC unit on STM32F1/F2/F4/L4 parts.
pub const STM32F4_CRC_BASE: usize = 0x4002_3000;

/// `CR.RESET`: resets the data register to `0xFFFFFFFF`. Self-clearing.
pub const CR_RESET: u32 = 1;

/// Memory layout of the CRC unit's first three registers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterBlock {
  /// Data register.
  pub dr: u32,
  /// Independent data register.
  pub idr: u32,
  /// Control register.
  pub cr: u32,
}

/// Memory-mapped STM32 CRC peripheral.
///
/// Only one `Stm32Crc` may exist per peripheral. Wrap it in
/// `wordcrc::Shared` when several tasks need CRCs.
#[derive(Debug)]
pub struct Stm32Crc {
  regs: NonNull<RegisterBlock>,
}

// SAFETY: `Stm32Crc` is the unique handle to its register block (see `new`),
// so moving it to another thread cannot introduce a concurrent access.
unsafe impl Send for Stm32Crc {}

impl Stm32Crc {
  /// Wrap the register block at `regs`.
  ///
  /// # Safety
  ///
  /// `regs` must point at a CRC register block (or memory standing in for
  /// one) that is valid for volatile reads and writes for the lifetime of the
  /// returned value, and nothing else may access that block meanwhile.
  #[inline]
  #[must_use]
  pub const unsafe fn new(regs: NonNull<RegisterBlock>) -> Self {
    Self { regs }
  }

  /// Wrap the register block at physical address `base`.
  ///
  /// Returns `None` for a null address.
  ///
  /// # Safety
  ///
  /// Same contract as [`Stm32Crc::new`].
  ///
  /// # Example
  ///
  /// ```no_run
  /// use device::{Stm32Crc, stm32::STM32F4_CRC_BASE};
  /// use traits::WordAccumulator;
  ///
  /// // SAFETY: the CRC clock is enabled and this is the only handle.
  /// if let Some(mut crc) = unsafe { Stm32Crc::at(STM32F4_CRC_BASE) } {
  ///   crc.reset();
  ///   crc.write(u32::from_be_bytes(*b"1234"));
  ///   let _ = crc.read();
  /// }
  /// ```
  #[inline]
  #[must_use]
  pub unsafe fn at(base: usize) -> Option<Self> {
    let regs = NonNull::new(base as *mut RegisterBlock)?;
    // SAFETY: forwarded to the caller.
    Some(unsafe { Self::new(regs) })
  }

  /// Release the register block pointer.
  #[inline]
  #[must_use]
  pub const fn into_raw(self) -> NonNull<RegisterBlock> {
    self.regs
  }
}

impl WordAccumulator for Stm32Crc {
  #[inline]
  fn reset(&mut self) {
    let regs = self.regs.as_ptr();
    // SAFETY: `regs` is valid for volatile access per the `new` contract.
    unsafe {
      let cr = &raw mut (*regs).cr;
      cr.write_volatile(cr.read_volatile() | CR_RESET);
    }
  }

  #[inline]
  fn write(&mut self, word: u32) {
    let regs = self.regs.as_ptr();
    // SAFETY: `regs` is valid for volatile access per the `new` contract.
    unsafe { (&raw mut (*regs).dr).write_volatile(word) }
  }

  #[inline]
  fn read(&self) -> u32 {
    let regs = self.regs.as_ptr();
    // SAFETY: `regs` is valid for volatile access per the `new` contract.
    unsafe { (&raw const (*regs).dr).read_volatile() }
  }

  fn name(&self) -> &'static str {
    "stm32/mmio"
  }
}
