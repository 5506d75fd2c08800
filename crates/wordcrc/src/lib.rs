//! Byte-granular, incremental CRC-32 on word-only accumulators.
//!
//! Many microcontrollers carry a CRC unit that computes CRC-32 (polynomial
//! `0x04C11DB7`, MSB first) over 32-bit words. It can be reset to
//! `0xFFFFFFFF`, written a word at a time, and read, and nothing else: no
//! custom initial value, no byte input, no way to XOR bits into the
//! register.
//!
//! This crate layers a byte-ordered, arbitrarily chunked, arbitrarily
//! aligned CRC on top of such a unit. The result equals a bit-serial shift
//! register run over the concatenation of everything fed, seeded with any
//! initial value.
//!
//! # How
//!
//! CRC is linear over GF(2). The engine keeps a *correction* word next to the
//! device so that `register ^ correction` is always the true CRC:
//!
//! - `begin(initial)` resets the device and sets `correction = R0 ^ initial`
//! - whole words are written byte-swapped to big-endian order; the first one
//!   absorbs the correction
//! - 1–3 stray bytes are folded in algebraically (see [`subword`])
//! - `finish()` returns `register ^ correction`
//!
//! # Example
//!
//! ```rust
//! use device::SoftCrc;
//! use wordcrc::Session;
//!
//! let data = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0xA6, 0xB7, 0xC8];
//!
//! let mut session = Session::begin(SoftCrc::new(), 0xFFFF_FFFF);
//! session.feed(&data[..5]);
//! session.feed(&data[5..]);
//! assert_eq!(session.finish(), 0xF783_2A2F);
//! ```
//!
//! # Exclusive Access
//!
//! One session per device at a time. A [`Session`] owns or mutably borrows
//! its accumulator; [`Shared`] (feature `std`) serializes sessions on a
//! device used from several threads.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! wordcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
#[cfg(feature = "std")]
pub mod io;
mod session;
#[cfg(feature = "std")]
mod shared;
pub mod subword;

#[cfg(test)]
mod proptests;

pub use config::{FeedConfig, FeedForce};
pub use session::{FeedStats, Session, checksum};
#[cfg(feature = "std")]
pub use shared::{Locked, Shared};
// Re-export traits for convenience
pub use traits::{BusyError, RESET_VALUE, WordAccumulator};
